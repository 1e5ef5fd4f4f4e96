//! Pagination - 题目列表分页

/// 每页题目数
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 取第 `page` 页（从 1 开始）
///
/// 返回 `items[(page-1)*10 .. page*10]`，超出数据范围时返回空列表而不是错误。
/// `page < 1` 同样返回空列表。
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }

    let start = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return Vec::new();
    }

    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_len(n: usize, page: i64) -> usize {
        let skipped = QUESTIONS_PER_PAGE as i64 * (page - 1);
        (n as i64 - skipped).clamp(0, QUESTIONS_PER_PAGE as i64) as usize
    }

    #[test]
    fn test_first_page() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, 3), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_page_beyond_data_is_empty() {
        let items: Vec<i32> = (1..=25).collect();
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, i64::MAX).is_empty());
    }

    #[test]
    fn test_non_positive_page_is_empty() {
        let items: Vec<i32> = (1..=5).collect();
        assert!(paginate(&items, 0).is_empty());
        assert!(paginate(&items, -1).is_empty());
    }

    #[test]
    fn test_slice_length_matches_formula() {
        for n in [0usize, 1, 9, 10, 11, 19, 20, 37] {
            let items: Vec<usize> = (0..n).collect();
            for page in 1..=6 {
                assert_eq!(
                    paginate(&items, page).len(),
                    expected_len(n, page),
                    "n={} page={}",
                    n,
                    page
                );
            }
        }
    }
}
