//! Quiz - 测验出题的类别选择

/// 测验类别
///
/// 请求中的类别 id 为 `0` 表示不限类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    Any,
    Only(i64),
}

impl QuizCategory {
    pub fn from_id(id: i64) -> Self {
        if id == 0 {
            Self::Any
        } else {
            Self::Only(id)
        }
    }

    /// 需要过滤的分类 id，`Any` 时为 None
    pub fn category_id(&self) -> Option<i64> {
        match self {
            Self::Any => None,
            Self::Only(id) => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_means_any_category() {
        assert_eq!(QuizCategory::from_id(0), QuizCategory::Any);
        assert_eq!(QuizCategory::from_id(0).category_id(), None);
    }

    #[test]
    fn test_specific_category() {
        let category = QuizCategory::from_id(3);
        assert_eq!(category, QuizCategory::Only(3));
        assert_eq!(category.category_id(), Some(3));
    }
}
