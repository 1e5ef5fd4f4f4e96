//! Category - 题目分类

use serde::Serialize;
use std::collections::BTreeMap;

/// 题目分类
///
/// 创建后不可变，系统内没有修改分类的入口
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// 构建 id -> type 映射（按 id 排序）
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_type_field() {
        let category = Category::new(1, "Science");
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "type": "Science"}));
    }

    #[test]
    fn test_category_map_keys_become_strings() {
        let categories = vec![Category::new(2, "Art"), Category::new(1, "Science")];
        let map = category_map(&categories);
        assert_eq!(map.len(), 2);

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }
}
