use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::question::models::Question;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Categories keyed by id, the shape the frontend expects
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_map_serializes_with_string_keys() {
        let categories = vec![
            Category {
                id: 2,
                kind: "Art".into(),
            },
            Category {
                id: 1,
                kind: "Science".into(),
            },
        ];

        let json = serde_json::to_value(category_map(categories)).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }

    #[test]
    fn category_kind_is_named_type_on_the_wire() {
        let category = Category {
            id: 4,
            kind: "History".into(),
        };

        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["type"], "History");
    }
}
