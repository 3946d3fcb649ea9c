use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::question::models::Question;

/// Category type the frontend sends when the player picks "All"
pub const ALL_CATEGORIES_TYPE: &str = "click";

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    All,
    Only(i32),
}

impl QuizCategory {
    pub fn scope(&self) -> CategoryScope {
        if self.kind == ALL_CATEGORIES_TYPE || self.id == 0 {
            CategoryScope::All
        } else {
            CategoryScope::Only(self.id)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
