use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;

use crate::server::error::ServerError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

impl PageQuery {
    pub fn page_num(&self) -> Result<u32, ServerError> {
        match self.page {
            None => Ok(1),
            Some(0) => Err(ServerError::BadRequest("Pages start at 1".into())),
            Some(page) => Ok(page),
        }
    }
}

/// Fields are optional so a missing one reports 400 instead of a rejection.
/// The frontend sends `category` as a string.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub difficulty: Option<i32>,
}

#[derive(Debug, PartialEq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ServerError;

    fn try_from(request: CreateQuestionRequest) -> Result<Self, Self::Error> {
        let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
            request.question,
            request.answer,
            request.category,
            request.difficulty,
        ) else {
            return Err(ServerError::BadRequest(
                "question, answer, category and difficulty are required".into(),
            ));
        };

        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return Err(ServerError::BadRequest(
                "Question and answer can not be empty".into(),
            ));
        }

        if difficulty < 1 {
            return Err(ServerError::BadRequest(format!(
                "Difficulty must be positive, got {}",
                difficulty
            )));
        }

        Ok(Self {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: BTreeMap<i32, String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> Result<NewQuestion, ServerError> {
        let request: CreateQuestionRequest = serde_json::from_value(value).unwrap();
        NewQuestion::try_from(request)
    }

    #[test]
    fn accepts_category_as_string() {
        let question = parse(json!({
            "question": "  Who painted the Mona Lisa? ",
            "answer": "Leonardo da Vinci",
            "difficulty": 3,
            "category": "2"
        }))
        .unwrap();

        assert_eq!(
            question,
            NewQuestion {
                question: "Who painted the Mona Lisa?".into(),
                answer: "Leonardo da Vinci".into(),
                category: 2,
                difficulty: 3,
            }
        );
    }

    #[test]
    fn rejects_missing_fields() {
        let result = parse(json!({"question": "What?", "answer": "That"}));
        assert!(matches!(result, Err(ServerError::BadRequest(_))));

        let result = parse(json!({}));
        assert!(matches!(result, Err(ServerError::BadRequest(_))));
    }

    #[test]
    fn rejects_blank_text() {
        let result = parse(json!({
            "question": "   ",
            "answer": "Something",
            "difficulty": 1,
            "category": 1
        }));
        assert!(matches!(result, Err(ServerError::BadRequest(_))));
    }

    #[test]
    fn rejects_non_positive_difficulty() {
        let result = parse(json!({
            "question": "Q",
            "answer": "A",
            "difficulty": 0,
            "category": 1
        }));
        assert!(matches!(result, Err(ServerError::BadRequest(_))));
    }

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(PageQuery { page: None }.page_num().unwrap(), 1);
        assert_eq!(PageQuery { page: Some(3) }.page_num().unwrap(), 3);
        assert!(PageQuery { page: Some(0) }.page_num().is_err());
    }
}
