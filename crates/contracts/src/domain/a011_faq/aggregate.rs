use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FaqForm {
    #[validate(length(min = 5, max = 300, message = "Question must be 5 to 300 characters"))]
    pub question: String,
    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer: String,
    #[validate(range(max = 999, message = "Position must not exceed 999"))]
    pub position: u32,
    pub is_active: bool,
}

impl Default for FaqForm {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            position: 0,
            is_active: true,
        }
    }
}

impl From<&Faq> for FaqForm {
    fn from(faq: &Faq) -> Self {
        Self {
            question: faq.question.clone(),
            answer: faq.answer.clone(),
            position: faq.position,
            is_active: faq.is_active,
        }
    }
}
