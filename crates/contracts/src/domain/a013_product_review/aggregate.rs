use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReview {
    pub id: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ProductReview {
    /// `★★★☆☆` for a rating of 3; out-of-range ratings are clamped.
    pub fn stars(&self) -> String {
        let filled = self.rating.min(5) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewModerationForm {
    pub is_approved: bool,
    #[validate(length(max = 1000, message = "Reply must not exceed 1000 characters"))]
    pub reply: Option<String>,
}

impl From<&ProductReview> for ReviewModerationForm {
    fn from(review: &ProductReview) -> Self {
        Self {
            is_approved: review.is_approved,
            reply: review.reply.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_clamped() {
        let mut review = ProductReview {
            rating: 3,
            ..Default::default()
        };
        assert_eq!(review.stars(), "★★★☆☆");
        review.rating = 9;
        assert_eq!(review.stars(), "★★★★★");
    }
}
