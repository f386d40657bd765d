use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub subscribed_at: Option<String>,
}

/// Mail-out to every active subscriber.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterCampaignForm {
    #[validate(length(min = 1, max = 150, message = "Subject is required (max 150 characters)"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message body is required"))]
    pub body: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResult {
    #[serde(default)]
    pub recipients: u32,
}
