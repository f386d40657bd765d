use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub order_count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Block or unblock a customer account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStatusForm {
    pub is_blocked: bool,
    #[validate(length(max = 300, message = "Reason must not exceed 300 characters"))]
    pub reason: String,
}
