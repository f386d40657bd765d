use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Courier {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Tracking page template; `{tracking}` is replaced by the number.
    #[serde(default)]
    pub tracking_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Courier {
    pub fn tracking_link(&self, tracking_number: &str) -> Option<String> {
        let template = self.tracking_url.as_deref()?;
        if tracking_number.trim().is_empty() {
            return None;
        }
        Some(template.replace("{tracking}", tracking_number.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourierForm {
    #[validate(length(min = 1, max = 100, message = "Courier name is required"))]
    pub name: String,
    #[validate(length(min = 5, max = 20, message = "Enter a valid phone number"))]
    pub phone: String,
    #[validate(email(message = "Enter a valid email"))]
    pub email: Option<String>,
    #[validate(url(message = "Enter a valid URL"))]
    pub tracking_url: Option<String>,
    pub is_active: bool,
}

impl Default for CourierForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: None,
            tracking_url: None,
            is_active: true,
        }
    }
}

impl From<&Courier> for CourierForm {
    fn from(courier: &Courier) -> Self {
        Self {
            name: courier.name.clone(),
            phone: courier.phone.clone(),
            email: courier.email.clone(),
            tracking_url: courier.tracking_url.clone(),
            is_active: courier.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_link_fills_template() {
        let courier = Courier {
            tracking_url: Some("https://track.example.com/?n={tracking}".into()),
            ..Default::default()
        };
        assert_eq!(
            courier.tracking_link(" AB123 ").as_deref(),
            Some("https://track.example.com/?n=AB123")
        );
        assert_eq!(courier.tracking_link(""), None);
    }
}
