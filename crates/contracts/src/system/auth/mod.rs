use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::a007_staff::aggregate::StaffRole;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Signed-in staff member as kept in browser storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: StaffRole,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == StaffRole::Admin
    }

    /// Up to two initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{validate_form, FormErrors};

    #[test]
    fn login_requires_email_and_password() {
        let mut errors = FormErrors::new();
        let request = LoginRequest {
            email: "admin".into(),
            password: String::new(),
        };
        assert!(!validate_form(&mut errors, &request));
        assert_eq!(errors.get("email"), Some("Enter a valid email address"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn initials_take_first_letters() {
        let user = SessionUser {
            name: "ada king lovelace".into(),
            ..Default::default()
        };
        assert_eq!(user.initials(), "AK");
    }
}
