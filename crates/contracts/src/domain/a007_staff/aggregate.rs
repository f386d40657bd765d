use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    Manager,
    Editor,
    #[default]
    Support,
}

impl StaffRole {
    pub const ALL: [StaffRole; 4] = [
        StaffRole::Admin,
        StaffRole::Manager,
        StaffRole::Editor,
        StaffRole::Support,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Admin => "admin",
            StaffRole::Manager => "manager",
            StaffRole::Editor => "editor",
            StaffRole::Support => "support",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StaffRole::Admin => "Admin",
            StaffRole::Manager => "Manager",
            StaffRole::Editor => "Editor",
            StaffRole::Support => "Support",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: StaffRole,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/edit form; the avatar travels as a multipart file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "check_password", skip_on_field_errors = false))]
pub struct StaffForm {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,
    pub phone: String,
    pub role: StaffRole,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub is_active: bool,
    /// Creating a new account, as opposed to editing one.
    #[serde(skip)]
    pub is_new: bool,
}

fn check_password(form: &StaffForm) -> Result<(), ValidationError> {
    if form.is_new && form.password.as_deref().map_or(true, str::is_empty) {
        let mut err = ValidationError::new("password");
        err.message = Some("A password is required for new staff members".into());
        return Err(err);
    }
    Ok(())
}

impl From<&Staff> for StaffForm {
    fn from(staff: &Staff) -> Self {
        Self {
            name: staff.name.clone(),
            email: staff.email.clone(),
            phone: staff.phone.clone().unwrap_or_default(),
            role: staff.role,
            password: None,
            is_active: staff.is_active,
            is_new: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffStatusRequest {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{validate_form, FormErrors};

    fn form() -> StaffForm {
        StaffForm {
            name: "Dana".into(),
            email: "dana@example.com".into(),
            is_active: true,
            ..Default::default()
        }
    }

    #[test]
    fn new_staff_needs_password() {
        let mut errors = FormErrors::new();
        let creating = StaffForm {
            is_new: true,
            ..form()
        };
        assert!(!validate_form(&mut errors, &creating));
        assert!(errors.global().is_some());

        let with_password = StaffForm {
            password: Some("correct horse".into()),
            ..creating
        };
        assert!(validate_form(&mut errors, &with_password));
    }

    #[test]
    fn editing_keeps_password_optional_and_off_the_wire() {
        let mut errors = FormErrors::new();
        assert!(validate_form(&mut errors, &form()));
        let json = serde_json::to_value(form()).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("isNew").is_none());
    }

    #[test]
    fn short_password_is_a_field_error() {
        let mut errors = FormErrors::new();
        let weak = StaffForm {
            password: Some("123".into()),
            ..form()
        };
        assert!(!validate_form(&mut errors, &weak));
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters"));
    }
}
