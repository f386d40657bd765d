use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::a007_staff::aggregate::StaffRole;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
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
}

/// Profile edit form; a new avatar travels as a multipart file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    #[validate(length(min = 2, max = 100, message = "Name must be 2 to 100 characters"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    pub phone: String,
}

impl From<&UserProfile> for ProfileForm {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "check_confirmation", skip_on_field_errors = false))]
pub struct ChangePasswordForm {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 8, message = "New password must be at least 8 characters"))]
    pub new_password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

fn check_confirmation(form: &ChangePasswordForm) -> Result<(), ValidationError> {
    if form.new_password != form.confirm_password {
        let mut err = ValidationError::new("confirm_password");
        err.message = Some("Passwords do not match".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{validate_form, FormErrors};

    #[test]
    fn mismatched_confirmation_is_a_form_error() {
        let form = ChangePasswordForm {
            current_password: "old-secret".into(),
            new_password: "new-secret-1".into(),
            confirm_password: "new-secret-2".into(),
        };
        let mut errors = FormErrors::new();
        assert!(!validate_form(&mut errors, &form));
        assert_eq!(errors.global(), Some("Passwords do not match"));
    }

    #[test]
    fn confirmation_is_not_sent() {
        let form = ChangePasswordForm {
            current_password: "a".into(),
            new_password: "b".into(),
            confirm_password: "b".into(),
        };
        let json = serde_json::to_value(&form).unwrap();
        assert!(json.get("confirmPassword").is_none());
        assert_eq!(json["newPassword"], "b");
    }
}
