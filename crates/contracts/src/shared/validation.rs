//! Per-field and whole-form validation over `validator` schemas.
//!
//! Each form DTO derives [`Validate`]; this module turns the collected
//! `ValidationErrors` into a flat field → first message map the UI renders
//! under the offending input. Struct-level (schema) errors land under
//! [`GLOBAL_ERROR_KEY`].

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

/// Synthetic key for errors that are not tied to one field.
pub const GLOBAL_ERROR_KEY: &str = "global";

/// Key `validator` uses for `#[validate(schema(...))]` failures.
const SCHEMA_ERROR_KEY: &str = "__all__";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn global(&self) -> Option<&str> {
        self.get(GLOBAL_ERROR_KEY)
    }

    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn clear_field(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Flattens `validator` output into field → first message.
pub fn collect_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let field = field.to_string();
            let first = errs.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field.replace('_', " ")));
            let key = if field == SCHEMA_ERROR_KEY {
                GLOBAL_ERROR_KEY.to_string()
            } else {
                field
            };
            Some((key, message))
        })
        .collect()
}

/// Validates a single field of `form`.
///
/// On failure records the first message under `field`; on success clears
/// `field` and the global entry. Returns whether the field is valid.
pub fn validate_field<F: Validate>(errors: &mut FormErrors, form: &F, field: &str) -> bool {
    let message = match form.validate() {
        Ok(()) => None,
        Err(all) => collect_messages(&all).remove(field),
    };

    match message {
        Some(message) => {
            errors.set(field, message);
            false
        }
        None => {
            errors.clear_field(field);
            errors.clear_field(GLOBAL_ERROR_KEY);
            true
        }
    }
}

/// Validates the whole form, collecting every field error, and replaces
/// the error map. Returns whether the form is valid.
pub fn validate_form<F: Validate>(errors: &mut FormErrors, form: &F) -> bool {
    errors.clear();
    match form.validate() {
        Ok(()) => true,
        Err(all) => {
            errors.errors = collect_messages(&all);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[derive(Debug, Default, Validate)]
    #[validate(schema(function = "check_window", skip_on_field_errors = false))]
    struct SampleForm {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(email(message = "Enter a valid email"))]
        email: String,
        #[validate(range(min = 0.0))]
        amount: f64,
        starts: u32,
        ends: u32,
    }

    fn check_window(form: &SampleForm) -> Result<(), ValidationError> {
        if form.ends < form.starts {
            let mut err = ValidationError::new("window");
            err.message = Some("End must not precede start".into());
            return Err(err);
        }
        Ok(())
    }

    fn valid() -> SampleForm {
        SampleForm {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            amount: 1.0,
            starts: 1,
            ends: 2,
        }
    }

    #[test]
    fn whole_form_collects_every_error() {
        let form = SampleForm {
            name: String::new(),
            email: "nope".into(),
            amount: -1.0,
            starts: 5,
            ends: 1,
        };
        let mut errors = FormErrors::new();
        assert!(!validate_form(&mut errors, &form));
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Enter a valid email"));
        assert_eq!(errors.get("amount"), Some("Invalid value for amount"));
        assert_eq!(errors.global(), Some("End must not precede start"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn whole_form_replaces_previous_map() {
        let mut errors = FormErrors::new();
        errors.set("stale", "old");
        assert!(validate_form(&mut errors, &valid()));
        assert!(errors.is_empty());
    }

    #[test]
    fn single_field_only_touches_that_field() {
        let form = SampleForm {
            name: String::new(),
            email: "bad".into(),
            ..valid()
        };
        let mut errors = FormErrors::new();
        assert!(!validate_field(&mut errors, &form, "name"));
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), None);
    }

    #[test]
    fn single_field_success_clears_field_and_global() {
        let mut errors = FormErrors::new();
        errors.set("name", "Name is required");
        errors.set(GLOBAL_ERROR_KEY, "Server rejected the form");
        errors.set("email", "Enter a valid email");

        let form = SampleForm {
            email: "bad".into(),
            ..valid()
        };
        assert!(validate_field(&mut errors, &form, "name"));
        assert_eq!(errors.get("name"), None);
        assert_eq!(errors.global(), None);
        assert_eq!(errors.get("email"), Some("Enter a valid email"));
    }
}
