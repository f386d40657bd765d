//! Reactive form state on top of the contracts validation helpers.

use contracts::shared::{validate_field, validate_form, ApiError, FormErrors, GLOBAL_ERROR_KEY};
use leptos::prelude::*;
use validator::Validate;

pub struct FormState<F: Send + Sync + 'static> {
    pub form: RwSignal<F>,
    pub errors: RwSignal<FormErrors>,
    pub saving: RwSignal<bool>,
}

impl<F: Send + Sync + 'static> Clone for FormState<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for FormState<F> {}

impl<F> FormState<F>
where
    F: Validate + Clone + Send + Sync + 'static,
{
    pub fn new(initial: F) -> Self {
        Self {
            form: RwSignal::new(initial),
            errors: RwSignal::new(FormErrors::new()),
            saving: RwSignal::new(false),
        }
    }

    /// Applies an edit and revalidates just `field`.
    pub fn update_field(&self, field: &'static str, apply: impl FnOnce(&mut F)) {
        self.form.update(apply);
        let form = self.form.get_untracked();
        self.errors
            .update(|errors| {
                validate_field(errors, &form, field);
            });
    }

    /// Validates everything; returns the form when it is valid.
    pub fn validate_all(&self) -> Option<F> {
        let form = self.form.get_untracked();
        let mut valid = false;
        self.errors.update(|errors| valid = validate_form(errors, &form));
        valid.then_some(form)
    }

    pub fn reset(&self, form: F) {
        self.form.set(form);
        self.errors.update(FormErrors::clear);
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Shows a failed submit as the form-wide error.
    pub fn set_server_error(&self, err: &ApiError) {
        self.errors
            .update(|errors| errors.set(GLOBAL_ERROR_KEY, err.message.clone()));
    }
}

/// Message under an input, hidden while there is none.
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|message| view! { <div class="form__error">{message}</div> })}
    }
}

/// Form-wide error banner.
#[component]
pub fn FormBanner<F>(state: FormState<F>) -> impl IntoView
where
    F: Validate + Clone + Send + Sync + 'static,
{
    let error = state.error(GLOBAL_ERROR_KEY);
    view! {
        {move || error.get().map(|message| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{message}</span>
            </div>
        })}
    }
}

/// `None` for blank input, trimmed text otherwise.
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Number typed into an input; blank or malformed input counts as zero.
pub fn parse_number<N: std::str::FromStr + Default>(value: &str) -> N {
    value.trim().parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_becomes_none() {
        assert_eq!(non_empty("   ".to_string()), None);
        assert_eq!(non_empty(" a@b.c ".to_string()), Some("a@b.c".to_string()));
    }

    #[test]
    fn numbers_fall_back_to_zero() {
        assert_eq!(parse_number::<f64>("12.5"), 12.5);
        assert_eq!(parse_number::<u32>("-3"), 0);
        assert_eq!(parse_number::<i64>(""), 0);
    }
}
