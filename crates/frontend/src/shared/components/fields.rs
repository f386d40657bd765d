//! Inputs bound to one field of a [`FormState`].
//!
//! Each edit goes through [`FormState::update_field`], so the field is
//! revalidated as the user types and its message shows right below it.

use leptos::prelude::*;
use validator::Validate;

use crate::shared::form::{FieldError, FormState};

#[component]
pub fn TextField<F>(
    state: FormState<F>,
    /// Name of the field in the validation schema.
    field: &'static str,
    label: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
    /// HTML input type, `text` when omitted.
    #[prop(optional)]
    kind: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView
where
    F: Validate + Clone + Send + Sync + 'static,
{
    view! {
        <div class="form__group">
            <label class="form__label" for=field>{label}</label>
            <input
                id=field
                class="form__input"
                class:form__input--invalid=move || state.errors.with(|e| e.get(field).is_some())
                type=kind.unwrap_or("text")
                placeholder=placeholder
                disabled=move || disabled.get() || state.saving.get()
                prop:value=move || state.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update_field(field, |form| set(form, value));
                }
            />
            <FieldError error=state.error(field) />
        </div>
    }
}

#[component]
pub fn TextAreaField<F>(
    state: FormState<F>,
    field: &'static str,
    label: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
    #[prop(default = 4)] rows: u32,
) -> impl IntoView
where
    F: Validate + Clone + Send + Sync + 'static,
{
    view! {
        <div class="form__group">
            <label class="form__label" for=field>{label}</label>
            <textarea
                id=field
                class="form__textarea"
                rows=rows
                disabled=move || state.saving.get()
                prop:value=move || state.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update_field(field, |form| set(form, value));
                }
            />
            <FieldError error=state.error(field) />
        </div>
    }
}

#[component]
pub fn CheckboxField<F>(
    state: FormState<F>,
    field: &'static str,
    label: &'static str,
    get: fn(&F) -> bool,
    set: fn(&mut F, bool),
) -> impl IntoView
where
    F: Validate + Clone + Send + Sync + 'static,
{
    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=field
                type="checkbox"
                class="form__checkbox"
                disabled=move || state.saving.get()
                prop:checked=move || state.form.with(get)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    state.update_field(field, |form| set(form, checked));
                }
            />
            <label class="form__checkbox-label" for=field>{label}</label>
        </div>
    }
}

/// `options` are `(value, label)` pairs; `get`/`set` work on the value.
#[component]
pub fn SelectField<F>(
    state: FormState<F>,
    field: &'static str,
    label: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: Validate + Clone + Send + Sync + 'static,
{
    view! {
        <div class="form__group">
            <label class="form__label" for=field>{label}</label>
            <select
                id=field
                class="form__select"
                disabled=move || state.saving.get()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update_field(field, |form| set(form, value));
                }
            >
                {move || {
                    let current = state.form.with(get);
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| {
                            let selected = value == current;
                            view! { <option value=value selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
            <FieldError error=state.error(field) />
        </div>
    }
}

/// Options for a select built from an enum's `ALL` list.
pub fn enum_options<T: Copy>(
    all: &[T],
    value: fn(&T) -> &'static str,
    label: fn(&T) -> &'static str,
) -> Vec<(String, String)> {
    all.iter()
        .map(|item| (value(item).to_string(), label(item).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_order::aggregate::OrderStatus;

    #[test]
    fn enum_options_keep_declaration_order() {
        let options = enum_options(&OrderStatus::ALL, OrderStatus::as_str, OrderStatus::label);
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], ("pending".to_string(), "Pending".to_string()));
        assert_eq!(options[5].0, "returned");
    }
}
