use crate::shared::icons::icon;
use leptos::prelude::*;

/// One headline figure on the dashboard.
#[component]
pub fn StatCard(
    label: &'static str,
    /// Name understood by [`icon`].
    icon_name: &'static str,
    /// Formatted value; `None` while loading.
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Draws the card in the warning colour.
    #[prop(into, optional)]
    warning: Signal<bool>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let card_class = move || {
        if warning.get() {
            "stat-card stat-card--warning"
        } else {
            "stat-card"
        }
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get().unwrap_or_else(|| "-".to_string())}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
