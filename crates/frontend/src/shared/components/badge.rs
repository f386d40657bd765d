use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge badge--primary",
            BadgeVariant::Success => "badge badge--success",
            BadgeVariant::Warning => "badge badge--warning",
            BadgeVariant::Error => "badge badge--error",
            BadgeVariant::Neutral => "badge badge--neutral",
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! { <span class=variant.class()>{children()}</span> }
}

/// Green/grey badge for an on/off flag.
#[component]
pub fn ActiveBadge(
    active: bool,
    #[prop(default = "Active")] active_label: &'static str,
    #[prop(default = "Inactive")] inactive_label: &'static str,
) -> impl IntoView {
    let (variant, text) = if active {
        (BadgeVariant::Success, active_label)
    } else {
        (BadgeVariant::Neutral, inactive_label)
    };
    view! { <Badge variant=variant>{text}</Badge> }
}
