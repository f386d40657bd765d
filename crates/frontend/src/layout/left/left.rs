use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

/// Collapsible left zone; `AppGlobalContext::left_open` drives it.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav data-zone="left" class="app-sidebar" class:app-sidebar--collapsed=move || !ctx.left_open.get()>
            {children()}
        </nav>
    }
}
