use leptos::prelude::*;

use super::context::use_session;

/// Renders `children` only for administrators.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated() && session.is_admin()
            fallback=|| view! { <div class="access-denied">"Access denied. Administrator role required."</div> }
        >
            {children()}
        </Show>
    }
}
