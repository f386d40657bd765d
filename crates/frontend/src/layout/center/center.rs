use leptos::prelude::*;

/// Main content zone; holds the tab bar and the open pages.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <main data-zone="center" class="app-center">
            {children()}
        </main>
    }
}
