use leptos::prelude::*;

use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::tabs::{DASHBOARD_KEY, DASHBOARD_TITLE};
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // runs once per sign-in
    tabs_store.init_router_integration((DASHBOARD_KEY, DASHBOARD_TITLE));

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

/// Login page for anonymous visitors, the tabbed console otherwise.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // tabs belong to the signed-in user, however the session ended
    Effect::new(move |_| {
        if !session.is_authenticated() {
            tabs_store.close_all();
        }
    });

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
