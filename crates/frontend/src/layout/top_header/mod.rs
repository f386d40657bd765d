//! Top bar: menu toggle, realtime status, signed-in user and sign-out.

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::static_url;
use crate::shared::icons::icon;
use crate::shared::realtime::use_realtime;
use crate::system::auth::context::use_session;
use crate::system::user_profile;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let realtime = use_realtime();

    let online = move || realtime.is_some_and(|r| r.connected.get());
    let user_name = move || {
        session
            .user
            .with(|u| u.as_ref().map(|u| u.name.clone()))
            .unwrap_or_else(|| "Guest".to_string())
    };
    let avatar = move || {
        session
            .user
            .with(|u| u.as_ref().and_then(|u| u.avatar.clone()))
            .filter(|a| !a.is_empty())
            .map(|a| view! { <img class="avatar avatar--small" src=static_url(&a) alt="" /> })
    };

    let open_profile = move |_| ctx.open_tab(user_profile::TAB_KEY, "My profile");
    let logout = move |_| session.logout();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide menu" } else { "Show menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Store admin"</span>
            </div>

            <div class="top-header__actions">
                <span
                    class="top-header__status"
                    class:top-header__status--online=online
                    title=move || if online() { "Live updates on" } else { "Live updates off" }
                >
                    {icon("bell")}
                </span>

                <button class="top-header__user" on:click=open_profile title="My profile">
                    {avatar}
                    <span>{user_name}</span>
                </button>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
