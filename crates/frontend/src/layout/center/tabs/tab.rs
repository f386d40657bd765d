use leptos::ev;
use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;

/// One entry of the tab bar.
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key);
    let is_active = Memo::new(move |_| {
        tabs_store
            .active
            .with(|active| key.with_value(|k| active.as_deref() == Some(k.as_str())))
    });

    let on_click = move |_| key.with_value(|k| tabs_store.activate_tab(k));
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span class="tab__title">{move || current_title(tabs_store, key.get_value()).unwrap_or_default()}</span>
            <button class="tab-close" title="Close" on:click=on_close>{icon("x")}</button>
        </div>
    }
}

/// Current title; it can change after the tab opened, e.g. once a record loads.
fn current_title(tabs_store: AppGlobalContext, key: String) -> Option<String> {
    tabs_store
        .opened
        .with(|tabs| tabs.iter().find(|t| t.key == key).map(|t| t.title.clone()))
}
