use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Open tabs and shell panels.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab named by `?active=` and keeps the URL in sync with
    /// the active tab from then on.
    pub fn init_router_integration(&self, default_tab: (&str, &str)) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match params.get("active").filter(|key| !key.is_empty()) {
            Some(active_key) => {
                let title = super::tabs::tab_title(active_key);
                self.open_tab(active_key, &title);
            }
            None => self.open_tab(default_tab.0, default_tab.1),
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| open_in(tabs, key, title));
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        let mut next_active = None;
        self.opened.update(|tabs| next_active = close_in(tabs, key));
        if was_active {
            self.active.set(next_active);
        }
    }

    /// Drops every tab, e.g. on sign-out.
    pub fn close_all(&self) {
        self.opened.set(Vec::new());
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Adds a tab unless one with `key` is open already.
fn open_in(tabs: &mut Vec<Tab>, key: &str, title: &str) {
    if !tabs.iter().any(|tab| tab.key == key) {
        tabs.push(Tab {
            key: key.to_string(),
            title: title.to_string(),
        });
    }
}

/// Removes `key`; returns the tab that should become active instead.
fn close_in(tabs: &mut Vec<Tab>, key: &str) -> Option<String> {
    tabs.retain(|tab| tab.key != key);
    tabs.last().map(|t| t.key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_twice_keeps_one_tab() {
        let mut tabs = Vec::new();
        open_in(&mut tabs, "a001_product", "Products");
        open_in(&mut tabs, "a003_order", "Orders");
        open_in(&mut tabs, "a001_product", "Products again");
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].title, "Products");
    }

    #[test]
    fn closing_falls_back_to_the_last_tab() {
        let mut tabs = Vec::new();
        open_in(&mut tabs, "a001_product", "Products");
        open_in(&mut tabs, "a003_order", "Orders");
        open_in(&mut tabs, "product_details_p-1", "Product · p-1");

        assert_eq!(close_in(&mut tabs, "product_details_p-1").as_deref(), Some("a003_order"));
        assert_eq!(close_in(&mut tabs, "a003_order").as_deref(), Some("a001_product"));
        assert_eq!(close_in(&mut tabs, "a001_product"), None);
    }
}
