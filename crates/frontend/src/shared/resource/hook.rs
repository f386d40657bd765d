//! Paginated list state for one resource.

use std::marker::PhantomData;

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

use super::service::ResourceService;
use super::tracker::FetchTracker;
use super::Resource;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notifications::use_notifier;
use crate::shared::query::ListQuery;
use crate::shared::realtime::use_realtime;
use crate::system::auth::context::use_session;

pub struct ResourceListState<R: Resource> {
    pub items: RwSignal<Vec<R::Item>>,
    pub total: RwSignal<u64>,
    pub total_pages: RwSignal<u32>,
    /// 1-based.
    pub page: RwSignal<u32>,
    pub limit: RwSignal<u32>,
    pub search_term: RwSignal<String>,
    pub search_by: RwSignal<String>,
    pub filters: RwSignal<Vec<(String, String)>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    refresh: RwSignal<u64>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceListState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourceListState<R> {}

impl<R: Resource> ResourceListState<R> {
    fn new(query: ListQuery) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            total_pages: RwSignal::new(1),
            page: RwSignal::new(query.page),
            limit: RwSignal::new(query.limit),
            search_term: RwSignal::new(query.search_term),
            search_by: RwSignal::new(query.search_by),
            filters: RwSignal::new(query.filters),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            refresh: RwSignal::new(0),
            _resource: PhantomData,
        }
    }

    /// Current query; tracked when called inside a reactive scope.
    pub fn query(&self) -> ListQuery {
        ListQuery {
            search_term: self.search_term.get(),
            search_by: self.search_by.get(),
            filters: self.filters.get(),
            page: self.page.get(),
            limit: self.limit.get(),
        }
    }

    pub fn query_untracked(&self) -> ListQuery {
        ListQuery {
            search_term: self.search_term.get_untracked(),
            search_by: self.search_by.get_untracked(),
            filters: self.filters.get_untracked(),
            page: self.page.get_untracked(),
            limit: self.limit.get_untracked(),
        }
    }

    pub fn reload(&self) {
        self.refresh.update(|n| *n += 1);
    }

    pub fn set_page(&self, page: u32) {
        self.page.set(page.max(1));
    }

    pub fn set_limit(&self, limit: u32) {
        self.limit.set(limit);
        self.page.set(1);
    }

    pub fn set_search(&self, term: String) {
        self.search_term.set(term);
        self.page.set(1);
    }

    pub fn set_search_by(&self, field: String) {
        self.search_by.set(field);
        if !self.search_term.get_untracked().trim().is_empty() {
            self.page.set(1);
        }
    }

    pub fn set_filter(&self, key: &str, value: &str) {
        self.filters.update(|filters| {
            let mut query = ListQuery::new(1, 0);
            query.filters = std::mem::take(filters);
            query.set_filter(key, value);
            *filters = query.filters;
        });
        self.page.set(1);
    }

    pub fn filter(&self, key: &str) -> String {
        self.filters.with(|filters| {
            filters
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        })
    }
}

/// List state for `R`, kept in sync with the server.
///
/// Refetches whenever the token, the active tab, the query or a realtime
/// tick for the resource changes, but only while `R::TAB_KEY` is the active
/// tab. A newer fetch aborts the older one; late responses are dropped.
pub fn use_resource_list<R: Resource>() -> ResourceListState<R> {
    use_resource_list_with::<R>(ListQuery::default())
}

pub fn use_resource_list_with<R: Resource>(initial: ListQuery) -> ResourceListState<R> {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let notifier = use_notifier();
    let realtime = use_realtime();

    let state = ResourceListState::<R>::new(initial);
    let tracker = StoredValue::new_local(FetchTracker::<AbortController>::new());

    Effect::new(move |_| {
        let token = session.token.get();
        let active = ctx.active.get();
        let query = state.query();
        state.refresh.track();
        if let Some(realtime) = realtime {
            realtime.track(R::PATH);
        }

        if active.as_deref() != Some(R::TAB_KEY) {
            return;
        }
        let Some(token) = token else {
            return;
        };

        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        let Some(ticket) = tracker.try_update_value(|t| t.begin(controller)) else {
            return;
        };

        state.loading.set(true);
        spawn_local(async move {
            let service = ResourceService::<R>::browser(Some(&token));
            let result = service.fetch_all(&query, signal.as_ref()).await;

            let current = tracker
                .try_update_value(|t| t.finish(ticket))
                .unwrap_or(false);
            if !current {
                log::debug!("{}: dropped superseded response", R::PATH);
                return;
            }
            state.loading.set(false);

            match result {
                Ok(page) => {
                    state.total_pages.set(page.page_count());
                    state.total.set(page.total);
                    state.items.set(page.items);
                    state.error.set(None);
                }
                Err(err) if err.is_unauthorized() => {
                    log::info!("{}: session rejected, signing out", R::PATH);
                    session.logout();
                }
                Err(err) => {
                    state.error.set(Some(err.message.clone()));
                    notifier.error(err.message);
                }
            }
        });
    });

    state
}
