//! Loading, saving and framing of details pages.

use std::future::Future;

use contracts::shared::{ApiError, ApiResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use validator::Validate;

use super::service::ResourceService;
use super::Resource;
use crate::shared::form::FormState;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifier, Notifier};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::{use_session, SessionContext};

/// Toast text for a successful write.
pub fn success_message(server_message: &str, fallback: &str) -> String {
    let message = server_message.trim();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

/// Runs API calls on behalf of a page.
///
/// Captured while the component is built, so handlers can use it without
/// a reactive owner. A 401 signs the user out; any other failure becomes
/// an error toast.
#[derive(Clone, Copy)]
pub struct PageActions {
    session: SessionContext,
    notifier: Notifier,
}

impl PageActions {
    pub fn new() -> Self {
        Self {
            session: use_session(),
            notifier: use_notifier(),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.session.token.get_untracked()
    }

    pub fn notifier(&self) -> Notifier {
        self.notifier
    }

    pub fn report(&self, err: ApiError) {
        if err.is_unauthorized() {
            self.session.logout();
        } else {
            self.notifier.error(err.message);
        }
    }

    /// Fetches one `R` and hands it to `on_loaded`.
    pub fn load<R: Resource>(
        &self,
        id: String,
        loading: RwSignal<bool>,
        on_loaded: impl FnOnce(R::Item) + 'static,
    ) {
        loading.set(true);
        let token = self.token();
        let this = *self;
        spawn_local(async move {
            let result = ResourceService::<R>::browser(token.as_deref())
                .fetch_one(&id)
                .await;
            loading.try_set(false);
            match result {
                Ok(item) => on_loaded(item),
                Err(err) => {
                    log::warn!("{}: could not load {}: {}", R::PATH, id, err);
                    this.report(err);
                }
            }
        });
    }

    /// Validates `state` and, when valid, sends it.
    ///
    /// A failed request is shown both as a toast and in the form banner.
    pub fn submit<F, T, Fut>(
        &self,
        state: FormState<F>,
        send: impl FnOnce(Option<String>, F) -> Fut + 'static,
        on_saved: impl FnOnce(ApiResponse<T>) + 'static,
    ) where
        F: Validate + Clone + Send + Sync + 'static,
        T: 'static,
        Fut: Future<Output = Result<ApiResponse<T>, ApiError>> + 'static,
    {
        if state.saving.get_untracked() {
            return;
        }
        let Some(form) = state.validate_all() else {
            self.notifier.error("Please correct the highlighted fields");
            return;
        };

        state.saving.set(true);
        let token = self.token();
        let this = *self;
        spawn_local(async move {
            let result = send(token, form).await;
            state.saving.try_set(false);
            match result {
                Ok(response) => {
                    this.notifier
                        .success(success_message(&response.message, "Saved"));
                    on_saved(response);
                }
                Err(err) => {
                    state.set_server_error(&err);
                    this.report(err);
                }
            }
        });
    }

    /// Sends a request that has no form behind it.
    pub fn run<T, Fut>(
        &self,
        busy: RwSignal<bool>,
        send: impl FnOnce(Option<String>) -> Fut + 'static,
        on_done: impl FnOnce(ApiResponse<T>) + 'static,
    ) where
        T: 'static,
        Fut: Future<Output = Result<ApiResponse<T>, ApiError>> + 'static,
    {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let token = self.token();
        let this = *self;
        spawn_local(async move {
            let result = send(token).await;
            busy.try_set(false);
            match result {
                Ok(response) => {
                    this.notifier.success(success_message(&response.message, "Done"));
                    on_done(response);
                }
                Err(err) => this.report(err),
            }
        });
    }
}

impl Default for PageActions {
    fn default() -> Self {
        Self::new()
    }
}

/// Header, spinner and save/close buttons around a details form.
#[component]
pub fn DetailsFrame(
    page_id: &'static str,
    #[prop(into)] title: Signal<String>,
    #[prop(into, optional)] loading: Signal<bool>,
    #[prop(into, optional)] saving: Signal<bool>,
    /// Hidden for read-only pages.
    #[prop(optional)]
    on_save: Option<Callback<()>>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || title.get()}</h1>
                </div>
                <div class="page__header-right">
                    <Space>
                        {on_save.map(|save| view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || saving.get() || loading.get())
                                on_click=move |_| save.run(())
                            >
                                {icon("save")}
                                {move || if saving.get() { " Saving..." } else { " Save" }}
                            </Button>
                        })}
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                            {icon("x")}
                            " Close"
                        </Button>
                    </Space>
                </div>
            </div>
            <div class="page__content">
                <Show when=move || loading.get()>
                    <Flex justify=FlexJustify::Center>
                        <Spinner />
                    </Flex>
                </Show>
                {children()}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        assert_eq!(success_message("Product updated", "Saved"), "Product updated");
        assert_eq!(success_message("  ", "Saved"), "Saved");
    }
}
