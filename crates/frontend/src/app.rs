use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{Notifier, ToastHost};
use crate::shared::realtime::provide_realtime;
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    let notifier = Notifier::new();
    provide_context(notifier);
    // before the session, which announces logins over the channel
    provide_realtime(notifier);

    view! {
        <SessionProvider>
            <AppRoutes />
            <ToastHost />
        </SessionProvider>
    }
}
