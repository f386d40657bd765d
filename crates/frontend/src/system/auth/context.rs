use contracts::shared::realtime::OutgoingEvent;
use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use super::session::{HashNavigator, SessionError, SessionManager, SessionPhase};
use super::storage::LocalStore;
use crate::shared::realtime::{use_realtime, RealtimeContext};

type BrowserSession = SessionManager<LocalStore, HashNavigator>;

/// Reactive view of the session, provided by [`SessionProvider`].
#[derive(Clone, Copy)]
pub struct SessionContext {
    manager: StoredValue<BrowserSession>,
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<SessionUser>>,
    pub phase: RwSignal<SessionPhase>,
    realtime: Option<RealtimeContext>,
}

impl SessionContext {
    fn new(realtime: Option<RealtimeContext>) -> Self {
        Self {
            manager: StoredValue::new(SessionManager::new(LocalStore, HashNavigator)),
            token: RwSignal::new(None),
            user: RwSignal::new(None),
            phase: RwSignal::new(SessionPhase::Init),
            realtime,
        }
    }

    /// Copies the manager state into the signals.
    fn sync(&self) {
        let snapshot = self.manager.try_with_value(|m| {
            (
                m.phase(),
                m.token().map(str::to_string),
                m.user().cloned(),
            )
        });
        if let Some((phase, token, user)) = snapshot {
            self.phase.try_set(phase);
            self.token.try_set(token);
            self.user.try_set(user);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase.get() == SessionPhase::Authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.user.with(|u| u.as_ref().is_some_and(SessionUser::is_admin))
    }

    pub fn login(
        &self,
        token: &str,
        user: SessionUser,
        redirect_to: Option<&str>,
    ) -> Result<(), SessionError> {
        let staff_id = user.id.clone();
        self.manager
            .try_update_value(|m| m.login(token, user, redirect_to))
            .unwrap_or(Err(SessionError::Disposed))?;
        self.sync();
        if let Some(realtime) = self.realtime {
            realtime.send(OutgoingEvent::LoginStaff { staff_id });
        }
        Ok(())
    }

    pub fn logout(&self) {
        let previous = self.manager.try_update_value(|m| m.logout()).flatten();
        if let (Some(user), Some(realtime)) = (previous, self.realtime) {
            realtime.send(OutgoingEvent::LogoutStaff { staff_id: user.id });
        }
        self.sync();
    }

    /// Replaces the stored user after a profile edit.
    pub fn refresh_user(&self, user: SessionUser) {
        let Some(token) = self.token.get_untracked() else {
            return;
        };
        let result = self
            .manager
            .try_update_value(|m| m.login(&token, user, None))
            .unwrap_or(Err(SessionError::Disposed));
        match result {
            Ok(()) => self.sync(),
            Err(err) => log::warn!("session: could not store updated profile: {}", err),
        }
    }
}

/// Restores the session, follows other tabs, and provides [`SessionContext`].
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new(use_realtime());
    session.manager.update_value(|m| {
        m.restore();
    });
    session.sync();

    let storage_listener = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
        let key = ev.key();
        let new_value = ev.new_value();
        let changed = session
            .manager
            .try_update_value(|m| m.on_storage_change(key.as_deref(), new_value.as_deref()))
            .unwrap_or(false);
        if changed {
            session.sync();
        }
    });

    on_cleanup(move || {
        storage_listener.remove();
        session.manager.try_update_value(|m| m.dispose());
    });

    provide_context(session);
    children()
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
