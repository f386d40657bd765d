//! Session lifecycle.
//!
//! ```text
//! Init --restore--> Authenticated <--login/logout--> Anonymous
//!   any state --dispose--> Disposed (terminal)
//! ```
//!
//! The token and the signed-in user are persisted under two keys. The user
//! is written first and the token last, so a token in storage always has a
//! user next to it; a half-written pair is treated as no session at all.

use contracts::system::auth::SessionUser;
use thiserror::Error;

use super::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "admin_auth_token";
pub const USER_KEY: &str = "admin_auth_user";
pub const AUTH_PATH: &str = "/auth";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Init,
    Authenticated,
    Anonymous,
    Disposed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session has been disposed")]
    Disposed,
    #[error("could not persist session: {0}")]
    Storage(String),
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Routes through `location.hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashNavigator;

impl Navigator for HashNavigator {
    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(path);
        }
    }
}

pub struct SessionManager<S: KeyValueStore, N: Navigator> {
    store: S,
    navigator: N,
    phase: SessionPhase,
    token: Option<String>,
    user: Option<SessionUser>,
}

impl<S: KeyValueStore, N: Navigator> SessionManager<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self {
            store,
            navigator,
            phase: SessionPhase::Init,
            token: None,
            user: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// Loads the persisted session.
    pub fn restore(&mut self) -> SessionPhase {
        if self.phase == SessionPhase::Disposed {
            return self.phase;
        }

        let token = self
            .store
            .get(TOKEN_KEY)
            .filter(|t| !t.trim().is_empty());
        let user = self
            .store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<SessionUser>(&raw).ok());

        match (token, user) {
            (Some(token), Some(user)) => {
                self.token = Some(token);
                self.user = Some(user);
                self.phase = SessionPhase::Authenticated;
            }
            _ => {
                self.store.remove(TOKEN_KEY);
                self.store.remove(USER_KEY);
                self.token = None;
                self.user = None;
                self.phase = SessionPhase::Anonymous;
            }
        }
        log::info!("session restored: {:?}", self.phase);
        self.phase
    }

    pub fn login(
        &mut self,
        token: &str,
        user: SessionUser,
        redirect_to: Option<&str>,
    ) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Disposed {
            return Err(SessionError::Disposed);
        }

        let raw_user = serde_json::to_string(&user)
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        self.store
            .set(USER_KEY, &raw_user)
            .map_err(SessionError::Storage)?;
        if let Err(err) = self.store.set(TOKEN_KEY, token) {
            self.store.remove(USER_KEY);
            return Err(SessionError::Storage(err));
        }

        log::info!("session: signed in as {}", user.email);
        self.token = Some(token.to_string());
        self.user = Some(user);
        self.phase = SessionPhase::Authenticated;

        if let Some(path) = redirect_to {
            self.navigator.navigate(path);
        }
        Ok(())
    }

    /// Clears the session everywhere and goes to the sign-in page.
    ///
    /// Returns the user that was signed in, if any.
    pub fn logout(&mut self) -> Option<SessionUser> {
        if self.phase == SessionPhase::Disposed {
            return None;
        }
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        self.sign_out_locally()
    }

    fn sign_out_locally(&mut self) -> Option<SessionUser> {
        let previous = self.user.take();
        self.token = None;
        self.phase = SessionPhase::Anonymous;
        log::info!("session: signed out");
        self.navigator.navigate(AUTH_PATH);
        previous
    }

    /// Reacts to a storage change made by another tab.
    ///
    /// `key == None` means the whole storage was cleared. Returns whether
    /// the local session changed.
    pub fn on_storage_change(&mut self, key: Option<&str>, new_value: Option<&str>) -> bool {
        if self.phase == SessionPhase::Disposed {
            return false;
        }

        match key {
            None | Some(TOKEN_KEY) => match new_value.filter(|v| !v.trim().is_empty()) {
                None => {
                    if self.phase == SessionPhase::Anonymous {
                        return false;
                    }
                    self.store.remove(USER_KEY);
                    self.sign_out_locally();
                    true
                }
                Some(token) if self.token.as_deref() == Some(token) => false,
                Some(_) => {
                    let before = self.phase;
                    self.restore();
                    before != self.phase || self.is_authenticated()
                }
            },
            Some(USER_KEY) if self.is_authenticated() => {
                match new_value.and_then(|raw| serde_json::from_str::<SessionUser>(raw).ok()) {
                    Some(user) if self.user.as_ref() != Some(&user) => {
                        self.user = Some(user);
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Terminal; later calls are no-ops.
    pub fn dispose(&mut self) {
        self.phase = SessionPhase::Disposed;
        self.token = None;
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::system::auth::storage::memory::MemoryStore;
    use contracts::domain::a007_staff::aggregate::StaffRole;

    #[derive(Clone, Default)]
    struct RecordingNavigator(Rc<RefCell<Vec<String>>>);

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    impl RecordingNavigator {
        fn last(&self) -> Option<String> {
            self.0.borrow().last().cloned()
        }
    }

    fn user() -> SessionUser {
        SessionUser {
            id: "s-1".into(),
            name: "Dana Admin".into(),
            email: "dana@shop.test".into(),
            role: StaffRole::Admin,
            avatar: None,
        }
    }

    fn manager(store: &MemoryStore) -> (SessionManager<MemoryStore, RecordingNavigator>, RecordingNavigator) {
        let nav = RecordingNavigator::default();
        (SessionManager::new(store.clone(), nav.clone()), nav)
    }

    #[test]
    fn restore_without_data_is_anonymous() {
        let store = MemoryStore::default();
        let (mut session, _) = manager(&store);
        assert_eq!(session.phase(), SessionPhase::Init);
        assert_eq!(session.restore(), SessionPhase::Anonymous);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn login_then_restore_in_a_fresh_manager() {
        let store = MemoryStore::default();
        let (mut session, nav) = manager(&store);
        session.restore();
        session.login("tok-1", user(), Some("/")).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(nav.last().as_deref(), Some("/"));

        let (mut reloaded, _) = manager(&store);
        assert_eq!(reloaded.restore(), SessionPhase::Authenticated);
        assert_eq!(reloaded.token(), Some("tok-1"));
        assert_eq!(reloaded.user().map(|u| u.name.as_str()), Some("Dana Admin"));
    }

    #[test]
    fn half_written_session_is_discarded() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "tok-1").unwrap();
        store.set(USER_KEY, "{not json").unwrap();

        let (mut session, _) = manager(&store);
        assert_eq!(session.restore(), SessionPhase::Anonymous);
        assert!(!store.contains(TOKEN_KEY));
        assert!(!store.contains(USER_KEY));
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let store = MemoryStore::default();
        *store.fail_writes.borrow_mut() = true;
        let (mut session, _) = manager(&store);
        session.restore();

        let err = session.login("tok-1", user(), None).unwrap_err();
        assert!(matches!(err, SessionError::Storage(_)));
        assert!(!session.is_authenticated());
        assert!(!store.contains(USER_KEY));
    }

    #[test]
    fn logout_clears_storage_and_goes_to_auth() {
        let store = MemoryStore::default();
        let (mut session, nav) = manager(&store);
        session.login("tok-1", user(), None).unwrap();

        let previous = session.logout();
        assert_eq!(previous.map(|u| u.id), Some("s-1".to_string()));
        assert_eq!(session.phase(), SessionPhase::Anonymous);
        assert!(!store.contains(TOKEN_KEY));
        assert!(!store.contains(USER_KEY));
        assert_eq!(nav.last().as_deref(), Some(AUTH_PATH));
    }

    #[test]
    fn logout_in_another_tab_signs_this_one_out() {
        let store = MemoryStore::default();
        let (mut first, _) = manager(&store);
        let (mut second, second_nav) = manager(&store);
        first.login("tok-1", user(), None).unwrap();
        second.restore();
        assert!(second.is_authenticated());

        first.logout();
        // the browser reports the removal to the other tab
        assert!(second.on_storage_change(Some(TOKEN_KEY), None));
        assert_eq!(second.phase(), SessionPhase::Anonymous);
        assert_eq!(second_nav.last().as_deref(), Some(AUTH_PATH));

        // repeated events change nothing
        assert!(!second.on_storage_change(Some(TOKEN_KEY), None));
    }

    #[test]
    fn storage_clear_counts_as_logout() {
        let store = MemoryStore::default();
        let (mut session, _) = manager(&store);
        session.login("tok-1", user(), None).unwrap();
        assert!(session.on_storage_change(None, None));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_in_another_tab_is_adopted() {
        let store = MemoryStore::default();
        let (mut first, _) = manager(&store);
        let (mut second, _) = manager(&store);
        second.restore();

        first.login("tok-2", user(), None).unwrap();
        assert!(second.on_storage_change(Some(TOKEN_KEY), Some("tok-2")));
        assert_eq!(second.token(), Some("tok-2"));
        assert!(!second.on_storage_change(Some(TOKEN_KEY), Some("tok-2")));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let store = MemoryStore::default();
        let (mut session, _) = manager(&store);
        session.login("tok-1", user(), None).unwrap();
        assert!(!session.on_storage_change(Some("theme"), Some("dark")));
        assert!(session.is_authenticated());
    }

    #[test]
    fn disposed_session_ignores_everything() {
        let store = MemoryStore::default();
        let (mut session, nav) = manager(&store);
        session.login("tok-1", user(), None).unwrap();
        session.dispose();

        assert_eq!(session.restore(), SessionPhase::Disposed);
        assert_eq!(session.login("tok-2", user(), None), Err(SessionError::Disposed));
        assert_eq!(session.logout(), None);
        assert!(!session.on_storage_change(Some(TOKEN_KEY), None));
        assert!(nav.0.borrow().is_empty());
        // storage is left for other tabs
        assert!(store.contains(TOKEN_KEY));
    }
}
