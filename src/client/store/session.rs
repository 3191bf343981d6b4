use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    api::ApiClient,
    config::Config,
    session::{DefaultSessionStore, Session, SessionStore},
};

/// The signed-in user, shared through context by [`App`](crate::client::App).
#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
    store: CopyValue<DefaultSessionStore>,
}

impl AuthState {
    /// Restores the persisted session, if any
    pub fn restore() -> Self {
        Self::restore_from(DefaultSessionStore::default())
    }

    /// Restores from `store` and keeps it for later sign-ins and sign-outs
    pub fn restore_from(store: DefaultSessionStore) -> Self {
        let session = store.load();
        match &session {
            Some(s) => tracing::debug!("Restored session for {}", s.user.user_name),
            None => tracing::debug!("No stored session"),
        }
        Self {
            session: Signal::new(session),
            store: CopyValue::new(store),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn sign_in(mut self, session: Session) {
        self.store.read().save(&session);
        self.session.set(Some(session));
    }

    pub fn sign_out(mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!("Signed out {}", session.user.user_name);
        }
        self.store.read().clear();
    }
}

/// An [`ApiClient`] for the configured backend, authenticated as the current session.
///
/// Build it inside the event handler or resource that uses it so it picks up the latest session.
pub fn use_api() -> impl Fn() -> ApiClient + Copy {
    let config = use_context::<Signal<Config>>();
    let auth = use_context::<AuthState>();
    move || ApiClient::new(&config.read(), auth.session.read().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySessionStore, SessionUser};

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            user: SessionUser {
                id: "u1".to_string(),
                user_name: "amir".to_string(),
                email: "amir@urban.pk".to_string(),
            },
        }
    }

    #[component]
    fn SignsIn() -> Element {
        let store = use_context::<MemorySessionStore>();
        use_hook(move || AuthState::restore_from(store).sign_in(session()));
        rsx!()
    }

    #[component]
    fn SignsOut() -> Element {
        let store = use_context::<MemorySessionStore>();
        use_hook(move || {
            let auth = AuthState::restore_from(store);
            assert!(auth.is_signed_in());
            auth.sign_out();
            assert!(!auth.is_signed_in());
        });
        rsx!()
    }

    #[test]
    fn sign_in_persists_to_the_held_store() {
        let store = MemorySessionStore::default();
        VirtualDom::new(SignsIn)
            .with_root_context(store.clone())
            .rebuild_in_place();

        assert_eq!(store.load(), Some(session()));
    }

    #[test]
    fn sign_out_clears_the_restored_store() {
        let store = MemorySessionStore::default();
        store.save(&session());
        VirtualDom::new(SignsOut)
            .with_root_context(store.clone())
            .rebuild_in_place();

        assert_eq!(store.load(), None);
    }
}
