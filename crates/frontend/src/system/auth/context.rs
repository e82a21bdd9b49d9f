use super::storage::{LocalSessionStore, SessionStore};
use crate::shared::grid::{FailureKind, GridError};
use contracts::system::auth::Session;
use leptos::prelude::*;
use std::sync::Arc;

/// Сессия приложения: хранилище и реактивное зеркало текущей сессии.
///
/// Хранилище читают и пишут только `RequireRole`, страница входа и выход
/// из системы; остальные компоненты получают сессию через `GrantedSession`.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    pub session: RwSignal<Option<Session>>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            session: RwSignal::new(None),
        }
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn sign_in(&self, session: Session) {
        log::info!("signed in as {} ({})", session.user.username, session.role());
        self.store.save(&session);
        self.session.set(Some(session));
    }

    pub fn sign_out(&self) {
        log::info!("signed out");
        self.store.clear();
        let _ = self.session.try_set(None);
    }

    /// Показывает ошибку в баннере страницы. Ошибка сессии завершает сессию,
    /// и `RequireRole` уводит на страницу входа.
    pub fn report(&self, err: GridError, banner: RwSignal<Option<String>>) {
        if err.kind() == FailureKind::Session {
            self.sign_out();
        }
        let _ = banner.try_set(Some(err.to_string()));
    }
}

/// Сессия, прошедшая проверку `RequireRole`
#[derive(Debug, Clone)]
pub struct GrantedSession(pub Session);

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::new(Arc::new(LocalSessionStore)));
    children()
}

pub fn use_session_context() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in context")
}

/// Сессия текущей страницы (только внутри `RequireRole`)
pub fn use_granted_session() -> Session {
    use_context::<GrantedSession>()
        .expect("GrantedSession not found in context")
        .0
}
