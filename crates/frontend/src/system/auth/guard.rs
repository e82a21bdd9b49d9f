use super::context::{use_session_context, GrantedSession};
use super::storage::SessionStore;
use crate::shared::config::{AppConfig, RoutesConfig};
use contracts::system::auth::{Role, Session};
use leptos::prelude::*;
use leptos_router::components::Redirect;

#[derive(Debug, Clone, PartialEq)]
pub enum GuardState {
    /// Сессия ещё не проверялась
    Unknown,
    Unauthenticated,
    AuthenticatedAllowed(Session),
    AuthenticatedDenied(Session),
}

/// Проверка доступа к одной странице.
///
/// Сохранённая сессия читается один раз, при первом `resolve`; переходы
/// синхронные, без ожидания сети.
#[derive(Debug, Clone)]
pub struct SessionGuard {
    required_role: Option<Role>,
    requested_path: String,
    state: GuardState,
}

impl SessionGuard {
    pub fn new(required_role: Option<Role>, requested_path: impl Into<String>) -> Self {
        Self {
            required_role,
            requested_path: requested_path.into(),
            state: GuardState::Unknown,
        }
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    pub fn resolve(&mut self, store: &dyn SessionStore) -> &GuardState {
        if self.state != GuardState::Unknown {
            return &self.state;
        }
        self.state = match store.load() {
            Ok(None) => GuardState::Unauthenticated,
            Ok(Some(session)) => {
                let allowed = self
                    .required_role
                    .as_ref()
                    .map_or(true, |role| session.role() == role);
                if allowed {
                    GuardState::AuthenticatedAllowed(session)
                } else {
                    GuardState::AuthenticatedDenied(session)
                }
            }
            Err(e) => {
                log::warn!("clearing stored session: {}", e);
                store.clear();
                GuardState::Unauthenticated
            }
        };
        log::debug!("guard for {}: {:?}", self.requested_path, self.state);
        &self.state
    }

    /// Куда перенаправить пользователя; `None`: показывать страницу
    /// (или ещё рано решать). Отказ по роли никогда не ведёт обратно на
    /// запрошенную страницу.
    pub fn redirect(&self, routes: &RoutesConfig) -> Option<String> {
        match &self.state {
            GuardState::Unknown | GuardState::AuthenticatedAllowed(_) => None,
            GuardState::Unauthenticated => Some(routes.login.clone()),
            GuardState::AuthenticatedDenied(session) => {
                let landing = routes.landing_for(session.role());
                if landing == self.requested_path {
                    Some(routes.fallback.clone())
                } else {
                    Some(landing.to_string())
                }
            }
        }
    }

    /// Новое значение реактивного зеркала сессии; `None`: зеркало не меняется.
    /// При отказе по роли сохранённая сессия остаётся действительной.
    pub fn mirror(&self) -> Option<Option<Session>> {
        match &self.state {
            GuardState::AuthenticatedAllowed(session) => Some(Some(session.clone())),
            GuardState::Unauthenticated => Some(None),
            GuardState::Unknown | GuardState::AuthenticatedDenied(_) => None,
        }
    }

    pub fn granted(&self) -> Option<&Session> {
        match &self.state {
            GuardState::AuthenticatedAllowed(session) => Some(session),
            _ => None,
        }
    }

    pub fn logout(&mut self, store: &dyn SessionStore) {
        store.clear();
        self.state = GuardState::Unauthenticated;
    }
}

/// Страница, доступная только с сессией нужной роли.
///
/// Без сессии уводит на страницу входа, с чужой ролью на стартовую страницу
/// роли. Дочерние компоненты получают `GrantedSession` через контекст и
/// сразу уходят на вход, если сессия завершилась.
#[component]
pub fn RequireRole(
    /// Требуемая роль (`None`: достаточно любой сессии)
    #[prop(optional, into)]
    role: Option<Role>,
    /// Путь защищаемой страницы
    #[prop(into)]
    path: String,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = use_session_context();
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");

    let mut guard = SessionGuard::new(role, path);
    guard.resolve(ctx.store());
    if let Some(mirror) = guard.mirror() {
        ctx.session.set(mirror);
    }

    if let Some(target) = guard.redirect(&config.routes) {
        return view! { <Redirect path=target /> }.into_any();
    }
    let Some(session) = guard.granted().cloned() else {
        return ().into_any();
    };

    provide_context(GrantedSession(session));
    let login = config.routes.login.clone();
    let mirror = ctx.session;
    view! {
        <Show
            when=move || mirror.with(Option::is_some)
            fallback=move || view! { <Redirect path=login.clone() /> }
        >
            {children()}
        </Show>
    }
    .into_any()
}

/// Корневой маршрут: администратор попадает на стартовую страницу роли,
/// остальные на вход.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let ctx = use_session_context();
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");

    let mut guard = SessionGuard::new(None, "/");
    guard.resolve(ctx.store());
    let target = home_target(&guard, &config.routes);
    view! { <Redirect path=target /> }
}

fn home_target(guard: &SessionGuard, routes: &RoutesConfig) -> String {
    guard
        .granted()
        .and_then(|session| routes.landing_route(session.role()))
        .unwrap_or(routes.login.as_str())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::{MemorySessionStore, TOKEN_KEY, USER_KEY};
    use contracts::system::auth::SessionUser;

    fn session(role: Role) -> Session {
        Session {
            user: SessionUser {
                name: "Ana".into(),
                username: "ana".into(),
                role,
            },
            token: "t-1".into(),
        }
    }

    fn store_with(role: Role) -> MemorySessionStore {
        let store = MemorySessionStore::new();
        store.save(&session(role));
        store
    }

    #[test]
    fn test_starts_unknown_without_redirect() {
        let guard = SessionGuard::new(Some(Role::Admin), "/categories");
        assert_eq!(guard.state(), &GuardState::Unknown);
        assert_eq!(guard.redirect(&RoutesConfig::default()), None);
        assert!(guard.granted().is_none());
    }

    #[test]
    fn test_no_session_goes_to_login() {
        let mut guard = SessionGuard::new(Some(Role::Admin), "/categories");
        guard.resolve(&MemorySessionStore::new());
        assert_eq!(guard.state(), &GuardState::Unauthenticated);
        assert_eq!(guard.redirect(&RoutesConfig::default()).as_deref(), Some("/login"));
    }

    #[test]
    fn test_matching_role_is_allowed() {
        let mut guard = SessionGuard::new(Some(Role::Admin), "/categories");
        guard.resolve(&store_with(Role::Admin));
        assert_eq!(guard.granted(), Some(&session(Role::Admin)));
        assert_eq!(guard.redirect(&RoutesConfig::default()), None);

        let mut any = SessionGuard::new(None, "/");
        any.resolve(&store_with(Role::Client));
        assert!(any.granted().is_some());
    }

    #[test]
    fn test_denied_role_never_returns_to_requested_page() {
        let routes = RoutesConfig::default();
        let mut guard = SessionGuard::new(Some(Role::Admin), "/dashboard");
        guard.resolve(&store_with(Role::Client));
        assert_eq!(guard.state(), &GuardState::AuthenticatedDenied(session(Role::Client)));
        let target = guard.redirect(&routes).unwrap();
        assert_ne!(target, "/dashboard");
        assert_eq!(target, "/forbidden");
        assert!(guard.granted().is_none());
    }

    #[test]
    fn test_admin_denied_on_client_page_lands_on_dashboard() {
        let mut guard = SessionGuard::new(Some(Role::Client), "/shop");
        guard.resolve(&store_with(Role::Admin));
        assert_eq!(guard.redirect(&RoutesConfig::default()).as_deref(), Some("/dashboard"));

        let mut guard = SessionGuard::new(Some(Role::Client), "/dashboard");
        guard.resolve(&store_with(Role::Admin));
        assert_eq!(guard.redirect(&RoutesConfig::default()).as_deref(), Some("/forbidden"));
    }

    #[test]
    fn test_denied_role_keeps_session_mirror() {
        let store = store_with(Role::Client);
        let mut denied = SessionGuard::new(Some(Role::Admin), "/orders");
        assert_eq!(denied.mirror(), None);
        denied.resolve(&store);
        assert_eq!(denied.mirror(), None);
        assert_eq!(store.load(), Ok(Some(session(Role::Client))));

        let mut allowed = SessionGuard::new(Some(Role::Client), "/shop");
        allowed.resolve(&store);
        assert_eq!(allowed.mirror(), Some(Some(session(Role::Client))));

        let mut nobody = SessionGuard::new(Some(Role::Admin), "/orders");
        nobody.resolve(&MemorySessionStore::new());
        assert_eq!(nobody.mirror(), Some(None));
    }

    #[test]
    fn test_corrupt_session_is_cleared() {
        let store = MemorySessionStore::with_raw(Some("t-1"), Some("{broken"));
        let mut guard = SessionGuard::new(Some(Role::Admin), "/orders");
        guard.resolve(&store);
        assert_eq!(guard.state(), &GuardState::Unauthenticated);
        assert_eq!(store.raw(TOKEN_KEY), None);
        assert_eq!(store.raw(USER_KEY), None);
    }

    #[test]
    fn test_resolve_reads_store_once() {
        let store = store_with(Role::Admin);
        let mut guard = SessionGuard::new(Some(Role::Admin), "/orders");
        guard.resolve(&store);
        store.clear();
        guard.resolve(&store);
        assert!(guard.granted().is_some());
    }

    #[test]
    fn test_logout_clears_store() {
        let store = store_with(Role::Admin);
        let mut guard = SessionGuard::new(Some(Role::Admin), "/orders");
        guard.resolve(&store);
        guard.logout(&store);
        assert_eq!(guard.state(), &GuardState::Unauthenticated);
        assert_eq!(store.load(), Ok(None));
        assert_eq!(guard.redirect(&RoutesConfig::default()).as_deref(), Some("/login"));
    }

    #[test]
    fn test_home_target() {
        let routes = RoutesConfig::default();
        let mut admin = SessionGuard::new(None, "/");
        admin.resolve(&store_with(Role::Admin));
        assert_eq!(home_target(&admin, &routes), "/dashboard");

        let mut client = SessionGuard::new(None, "/");
        client.resolve(&store_with(Role::Client));
        assert_eq!(home_target(&client, &routes), "/login");

        let mut nobody = SessionGuard::new(None, "/");
        nobody.resolve(&MemorySessionStore::new());
        assert_eq!(home_target(&nobody, &routes), "/login");
    }
}
