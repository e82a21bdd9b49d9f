//! Хранение сессии между перезагрузками страницы.
//!
//! Формат совпадает с тем, что пишет страница входа: `token` содержит bearer-токен,
//! `user` содержит JSON `{name, username, role}`.

use crate::shared::grid::GridError;
use contracts::system::auth::{Session, SessionUser};
use std::collections::BTreeMap;
use std::sync::Mutex;
use web_sys::window;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

pub trait SessionStore: Send + Sync {
    /// `Ok(None)`: сессии нет; `Err`: сохранённое состояние повреждено
    fn load(&self) -> Result<Option<Session>, GridError>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Разбор пары значений из хранилища. Любое "половинчатое" состояние
/// (токен без пользователя и наоборот) считается повреждённым.
pub fn decode_session(token: Option<String>, user: Option<String>) -> Result<Option<Session>, GridError> {
    match (token, user) {
        (None, None) => Ok(None),
        (Some(token), Some(user)) if !token.trim().is_empty() => {
            let user: SessionUser = serde_json::from_str(&user)
                .map_err(|e| GridError::Session(format!("stored user is unreadable: {}", e)))?;
            Ok(Some(Session { user, token }))
        }
        _ => Err(GridError::Session("stored session is incomplete".to_string())),
    }
}

fn encode_user(session: &Session) -> String {
    serde_json::to_string(&session.user).unwrap_or_default()
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Сессия в `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Result<Option<Session>, GridError> {
        let Some(storage) = get_local_storage() else {
            return Ok(None);
        };
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user = storage.get_item(USER_KEY).ok().flatten();
        decode_session(token, user)
    }

    fn save(&self, session: &Session) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &session.token);
            let _ = storage.set_item(USER_KEY, &encode_user(session));
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

/// Сессия в памяти (тесты и окружения без localStorage)
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище с произвольным сырым содержимым
    pub fn with_raw(token: Option<&str>, user: Option<&str>) -> Self {
        let store = Self::new();
        if let Ok(mut items) = store.items.lock() {
            if let Some(token) = token {
                items.insert(TOKEN_KEY.to_string(), token.to_string());
            }
            if let Some(user) = user {
                items.insert(USER_KEY.to_string(), user.to_string());
            }
        }
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, GridError> {
        decode_session(self.raw(TOKEN_KEY), self.raw(USER_KEY))
    }

    fn save(&self, session: &Session) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(TOKEN_KEY.to_string(), session.token.clone());
            items.insert(USER_KEY.to_string(), encode_user(session));
        }
    }

    fn clear(&self) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(TOKEN_KEY);
            items.remove(USER_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    fn admin() -> Session {
        Session {
            user: SessionUser {
                name: "Ana".into(),
                username: "ana".into(),
                role: Role::Admin,
            },
            token: "t-1".into(),
        }
    }

    #[test]
    fn test_save_load_clear() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load(), Ok(None));
        store.save(&admin());
        assert_eq!(store.load(), Ok(Some(admin())));
        assert_eq!(
            store.raw(USER_KEY).as_deref(),
            Some(r#"{"name":"Ana","username":"ana","role":"ROLE_ADMIN"}"#)
        );
        store.clear();
        assert_eq!(store.load(), Ok(None));
    }

    #[test]
    fn test_corrupt_states() {
        assert!(decode_session(Some("t".into()), None).is_err());
        assert!(decode_session(None, Some("{}".into())).is_err());
        assert!(decode_session(Some("t".into()), Some("not json".into())).is_err());
        assert!(decode_session(Some(" ".into()), Some("{}".into())).is_err());
    }
}
