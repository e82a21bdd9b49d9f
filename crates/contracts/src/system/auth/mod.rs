use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Ответ внешнего сервиса авторизации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub name: String,
    pub username: String,
    pub role: Role,
}

/// Роль пользователя в том виде, в каком её выдаёт сервис авторизации
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Client,
    Other(String),
}

impl Role {
    pub fn code(&self) -> &str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Client => "ROLE_CLIENT",
            Role::Other(code) => code,
        }
    }
}

impl From<String> for Role {
    fn from(code: String) -> Self {
        match code.as_str() {
            "ROLE_ADMIN" => Role::Admin,
            "ROLE_CLIENT" => Role::Client,
            _ => Role::Other(code),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.code().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Данные пользователя, которые хранятся рядом с токеном (`localStorage["user"]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub username: String,
    pub role: Role,
}

/// Активная сессия: пользователь + bearer-токен
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: SessionUser,
    pub token: String,
}

impl Session {
    pub fn role(&self) -> &Role {
        &self.user.role
    }
}

impl From<LoginResponse> for Session {
    fn from(r: LoginResponse) -> Self {
        Self {
            user: SessionUser {
                name: r.name,
                username: r.username,
                role: r.role,
            },
            token: r.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_into_session() {
        let json = r#"{"token":"abc","name":"Ana","username":"ana","role":"ROLE_ADMIN"}"#;
        let r: LoginResponse = serde_json::from_str(json).unwrap();
        let s = Session::from(r);
        assert_eq!(s.token, "abc");
        assert_eq!(s.role(), &Role::Admin);
    }

    #[test]
    fn test_unknown_role_round_trips_code() {
        let user: SessionUser =
            serde_json::from_str(r#"{"name":"B","username":"b","role":"ROLE_SUPPORT"}"#).unwrap();
        assert_eq!(user.role, Role::Other("ROLE_SUPPORT".into()));
        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["role"], "ROLE_SUPPORT");
    }
}
