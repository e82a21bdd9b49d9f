use contracts::system::auth::Role;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Ключ localStorage с TOML-документом, переопределяющим настройки по умолчанию
pub const CONFIG_STORAGE_KEY: &str = "admin_config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub grid: GridConfig,
    pub routes: RoutesConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RoutesConfig {
    pub login: String,
    /// Куда отправлять пользователя без подходящей роли
    pub fallback: String,
    /// Стартовая страница по коду роли
    pub landing: BTreeMap<String, String>,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8081/api/v1"

[grid]
page_size = 5
page_size_options = [5, 10, 20, 50]

[routes]
login = "/login"
fallback = "/forbidden"

[routes.landing]
ROLE_ADMIN = "/dashboard"
"#;

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081/api/v1".to_string(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            page_size_options: vec![5, 10, 20, 50],
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            fallback: "/forbidden".to_string(),
            landing: BTreeMap::from([("ROLE_ADMIN".to_string(), "/dashboard".to_string())]),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            grid: GridConfig::default(),
            routes: RoutesConfig::default(),
        }
    }
}

impl RoutesConfig {
    /// Стартовая страница роли; без настройки для роли возвращается `fallback`
    pub fn landing_for(&self, role: &Role) -> &str {
        self.landing_route(role).unwrap_or(self.fallback.as_str())
    }

    pub fn landing_route(&self, role: &Role) -> Option<&str> {
        self.landing.get(role.code()).map(String::as_str)
    }
}

impl GridConfig {
    /// Варианты размера страницы; текущий размер всегда среди них
    pub fn page_size_choices(&self) -> Vec<usize> {
        let mut options: Vec<usize> = self
            .page_size_options
            .iter()
            .copied()
            .filter(|size| *size > 0)
            .collect();
        if !options.contains(&self.page_size) && self.page_size > 0 {
            options.push(self.page_size);
        }
        options.sort_unstable();
        options.dedup();
        options
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage["admin_config"]` (TOML, any subset of sections)
/// 2. Falls back to embedded default config
pub fn load_config() -> AppConfig {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    if let Some(contents) = stored {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loading config from localStorage[{}]", CONFIG_STORAGE_KEY);
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid stored config: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.grid.page_size, 5);
        assert_eq!(config.routes.landing_for(&Role::Admin), "/dashboard");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config(
            r#"
[api]
base_url = "https://store.example/api/v1"

[grid]
page_size = 7
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://store.example/api/v1");
        assert_eq!(config.grid.page_size_choices(), vec![5, 7, 10, 20, 50]);
        assert_eq!(config.routes.login, "/login");
    }

    #[test]
    fn test_unknown_role_lands_on_fallback() {
        let routes = RoutesConfig::default();
        assert_eq!(routes.landing_for(&Role::Client), "/forbidden");
        assert_eq!(routes.landing_for(&Role::Other("ROLE_X".into())), "/forbidden");
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[grid]\npage_size = \"many\"").is_err());
    }
}
