//! # Paths
//!
//! Centralized definitions for local files and backend routes.

pub const DATA_DIR: &str = "data";
pub const CONFIG_FILE: &str = "config.yaml";
pub const LOG_FILE: &str = "session.log";

pub const INIT_ROUTE: &str = "/api/webapp/character/init";
pub const SAVE_ROUTE: &str = "/api/webapp/character/save";

/// Returns the default config path (e.g. "data/config.yaml")
pub fn config_path() -> String {
    format!("{}/{}", DATA_DIR, CONFIG_FILE)
}

/// Joins a backend base URL and a route, tolerating a trailing slash on the base
pub fn endpoint(base_url: &str, route: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        assert_eq!(
            endpoint("https://bot.example/", INIT_ROUTE),
            "https://bot.example/api/webapp/character/init"
        );
        assert_eq!(
            endpoint("http://localhost:8080", SAVE_ROUTE),
            "http://localhost:8080/api/webapp/character/save"
        );
    }
}
