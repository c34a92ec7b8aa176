//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the backend connection and wizard timing.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {path}"))
    }
}

/// Configuration for the connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub backend: BackendConfig,
}

/// Character API connection.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    #[serde(default)]
    pub init_data: Option<String>,
    #[serde(default)]
    pub init_data_env: Option<String>, // e.g. "WIZARD_INIT_DATA"
    /// Unset means requests wait for the backend indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    /// Resolves the host identity token: literal value first, then the named env var.
    pub fn resolve_init_data(&self) -> Result<String> {
        if let Some(token) = &self.init_data {
            return Ok(token.clone());
        }
        if let Some(env_var) = &self.init_data_env {
            return std::env::var(env_var)
                .with_context(|| format!("Init data env var {env_var} not set"));
        }
        bail!("No init data provided - set init_data or init_data_env")
    }
}

/// Timing of the step 1 -> step 2 handoff.
#[derive(Debug, Deserialize, Clone)]
pub struct WizardConfig {
    #[serde(default = "default_transition_delay")]
    pub transition_delay_ms: u64,
    #[serde(default = "default_focus_delay")]
    pub focus_delay_ms: u64,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: default_transition_delay(),
            focus_delay_ms: default_focus_delay(),
        }
    }
}

impl WizardConfig {
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }
}

fn default_transition_delay() -> u64 {
    250
}
fn default_focus_delay() -> u64 {
    200
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "services:\n  backend:\n    base_url: \"http://localhost:8000\"\n    init_data: \"query_id=1\""
        )
        .unwrap();

        let config = AppConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.services.backend.base_url, "http://localhost:8000");
        assert_eq!(config.services.backend.timeout_secs, None);
        assert_eq!(config.wizard.transition_delay(), Duration::from_millis(250));
        assert_eq!(config.wizard.focus_delay(), Duration::from_millis(200));
        assert_eq!(config.services.backend.resolve_init_data().unwrap(), "query_id=1");
    }

    #[test]
    fn test_load_overrides_timing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "services:\n  backend:\n    base_url: \"http://x\"\nwizard:\n  transition_delay_ms: 0\n  focus_delay_ms: 5"
        )
        .unwrap();

        let config = AppConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.wizard.transition_delay_ms, 0);
        assert_eq!(config.wizard.focus_delay_ms, 5);
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(AppConfig::load("/nonexistent/config.yaml").is_err());
    }

    #[test]
    fn test_init_data_resolution() {
        let backend = BackendConfig {
            base_url: "http://x".to_string(),
            init_data: None,
            init_data_env: Some("CHARACTER_WIZARD_TEST_UNSET_VAR".to_string()),
            timeout_secs: None,
        };
        assert!(backend.resolve_init_data().is_err());

        let backend = BackendConfig {
            init_data_env: None,
            ..backend
        };
        assert!(backend.resolve_init_data().is_err());
    }
}
