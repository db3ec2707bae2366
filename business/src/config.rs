use campusdesk_states::State;
use log::warn;
use serde::Deserialize;
use ustr::Ustr;

/// Environment variable overrides, read with the `CAMPUSDESK` prefix
/// (e.g. `CAMPUSDESK_API_BASE_URL`).
#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    api_base_url: Option<String>,
}

/// Backend connection configuration.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Base of every REST path, e.g. `https://host/api`.
    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url.trim_end_matches('/')))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        let overrides: EnvOverrides = match serde_env::from_env_with_prefix("CAMPUSDESK") {
            Ok(overrides) => overrides,
            Err(err) => {
                warn!("ignoring malformed CAMPUSDESK_* environment: {err}");
                EnvOverrides::default()
            }
        };

        let api_base_url = overrides.api_base_url.unwrap_or_else(|| {
            if cfg!(feature = "env_test") {
                "https://campusdesk-test.example.edu".to_owned()
            } else {
                "https://campusdesk.example.edu".to_owned()
            }
        });

        Self { api_base_url }
    }
}

impl State for BusinessConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_appends_api_segment() {
        let config = BusinessConfig::new("https://host.example.edu");
        assert_eq!(config.api_url(), Ustr::from("https://host.example.edu/api"));
    }

    #[test]
    fn test_api_url_trims_trailing_slash() {
        let config = BusinessConfig::new("https://host.example.edu/");
        assert_eq!(config.api_url(), Ustr::from("https://host.example.edu/api"));
    }

    #[test]
    fn test_empty_base_url_is_relative() {
        let config = BusinessConfig::new("");
        assert_eq!(config.api_url(), Ustr::from("/api"));
    }
}
