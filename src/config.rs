use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://restcountries.com";
pub const DEFAULT_SAMPLE_SIZE: usize = 8;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const API_BASE_VAR: &str = "FLAGDECK_API_BASE";
const SAMPLE_SIZE_VAR: &str = "FLAGDECK_SAMPLE_SIZE";
const TIMEOUT_VAR: &str = "FLAGDECK_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub sample_size: usize,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source; invalid values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = lookup(API_BASE_VAR) {
            let base = base.trim().trim_end_matches('/');
            if base.is_empty() {
                log::warn!("{API_BASE_VAR} is empty, using {DEFAULT_API_BASE}");
            } else {
                config.api_base = base.to_string();
            }
        }

        if let Some(raw) = lookup(SAMPLE_SIZE_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.sample_size = size,
                _ => log::warn!(
                    "Ignoring invalid {SAMPLE_SIZE_VAR}={raw:?}, using {DEFAULT_SAMPLE_SIZE}"
                ),
            }
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => log::warn!(
                    "Ignoring invalid {TIMEOUT_VAR}={raw:?}, using {DEFAULT_TIMEOUT_SECS}s"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            (API_BASE_VAR, "http://localhost:8080/"),
            (SAMPLE_SIZE_VAR, "12"),
            (TIMEOUT_VAR, "3"),
        ]);
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.sample_size, 12);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            (API_BASE_VAR, "  "),
            (SAMPLE_SIZE_VAR, "0"),
            (TIMEOUT_VAR, "soon"),
        ]);
        assert_eq!(config, AppConfig::default());
    }
}
