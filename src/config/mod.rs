//! Harness configuration.
//!
//! Where the suite points and how requests are dressed: base URL, default
//! headers, and the per-request timeout. Values may carry `{{name}}`
//! placeholders resolved from a caller-supplied variable map, so one
//! invocation can retarget dev/staging/prod without editing anything.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

/// The reference collaborator service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub const BASE_URL_ENV: &str = "APIPROBE_BASE_URL";
pub const TIMEOUT_ENV: &str = "APIPROBE_TIMEOUT_MS";

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub base_url: String,
    pub default_headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_headers: vec![
                ("accept".to_string(), "application/json".to_string()),
                ("content-type".to_string(), "application/json".to_string()),
            ],
            timeout: Duration::from_secs(30),
        }
    }
}

impl HarnessConfig {
    /// Defaults overlaid with `APIPROBE_BASE_URL` and `APIPROBE_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(BASE_URL_ENV) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        if let Ok(ms) = env::var(TIMEOUT_ENV) {
            if let Ok(ms) = ms.parse::<u64>() {
                config.timeout = Duration::from_millis(ms);
            }
        }
        config
    }

    /// Resolve `{{name}}` placeholders in the base URL.
    pub fn resolve(&mut self, variables: &HashMap<String, String>) {
        self.base_url = interpolate(&self.base_url, variables);
    }
}

/// Interpolate `{{key}}` placeholders in a string using the provided
/// variable map. Unknown placeholders are left untouched.
pub fn interpolate(input: &str, variables: &HashMap<String, String>) -> String {
    let mut result = input.to_string();
    for (key, value) in variables {
        result = result.replace(&format!("{{{{{key}}}}}"), value);
    }
    result
}

/// Collapse ordered key/value pairs into a variable map. Later pairs
/// override earlier ones; empty keys are skipped.
pub fn variable_map(pairs: &[(String, String)]) -> HashMap<String, String> {
    let mut variables = HashMap::new();
    for (key, value) in pairs {
        if key.is_empty() {
            continue;
        }
        variables.insert(key.clone(), value.clone());
    }
    variables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_reference_service() {
        let config = HarnessConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config
            .default_headers
            .iter()
            .any(|(k, v)| k == "accept" && v == "application/json"));
    }

    #[test]
    fn interpolate_basic() {
        let mut vars = HashMap::new();
        vars.insert("host".to_string(), "example.com".to_string());
        vars.insert("port".to_string(), "8080".to_string());

        let result = interpolate("https://{{host}}:{{port}}/api", &vars);
        assert_eq!(result, "https://example.com:8080/api");
    }

    #[test]
    fn interpolate_leaves_unknown_placeholders() {
        let vars = HashMap::new();
        assert_eq!(interpolate("https://{{host}}/api", &vars), "https://{{host}}/api");
    }

    #[test]
    fn variable_map_later_pairs_win() {
        let pairs = vec![
            ("host".to_string(), "a.example.com".to_string()),
            ("host".to_string(), "b.example.com".to_string()),
            (String::new(), "ignored".to_string()),
        ];
        let vars = variable_map(&pairs);
        assert_eq!(vars.get("host").unwrap(), "b.example.com");
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn resolve_rewrites_base_url() {
        let mut config = HarnessConfig {
            base_url: "https://{{host}}".to_string(),
            ..HarnessConfig::default()
        };
        let vars = variable_map(&[("host".to_string(), "staging.example.com".to_string())]);
        config.resolve(&vars);
        assert_eq!(config.base_url, "https://staging.example.com");
    }

    #[test]
    fn from_env_overrides_base_url() {
        env::set_var(BASE_URL_ENV, "https://env.example.com");
        env::set_var(TIMEOUT_ENV, "1500");
        let config = HarnessConfig::from_env();
        env::remove_var(BASE_URL_ENV);
        env::remove_var(TIMEOUT_ENV);

        assert_eq!(config.base_url, "https://env.example.com");
        assert_eq!(config.timeout, Duration::from_millis(1500));
    }
}
