//! Runtime configuration resolved from the process environment.
//!
//! `main` loads `.env` first, so every variable below may also live there.

use std::env;

use url::Url;

use crate::error::AppError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base_url: Url,
}

impl Config {
    /// Read the configuration from environment variables.
    ///
    /// A missing credential is fatal: the guide refuses to start without one.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .ok_or_else(|| AppError::Config("GEMINI_API_KEY environment variable not set".into()))?;

        let model = lookup("GEMINI_MODEL")
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let raw_base = lookup("GEMINI_API_BASE_URL")
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            api_base_url: parse_base_url(&raw_base)?,
        })
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        self
    }
}

/// `Url::join` drops the last path segment unless the base ends in `/`.
fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized)
        .map_err(|e| AppError::Config(format!("invalid GEMINI_API_BASE_URL '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("GEMINI_API_KEY")));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn falls_back_to_api_key_variable() {
        let config = Config::from_lookup(lookup_from(&[("API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base_url.as_str(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_API_BASE_URL", "http://localhost:8080/v1beta"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8080/v1beta/");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_API_BASE_URL", "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("GEMINI_API_BASE_URL")));
    }

    #[test]
    fn model_override_ignores_blank() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "k")])).unwrap();
        let config = config.with_model(Some(" ".into()));
        assert_eq!(config.model, DEFAULT_MODEL);
        let config = config.with_model(Some("gemini-2.5-pro".into()));
        assert_eq!(config.model, "gemini-2.5-pro");
    }
}
