//! Data models and structures
//!
//! Defines the `/chat` wire contract and the environment-driven runtime
//! configuration.

use serde::{Deserialize, Serialize};

/// Response language, which also selects the instruction block.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Malayalam,
    #[default]
    English,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub language: Language,
    /// Data-URL encoded image, `data:<mime>;base64,<payload>`.
    #[serde(default)]
    pub image_data: Option<String>,
}

impl ChatRequest {
    /// Non-empty question text, verbatim.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    pub fn image_data(&self) -> Option<&str> {
        self.image_data.as_deref().filter(|d| !d.is_empty())
    }

    /// True when the caller supplied either question text or an image.
    pub fn has_input(&self) -> bool {
        self.message().is_some() || self.image_data().is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    pub language: Language,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Missing or empty means every chat request is answered with a
    /// configuration error.
    pub gemini_api_key: Option<String>,
    pub bind_address: String,
    pub log_level: String,
    /// Comma-separated CORS allow-list; wildcard when unset.
    pub cors_allowed_origins: Option<String>,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            bind_address: "0.0.0.0:3000".to_string(),
            log_level: "krishi_sahayi=info,tower_http=info".to_string(),
            cors_allowed_origins: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            gemini_api_key: non_empty_env("GEMINI_API_KEY"),
            bind_address: non_empty_env("KRISHI_BIND").unwrap_or(defaults.bind_address),
            log_level: non_empty_env("KRISHI_LOG").unwrap_or(defaults.log_level),
            cors_allowed_origins: non_empty_env("KRISHI_CORS_ORIGINS"),
            max_body_bytes: parse_env("KRISHI_MAX_BODY_BYTES", defaults.max_body_bytes),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    non_empty_env(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_language_serialization() {
        assert_eq!(
            serde_json::to_string(&Language::Malayalam).unwrap(),
            "\"malayalam\""
        );
        let parsed: Language = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(parsed, Language::English);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(serde_json::from_str::<Language>("\"tamil\"").is_err());
    }

    #[test]
    fn test_chat_request_uses_camel_case_image_field() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"message":"hi","language":"malayalam","imageData":"data:image/png;base64,AAAA"}"#,
        )
        .unwrap();

        assert_eq!(req.message(), Some("hi"));
        assert_eq!(req.language, Language::Malayalam);
        assert_eq!(req.image_data(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_chat_request_language_defaults_to_english() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(req.language, Language::English);
    }

    #[test]
    fn test_has_input_treats_empty_strings_as_missing() {
        let req = ChatRequest {
            message: Some(String::new()),
            language: Language::English,
            image_data: Some(String::new()),
        };
        assert!(!req.has_input());
        assert!(!ChatRequest::default().has_input());
    }

    #[test]
    fn test_has_input_keeps_whitespace_verbatim() {
        let req = ChatRequest {
            message: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(req.has_input());
        assert_eq!(req.message(), Some("  "));
    }

    #[test]
    fn test_error_response_omits_missing_details() {
        let body = ErrorResponse {
            error: "Message or image is required".to_string(),
            details: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "error": "Message or image is required" })
        );
    }

    #[test]
    fn test_non_empty_env_trims_and_rejects_blank() {
        const KEY: &str = "KRISHI_TEST_NON_EMPTY_ENV";

        std::env::remove_var(KEY);
        assert_eq!(non_empty_env(KEY), None);

        std::env::set_var(KEY, "");
        assert_eq!(non_empty_env(KEY), None);

        std::env::set_var(KEY, "  ");
        assert_eq!(non_empty_env(KEY), None);

        std::env::set_var(KEY, " k ");
        assert_eq!(non_empty_env(KEY), Some("k".to_string()));

        std::env::remove_var(KEY);
    }

    #[test]
    fn test_parse_env_falls_back_on_bad_values() {
        const KEY: &str = "KRISHI_TEST_PARSE_ENV_BODY_BYTES";

        std::env::remove_var(KEY);
        assert_eq!(parse_env(KEY, 1024usize), 1024);

        std::env::set_var(KEY, "ten megabytes");
        assert_eq!(parse_env(KEY, 1024usize), 1024);

        std::env::set_var(KEY, "-5");
        assert_eq!(parse_env(KEY, 1024usize), 1024);

        std::env::set_var(KEY, " 2048 ");
        assert_eq!(parse_env(KEY, 1024usize), 2048);

        std::env::remove_var(KEY);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.max_body_bytes, 10 * 1024 * 1024);
    }
}
