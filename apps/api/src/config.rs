use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_host: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a single multipart request (all résumés together).
    pub max_upload_bytes: usize,
    /// Use `1 + ln(tf)` instead of raw counts when weighting terms.
    pub tfidf_sublinear_tf: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            bind_host: lookup("BIND_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a non-negative integer")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            tfidf_sublinear_tf: match lookup("TFIDF_SUBLINEAR_TF") {
                Some(raw) => parse_bool("TFIDF_SUBLINEAR_TF", &raw)?,
                None => false,
            },
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("{key} must be a boolean, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert!(!config.tfidf_sublinear_tf);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("BIND_HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
            ("MAX_UPLOAD_BYTES", "1024"),
            ("TFIDF_SUBLINEAR_TF", "yes"),
        ])
        .unwrap();
        assert_eq!(config.bind_host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.max_upload_bytes, 1024);
        assert!(config.tfidf_sublinear_tf);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_bool_is_rejected() {
        let err = config_from(&[("TFIDF_SUBLINEAR_TF", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("TFIDF_SUBLINEAR_TF"));
    }
}
