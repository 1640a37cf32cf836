use crate::error::{Error, Result};
use crate::models::process::ProcessContract;
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_FEEDBACK_PATH: &str = "/feedback/rejection-email";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{}`", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub api_base_url: String,
    pub feedback_path: String,
    pub process_contract: ProcessContract,
    pub tunnel_headers: bool,
    pub tunnel_user_agent: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            feedback_path: DEFAULT_FEEDBACK_PATH.to_string(),
            process_contract: ProcessContract::Current,
            tunnel_headers: false,
            tunnel_user_agent: default_user_agent(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();
        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", defaults.server_address),
            api_base_url: get_env_or("API_BASE_URL", defaults.api_base_url),
            feedback_path: get_env_or("FEEDBACK_PATH", defaults.feedback_path),
            process_contract: get_env_parse_or("PROCESS_CONTRACT", defaults.process_contract)?,
            tunnel_headers: get_env_parse_or("TUNNEL_HEADERS", defaults.tunnel_headers)?,
            tunnel_user_agent: get_env_or("TUNNEL_USER_AGENT", defaults.tunnel_user_agent),
            log_format: get_env_parse_or("LOG_FORMAT", defaults.log_format)?,
        })
    }

    /// Same configuration pointed at another backend. Used by tests and tooling.
    pub fn for_backend(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }
}

fn default_user_agent() -> String {
    format!("hrtist-admin/{}", env!("CARGO_PKG_VERSION"))
}

fn get_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn get_env_or(name: &str, default: String) -> String {
    get_env(name).unwrap_or(default)
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_env(name) {
        Some(raw) => parse_value(name, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.feedback_path, "/feedback/rejection-email");
        assert_eq!(config.process_contract, ProcessContract::Current);
        assert!(!config.tunnel_headers);
        assert!(config.tunnel_user_agent.starts_with("hrtist-admin/"));
    }

    #[test]
    fn parse_value_reports_variable_name() {
        let err = parse_value::<bool>("TUNNEL_HEADERS", "maybe").unwrap_err();
        match err {
            Error::Config(msg) => assert!(msg.contains("TUNNEL_HEADERS")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!(parse_value::<LogFormat>("LOG_FORMAT", "JSON").unwrap(), LogFormat::Json);
        assert_eq!(parse_value::<LogFormat>("LOG_FORMAT", "text").unwrap(), LogFormat::Text);
        assert!(parse_value::<LogFormat>("LOG_FORMAT", "xml").is_err());
    }

    #[test]
    fn for_backend_overrides_only_the_url() {
        let config = Config::for_backend("https://example.ngrok.app");
        assert_eq!(config.api_base_url, "https://example.ngrok.app");
        assert_eq!(config.server_address, DEFAULT_SERVER_ADDRESS);
    }
}
