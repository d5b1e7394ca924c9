//! Service configuration loaded from the environment

use std::fmt;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Runtime settings for the synthesis server
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Interface to bind the HTTP server to
    pub host: String,

    /// Port to bind the HTTP server to
    pub port: u16,

    /// Generative model identifier sent with every synthesis request
    pub model: String,

    /// Credential for the generative model; `None` disables the client
    pub api_key: Option<String>,

    /// Upper bound on a single model call before falling back
    pub ai_timeout: Duration,

    /// Root of the Gemini REST API
    pub gemini_base_url: String,
}

impl ServiceConfig {
    pub const ENV_HOST: &'static str = "GUESTSENSE_HOST";
    pub const ENV_PORT: &'static str = "GUESTSENSE_PORT";
    pub const ENV_MODEL: &'static str = "GUESTSENSE_MODEL";
    pub const ENV_AI_TIMEOUT_SECS: &'static str = "GUESTSENSE_AI_TIMEOUT_SECS";
    pub const ENV_GEMINI_BASE_URL: &'static str = "GUESTSENSE_GEMINI_BASE_URL";
    pub const ENV_API_KEY: &'static str = "GEMINI_API_KEY";
    pub const ENV_API_KEY_ALT: &'static str = "GOOGLE_API_KEY";

    pub fn new() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            ai_timeout: Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    /// Load from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::new();

        Self {
            host: get(Self::ENV_HOST).unwrap_or(defaults.host),
            port: parse_or(Self::ENV_PORT, get(Self::ENV_PORT), defaults.port),
            model: get(Self::ENV_MODEL).unwrap_or(defaults.model),
            api_key: get(Self::ENV_API_KEY).or_else(|| get(Self::ENV_API_KEY_ALT)),
            ai_timeout: Duration::from_secs(positive_or(
                Self::ENV_AI_TIMEOUT_SECS,
                parse_or(
                    Self::ENV_AI_TIMEOUT_SECS,
                    get(Self::ENV_AI_TIMEOUT_SECS),
                    DEFAULT_AI_TIMEOUT_SECS,
                ),
                DEFAULT_AI_TIMEOUT_SECS,
            )),
            gemini_base_url: get(Self::ENV_GEMINI_BASE_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_base_url),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy + fmt::Display,
{
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(%key, %value, %default, "ignoring unparseable setting");
            default
        }),
        None => default,
    }
}

/// A zero timeout would fail every model call, so it counts as unset
fn positive_or(key: &str, value: u64, default: u64) -> u64 {
    if value == 0 {
        tracing::warn!(%key, %default, "timeout must be at least one second");
        return default;
    }
    value
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("ai_timeout", &self.ai_timeout)
            .field("gemini_base_url", &self.gemini_base_url)
            .finish()
    }
}
