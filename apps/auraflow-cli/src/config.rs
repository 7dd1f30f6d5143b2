//! Layered CLI configuration
//!
//! Sources, later ones winning: built-in defaults, the YAML file given with
//! `--config`, `AURAFLOW__*` environment variables (nested keys split on
//! `__`, e.g. `AURAFLOW__API__BASE_URL`), then command-line flags.

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use secrecy::SecretString;
use serde::{Deserialize, Serialize, Serializer};
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "AURAFLOW__";

const REDACTED: &str = "***REDACTED***";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    pub user_agent: String,
    pub max_body_size: usize,
    /// Accept `http://` base URLs; the default backend is plain HTTP on localhost
    pub allow_insecure_http: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_owned(),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("auraflow-cli/", env!("CARGO_PKG_VERSION")).to_owned(),
            max_body_size: 10 * 1024 * 1024,
            allow_insecure_http: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub cookie_name: String,
    #[serde(
        serialize_with = "redact",
        skip_serializing_if = "Option::is_none"
    )]
    pub cookie_value: Option<SecretString>,
    /// Absolute URL, or a path under `api.base_url`
    pub login_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "AURAFLOW_SESSION".to_owned(),
            cookie_value: None,
            login_url: "/login".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `auraflow_http=debug,info`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Values taken from command-line flags, applied last
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub session_cookie: Option<String>,
    pub verbose: u8,
}

#[allow(clippy::ref_option)]
fn redact<S: Serializer>(value: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(_) => serializer.serialize_str(REDACTED),
        None => serializer.serialize_none(),
    }
}

impl AppConfig {
    /// Defaults, then the YAML file, then `AURAFLOW__*` variables
    ///
    /// # Errors
    /// Fails when `path` is not a file, or when a source holds malformed or
    /// unknown keys.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)?
            .extract()
            .context("invalid configuration")
    }

    fn figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(base_url) = overrides.base_url {
            self.api.base_url = base_url;
        }
        if let Some(cookie) = overrides.session_cookie {
            self.session.cookie_value = Some(SecretString::from(cookie));
        }
        // -v info, -vv debug, -vvv trace
        let level = match overrides.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.level);
        }
    }

    /// Effective configuration as YAML, with the session cookie redacted
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration")
    }
}
