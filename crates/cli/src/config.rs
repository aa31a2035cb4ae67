// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime configuration.
//!
//! Settings come from three places, most specific first:
//! - Command-line flags (`--local`, `--state-dir`)
//! - Environment variables (see [`crate::env`])
//! - `config.toml` in the state directory
//!
//! Everything is resolved once into a [`Settings`] value that is passed
//! down explicitly; nothing reads configuration from globals afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "td";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Placeholder used when no API Gateway URL is configured.
pub const DEFAULT_API_GATEWAY_URL: &str = "https://your-api-gateway-url.amazonaws.com/prod";
/// Placeholder Lambda Function URL for the `lambda` environment.
pub const DEFAULT_LAMBDA_URL: &str = "https://your-function-url.lambda-url.us-east-1.on.aws";

/// Where items live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// The remote todo service over HTTP.
    #[default]
    Remote,
    /// A JSON file in the state directory.
    Local,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Remote => "remote",
            BackendKind::Local => "local",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(BackendKind::Remote),
            "local" => Ok(BackendKind::Local),
            _ => Err(Error::InvalidBackend(s.to_string())),
        }
    }
}

/// How the remote service is deployed. Only affects hints and status output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentType {
    ApiGateway,
    #[default]
    LambdaUrl,
}

impl DeploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentType::ApiGateway => "api-gateway",
            DeploymentType::LambdaUrl => "lambda-url",
        }
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeploymentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "api-gateway" => Ok(DeploymentType::ApiGateway),
            "lambda-url" => Ok(DeploymentType::LambdaUrl),
            _ => Err(Error::InvalidDeployment(s.to_string())),
        }
    }
}

/// Named deployment environment selecting a default endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Profile {
    #[default]
    Development,
    Production,
    Lambda,
}

impl FromStr for Profile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Profile::Development),
            "production" => Ok(Profile::Production),
            "lambda" => Ok(Profile::Lambda),
            _ => Err(Error::InvalidProfile(s.to_string())),
        }
    }
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendKind,
    /// Remote endpoint (optional - falls back to environment defaults).
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
    #[serde(default)]
    pub retry: RetryConfig,
}

/// Remote endpoint configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteConfig {
    /// Base URL; `/todos` is appended to it.
    pub url: String,
    #[serde(rename = "type", default)]
    pub deployment: DeploymentType,
}

/// Automatic retries of the initial load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first failed load (default: 2). 0 = disabled.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay before the first retry in milliseconds (default: 200).
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Maximum delay between retries in seconds (default: 5).
    #[serde(default = "default_max_delay_secs")]
    pub max_delay_secs: u64,
}

fn default_max_retries() -> u32 {
    2
}

fn default_initial_delay_ms() -> u64 {
    200
}

fn default_max_delay_secs() -> u64 {
    5
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_secs: default_max_delay_secs(),
        }
    }
}

impl RetryConfig {
    /// Exponential backoff delay before retry number `attempt` (1-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
        let ms = self.initial_delay_ms.saturating_mul(factor);
        Duration::from_millis(ms.min(self.max_delay_secs.saturating_mul(1000)))
    }
}

impl Config {
    /// Loads `config.toml` from `state_dir`; a missing file yields defaults.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let config_path = state_dir.join(CONFIG_FILE_NAME);
        let content = match fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        toml::from_str(&content).map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }
}

/// Environment values captured once at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub api_url: Option<String>,
    pub api_type: Option<String>,
    pub api_gateway_url: Option<String>,
    pub profile: Option<String>,
    pub backend: Option<String>,
    pub state_dir: Option<PathBuf>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        EnvOverrides {
            api_url: env::api_url(),
            api_type: env::api_type(),
            api_gateway_url: env::api_gateway_url(),
            profile: env::profile(),
            backend: env::backend(),
            state_dir: env::state_dir(),
        }
    }
}

/// Where the remote service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub deployment: DeploymentType,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, deployment: DeploymentType) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            deployment,
        }
    }

    /// Picks the endpoint: `TD_API_URL`, then the config file, then the
    /// default for the `TD_ENV` environment.
    pub fn resolve(remote: Option<&RemoteConfig>, env: &EnvOverrides) -> Result<Self> {
        if let Some(url) = &env.api_url {
            let deployment = match &env.api_type {
                Some(t) => t.parse()?,
                None => DeploymentType::LambdaUrl,
            };
            return Ok(ApiConfig::new(url.clone(), deployment));
        }

        if let Some(remote) = remote {
            return Ok(ApiConfig::new(remote.url.clone(), remote.deployment));
        }

        let profile = match &env.profile {
            Some(p) => p.parse()?,
            None => Profile::default(),
        };
        Ok(match profile {
            Profile::Development | Profile::Production => ApiConfig::new(
                env.api_gateway_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_API_GATEWAY_URL.to_string()),
                DeploymentType::ApiGateway,
            ),
            Profile::Lambda => ApiConfig::new(DEFAULT_LAMBDA_URL, DeploymentType::LambdaUrl),
        })
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub state_dir: PathBuf,
    pub backend: BackendKind,
    pub api: ApiConfig,
    pub retry: RetryConfig,
}

impl Settings {
    pub fn resolve(
        state_dir: Option<PathBuf>,
        local: bool,
        env: &EnvOverrides,
    ) -> Result<Self> {
        let state_dir = state_dir
            .or_else(|| env.state_dir.clone())
            .or_else(default_state_dir)
            .ok_or(Error::NoStateDir)?;
        let config = Config::load(&state_dir)?;

        let backend = if local {
            BackendKind::Local
        } else if let Some(b) = &env.backend {
            b.parse()?
        } else {
            config.backend
        };
        let api = ApiConfig::resolve(config.remote.as_ref(), env)?;

        Ok(Settings {
            state_dir,
            backend,
            api,
            retry: config.retry,
        })
    }
}

/// Default state directory (`<data-local-dir>/td`).
pub fn default_state_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join(APP_DIR_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
