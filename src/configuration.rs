use crate::store_client::{StoreClient, StoreError};
use reqwest::Url;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_TABLE: &str = "customers";
pub const DEFAULT_TIMEOUT_MILLISECONDS: u64 = 10_000;

#[derive(Deserialize, Clone)]
pub struct Configuration {
    pub application: ApplicationSettings,
    pub store: StoreSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StoreSettings {
    pub base_url: String,
    pub api_key: Secret<String>,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_timeout_milliseconds")]
    pub timeout_milliseconds: u64,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_timeout_milliseconds() -> u64 {
    DEFAULT_TIMEOUT_MILLISECONDS
}

impl StoreSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }

    pub fn client(&self) -> Result<StoreClient, StoreError> {
        StoreClient::new(
            self.url()?,
            self.table.clone(),
            self.api_key.clone(),
            self.timeout(),
        )
    }

    /// Reads `SUPABASE_URL` and `SUPABASE_KEY` from the process environment.
    /// Used by the cleanup job, which has no configuration files.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_env_source(None)
    }

    /// Same as [`StoreSettings::from_env`], but reads from `source` instead of the process
    /// environment when one is given.
    pub fn from_env_source(
        source: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let credentials = config::Config::builder()
            .add_source(config::Environment::with_prefix("SUPABASE").source(source))
            .build()?
            .try_deserialize::<StoreCredentials>()?;

        if credentials.url.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "SUPABASE_URL is set but empty".to_string(),
            ));
        }
        if credentials.key.expose_secret().trim().is_empty() {
            return Err(config::ConfigError::Message(
                "SUPABASE_KEY is set but empty".to_string(),
            ));
        }

        Ok(Self {
            base_url: credentials.url,
            api_key: credentials.key,
            table: default_table(),
            timeout_milliseconds: default_timeout_milliseconds(),
        })
    }
}

#[derive(Deserialize)]
struct StoreCredentials {
    url: String,
    key: Secret<String>,
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}

pub fn get_config() -> Result<Configuration, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?
        .join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    // base.yaml, then the environment file, then APP_* variables (e.g. `APP_STORE__API_KEY`)
    let configs = config::Config::builder()
        .add_source(config::File::from(base_path.join("base.yaml")))
        .add_source(config::File::from(base_path.join(environment_filename)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    configs.try_deserialize::<Configuration>()
}
