use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Prefix of the environment variables read by the loader (`BCKND_HOST`, `BCKND_PORT`)
pub const ENV_PREFIX: &str = "BCKND";

/// Host used when `BCKND_HOST` is unset or empty
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port used when `BCKND_PORT` is unset or empty
pub const DEFAULT_PORT: &str = "8000";

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(e: config::ConfigError) -> Self {
        ConfigError::LoadError(e.to_string())
    }
}

/// Backend endpoint configuration.
///
/// Both fields are kept as plain strings and are never validated: whatever the
/// environment holds ends up in the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendConfig {
    pub host: String,
    pub port: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
        }
    }
}

impl BackendConfig {
    /// Read `BCKND_HOST` and `BCKND_PORT` from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        load(ENV_PREFIX, None, None)
    }

    /// Same lookup as [`from_env`](Self::from_env), against a caller-supplied
    /// set of variables instead of the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        load(ENV_PREFIX, None, Some(vars))
    }

    /// Root address every relative request is resolved against
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Load configuration from file, overlaid by the environment.
///
/// The file format follows its extension (TOML, YAML, JSON). Keys are `host`
/// and `port`; a non-empty `BCKND_*` variable wins over the file.
pub fn load_config(path: impl AsRef<Path>) -> Result<BackendConfig, ConfigError> {
    load(ENV_PREFIX, Some(path.as_ref()), None)
}

fn load(
    prefix: &str,
    file: Option<&Path>,
    vars: Option<config::Map<String, String>>,
) -> Result<BackendConfig, ConfigError> {
    let mut builder = config::Config::builder()
        .set_default("host", DEFAULT_HOST)?
        .set_default("port", DEFAULT_PORT)?;

    if let Some(path) = file {
        debug!(path = %path.display(), "Adding config file source");
        builder = builder.add_source(config::File::from(path));
    }

    debug!(
        prefix,
        explicit_vars = vars.is_some(),
        "Adding environment source"
    );
    let vars = vars.unwrap_or_else(|| prefixed_env_vars(prefix));
    builder = builder.add_source(
        config::Environment::with_prefix(prefix)
            .ignore_empty(true)
            .source(Some(vars)),
    );

    let config: BackendConfig = builder.build()?.try_deserialize()?;
    Ok(config)
}

/// Process variables under `{prefix}_`, skipping anything that is not UTF-8
fn prefixed_env_vars(prefix: &str) -> config::Map<String, String> {
    let wanted = format!("{}_", prefix.to_lowercase());
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .filter(|(k, _)| k.to_lowercase().starts_with(&wanted))
        .collect()
}
