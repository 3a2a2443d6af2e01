use std::net::SocketAddr;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::navigation::History;
use crate::Result;

pub static CONFIG_FILE: &'static str = "jornal.toml";

/// Application configuration.
///
/// # Sensible defaults
///
/// `Config::default()` serves the front end from the root path on
/// `127.0.0.1:8080` with formatted logging. Using the *struct update syntax*
/// one can change just what's needed.
///
/// ```ignore
/// let cfg = Config {
///     base_url: "/jornal/".to_string(),
///     ..Default::default()
/// }
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub name: String,
    pub version: String,

    /// Base path the history is rooted at. Usually provided through the
    /// `BASE_URL` environment variable at startup.
    pub base_url: String,
    /// Address on which to serve the shell. Defaults to `127.0.0.1:8080`.
    pub address: SocketAddr,

    pub tracing: Tracing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            base_url: "/".to_string(),
            address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            tracing: Tracing::default(),
        }
    }
}

impl Config {
    /// History rooted at the configured base path.
    pub fn history(&self) -> History {
        History::new(&self.base_url)
    }
}

/// Loads application config from toml file at standard path using provided
/// name.
///
/// For example for `name` == `jornal.toml` we will load both `jornal.toml`
/// and `secret.jornal.toml` from the main project directory. Environment
/// variables take precedence, with `__` separating nested keys, e.g.
/// `TRACING__LEVEL=debug`.
pub fn load_from<T: DeserializeOwned>(name: impl AsRef<str>) -> Result<T> {
    let config = config::Config::builder()
        .add_source(config::File::with_name(name.as_ref()))
        .add_source(config::File::with_name(&format!("secret.{}", name.as_ref())).required(false))
        .add_source(environment())
        .build()?;

    let config: T = config.try_deserialize()?;

    Ok(config)
}

/// Loads application config from environment variables only.
pub fn load_from_env<T: DeserializeOwned>() -> Result<T> {
    let config = config::Config::builder()
        .add_source(environment())
        .build()?;

    Ok(config.try_deserialize()?)
}

/// Loads application config from the default file if it exists, otherwise
/// from environment variables only.
pub fn load_or_env<T: DeserializeOwned>() -> Result<T> {
    load_or_env_from(CONFIG_FILE)
}

/// Same as [`load_or_env`] with a custom file path. A file that exists but
/// fails to parse is an error, it's never silently skipped.
pub fn load_or_env_from<T: DeserializeOwned>(path: impl AsRef<str>) -> Result<T> {
    if Path::new(path.as_ref()).is_file() {
        load_from(path)
    } else {
        log::debug!("no config file at {}, using environment only", path.as_ref());
        load_from_env()
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .separator("__")
        .prefix_separator("__")
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Tracing {
    pub enabled: bool,

    pub mode: crate::tracing::Mode,
    pub level: crate::tracing::Level,
}

impl Default for Tracing {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: crate::tracing::Mode::default(),
            level: crate::tracing::Level::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracing::{Level, Mode};

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "/");
        assert_eq!(config.address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.history().base(), "/");
        assert!(config.tracing.enabled);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            base_url = "jornal"

            [tracing]
            mode = "json"
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.history().base(), "/jornal/");
        assert_eq!(config.tracing.mode, Mode::Json);
        assert_eq!(config.tracing.level, Level::Debug);
        assert_eq!(config.address, Config::default().address);
    }

    #[test]
    fn malformed_file_is_not_skipped() {
        let path = std::env::temp_dir()
            .join(format!("jornal-malformed-{}.toml", std::process::id()));
        std::fs::write(&path, "base_url = [\n").unwrap();
        let result = load_or_env_from::<Config>(path.to_string_lossy());
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err.kind, crate::ErrorKind::ConfigError(_)));
    }

    #[test]
    fn missing_file_falls_back_to_environment() {
        let path = std::env::temp_dir().join("jornal-does-not-exist.toml");
        assert!(load_or_env_from::<Config>(path.to_string_lossy()).is_ok());
    }
}
