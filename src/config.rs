//! Configuration file handling for the dashboard.
//!
//! The configuration file is stored at `$ZLOTOWKA_DASH_HOME/config.json` and
//! contains the backend base URL, an optional bearer token, the query-cache
//! freshness window and the sidebar link labels.

use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_NAME: &str = "zlotowka-dash";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";

/// How long a resolved query stays fresh when the config does not say.
const DEFAULT_FRESHNESS_SECONDS: u64 = 30;

/// The default sidebar links, in display order.
fn default_links() -> Vec<String> {
    ["Pulpit", "Transakcje", "Marzenia"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_freshness_seconds() -> u64 {
    DEFAULT_FRESHNESS_SECONDS
}

/// The `Config` object represents the configuration of the app. You
/// instantiate it by providing the path to `$ZLOTOWKA_DASH_HOME` and from
/// there it loads `$ZLOTOWKA_DASH_HOME/config.json`.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Creates the data directory, if needed, and writes an initial
    /// `config.json` with default settings.
    ///
    /// # Arguments
    /// - `dir` - The root of the data directory, e.g. `$HOME/.zlotowka-dash`
    /// - `backend_url` - The base URL of the Złotówka backend API
    /// - `bearer_token` - Optional API token identifying the user
    pub async fn create(
        dir: impl Into<PathBuf>,
        backend_url: &str,
        bearer_token: Option<String>,
    ) -> Result<Self> {
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the zlotowka-dash home directory")?;
        let root = tokio::fs::canonicalize(&maybe_relative)
            .await
            .with_context(|| {
                format!(
                    "Unable to canonicalize the path {}",
                    maybe_relative.to_string_lossy()
                )
            })?;

        let config_path = root.join(CONFIG_JSON);
        let config_file = ConfigFile {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            backend_url: backend_url.to_string(),
            bearer_token,
            freshness_seconds: DEFAULT_FRESHNESS_SECONDS,
            links: default_links(),
        };
        config_file.save(&config_path).await?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    /// Validates that the home directory and config file exist and loads them.
    pub async fn load(home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = home.into();
        let root = tokio::fs::canonicalize(&maybe_relative)
            .await
            .context("The zlotowka-dash home directory is missing, run 'zdash init' first")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!("The config file is missing '{}'", config_path.display())
        }
        let config_file = ConfigFile::load(&config_path).await?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn backend_url(&self) -> &str {
        &self.config_file.backend_url
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.config_file.bearer_token.as_deref()
    }

    /// The query-cache freshness window.
    pub fn freshness(&self) -> Duration {
        Duration::from_secs(self.config_file.freshness_seconds)
    }

    /// The sidebar link labels, in display order.
    pub fn links(&self) -> &[String] {
        &self.config_file.links
    }
}

/// Represents the serialization and deserialization format of the
/// configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "zlotowka-dash",
///   "config_version": 1,
///   "backend_url": "https://api.zlotowka.example/api/v1",
///   "freshness_seconds": 30,
///   "links": ["Pulpit", "Transakcje", "Marzenia"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "zlotowka-dash"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Base URL of the Złotówka backend API
    backend_url: String,

    /// Bearer token identifying the user (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    bearer_token: Option<String>,

    /// Seconds a resolved query stays fresh in the cache
    #[serde(default = "default_freshness_seconds")]
    freshness_seconds: u64,

    /// Sidebar link labels, in display order
    #[serde(default = "default_links")]
    links: Vec<String>,
}

impl ConfigFile {
    /// Loads a ConfigFile asynchronously from the specified path.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ConfigFile = utils::deserialize(path).await?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("Unable to write config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_create_and_load() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("zdash_home");

        let created = Config::create(
            &home,
            "https://api.zlotowka.example/api/v1",
            Some("secret-token".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(created.backend_url(), "https://api.zlotowka.example/api/v1");
        assert_eq!(created.bearer_token(), Some("secret-token"));
        assert_eq!(created.freshness(), Duration::from_secs(30));
        assert!(created.config_path().is_file());

        let loaded = Config::load(&home).await.unwrap();
        assert_eq!(loaded.backend_url(), created.backend_url());
        assert_eq!(loaded.links(), ["Pulpit", "Transakcje", "Marzenia"]);
    }

    #[tokio::test]
    async fn test_load_missing_config_fails() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(dir.path()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("config file"));
    }

    #[tokio::test]
    async fn test_load_invalid_app_name_fails() {
        let dir = TempDir::new().unwrap();
        let json = r#"{
            "app_name": "wrong_app",
            "config_version": 1,
            "backend_url": "http://localhost:8080"
        }"#;
        utils::write(&dir.path().join(CONFIG_JSON), json).await.unwrap();

        let result = Config::load(dir.path()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid app_name"));
    }

    #[tokio::test]
    async fn test_minimal_config_gets_defaults() {
        let dir = TempDir::new().unwrap();
        let json = r#"{
            "app_name": "zlotowka-dash",
            "config_version": 1,
            "backend_url": "http://localhost:8080"
        }"#;
        utils::write(&dir.path().join(CONFIG_JSON), json).await.unwrap();

        let config = Config::load(dir.path()).await.unwrap();
        assert_eq!(config.freshness(), Duration::from_secs(30));
        assert_eq!(config.links(), ["Pulpit", "Transakcje", "Marzenia"]);
        assert_eq!(config.bearer_token(), None);
    }

    #[tokio::test]
    async fn test_serialization_omits_missing_token() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        Config::create(&home, "http://localhost:8080", None)
            .await
            .unwrap();
        let written = utils::read(&home.join(CONFIG_JSON)).await.unwrap();
        assert!(!written.contains("bearer_token"));
    }
}
