use crate::commands::Out;
use crate::{Config, Result};
use anyhow::Context;
use std::path::Path;

/// Creates the data directory and writes an initial `config.json`.
///
/// # Arguments
/// - `dash_home` - The directory that will be the root of the data directory,
///   e.g. `$HOME/.zlotowka-dash`
/// - `backend_url` - The base URL of the Złotówka backend API
/// - `token` - Optional bearer token identifying the user
///
/// # Errors
/// - Returns an error if any file operations fail.
pub async fn init(dash_home: &Path, backend_url: &str, token: Option<String>) -> Result<Out<()>> {
    let _config = Config::create(dash_home, backend_url, token)
        .await
        .context("Unable to create the data directory and config")?;
    Ok("Successfully created the zlotowka-dash directory and config".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_loadable_config() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");

        let out = init(&home, "http://localhost:8080", None).await.unwrap();
        assert!(out.message().contains("Successfully"));

        let config = Config::load(&home).await.unwrap();
        assert_eq!(config.backend_url(), "http://localhost:8080");
    }
}
