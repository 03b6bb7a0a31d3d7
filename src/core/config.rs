use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{CatalogError, CatalogResult};

pub const DEFAULT_LOADER_VERSION: &str = "0.16.7";

const GAME_VERSIONS_URL: &str = "https://meta.fabricmc.net/v2/versions/game";
const SERVER_PROFILE_URL: &str =
    "https://meta.fabricmc.net/v2/versions/loader/{game_version}/{loader_version}/server/json";
const LAUNCHER_MANIFEST_URL: &str =
    "https://launchermeta.mojang.com/mc/game/version_manifest_v2.json";
const EXPERIMENTAL_MANIFEST_URL: &str =
    "https://maven.fabricmc.net/net/minecraft/experimental_versions.json";
const LIBRARY_REPOSITORY: &str = "https://maven.fabricmc.net/";
const DEFAULT_OUTPUT: &str = "versions.json";

/// Upstream endpoints and run parameters for one catalog build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogConfig {
    pub game_versions_url: String,
    /// Template with `{game_version}` and `{loader_version}` placeholders.
    pub server_profile_url: String,
    pub launcher_manifest_url: String,
    pub experimental_manifest_url: String,
    /// Maven repository the intermediary mappings are resolved against.
    pub library_repository: String,
    pub loader_version: String,
    pub output: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            game_versions_url: GAME_VERSIONS_URL.to_string(),
            server_profile_url: SERVER_PROFILE_URL.to_string(),
            launcher_manifest_url: LAUNCHER_MANIFEST_URL.to_string(),
            experimental_manifest_url: EXPERIMENTAL_MANIFEST_URL.to_string(),
            library_repository: LIBRARY_REPOSITORY.to_string(),
            loader_version: DEFAULT_LOADER_VERSION.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl CatalogConfig {
    /// Load a config file. Fields missing from the file keep their defaults.
    ///
    /// Not validated here: callers apply their overrides first, then call
    /// [`CatalogConfig::validate`].
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: CatalogConfig = serde_json::from_str(&raw)?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.loader_version.trim().is_empty() {
            return Err(CatalogError::Config("loaderVersion must not be empty".into()));
        }
        if !self.library_repository.ends_with('/') {
            return Err(CatalogError::Config(format!(
                "libraryRepository must end with '/': {}",
                self.library_repository
            )));
        }
        Ok(())
    }

    /// Server profile URL for one (game, loader) pair.
    pub fn server_profile_url(&self, game_version: &str, loader_version: &str) -> String {
        self.server_profile_url
            .replace("{game_version}", game_version)
            .replace("{loader_version}", loader_version)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn profile_url_substitutes_both_placeholders() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.server_profile_url("1.21.1", "0.16.7"),
            "https://meta.fabricmc.net/v2/versions/loader/1.21.1/0.16.7/server/json"
        );
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "loaderVersion": "0.15.11" }}"#).unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();
        assert_eq!(config.loader_version, "0.15.11");
        assert_eq!(config.game_versions_url, GAME_VERSIONS_URL);
        assert_eq!(config.output, PathBuf::from("versions.json"));
    }

    #[test]
    fn load_leaves_validation_to_the_caller() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "loaderVersion": "" }}"#).unwrap();

        let mut config = CatalogConfig::load(file.path()).unwrap();
        assert!(matches!(config.validate(), Err(CatalogError::Config(_))));

        config.loader_version = "0.16.9".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn repository_without_trailing_slash_is_rejected() {
        let config = CatalogConfig {
            library_repository: "https://maven.fabricmc.net".into(),
            ..CatalogConfig::default()
        };
        assert!(matches!(config.validate(), Err(CatalogError::Config(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = CatalogConfig::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
