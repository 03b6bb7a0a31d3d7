use serde::Deserialize;
use tracing::info;

use crate::core::error::{CatalogError, CatalogResult};
use crate::core::http::{fetch_json, Fetcher};
use crate::core::maven::{LibraryDownload, LibraryResolver};

/// One entry of Fabric Meta's game version list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameVersion {
    pub version: String,
    pub stable: bool,
}

/// Fetch the game version list in upstream order (newest first).
pub async fn fetch_game_versions<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
) -> CatalogResult<Vec<GameVersion>> {
    info!("Fetching game versions...");
    let versions: Vec<GameVersion> = fetch_json(fetcher, url).await?;
    info!("Loaded {} game versions", versions.len());
    Ok(versions)
}

/// Server launch profile for a (game, loader) pair.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricServerProfile {
    pub id: String,
    pub main_class: String,
    #[serde(default)]
    pub libraries: Vec<FabricLibrary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FabricLibrary {
    pub name: String,
    /// Repository base the coordinate is resolved against.
    pub url: String,
    #[serde(default)]
    pub sha256: Option<String>,
}

impl FabricServerProfile {
    /// Fetch the profile from `url`. Fabric Meta answers 400/404 for pairs
    /// it does not know, which surfaces as [`CatalogError::ProfileNotFound`].
    pub async fn fetch<F: Fetcher + ?Sized>(
        fetcher: &F,
        url: &str,
        minecraft_version: &str,
        loader_version: &str,
    ) -> CatalogResult<Self> {
        info!("Fetching server profile for {} / {}...", minecraft_version, loader_version);
        match fetch_json(fetcher, url).await {
            Err(e) if matches!(e.transport_status(), Some(400 | 404)) => {
                Err(CatalogError::ProfileNotFound {
                    game_version: minecraft_version.to_string(),
                    loader_version: loader_version.to_string(),
                })
            }
            other => other,
        }
    }

    /// Resolve every listed library into a hash-pinned download.
    pub async fn resolve_libraries<F: Fetcher + ?Sized>(
        &self,
        fetcher: &F,
        libraries: &mut LibraryResolver,
    ) -> CatalogResult<Vec<LibraryDownload>> {
        let mut resolved = Vec::with_capacity(self.libraries.len());
        for lib in &self.libraries {
            resolved.push(
                libraries
                    .resolve(fetcher, &lib.url, &lib.name, lib.sha256.as_deref())
                    .await?,
            );
        }
        Ok(resolved)
    }
}

/// Coordinate of the v2 intermediary mappings for a game version.
pub fn intermediary_coordinate(minecraft_version: &str) -> String {
    format!("net.fabricmc:intermediary:{}:v2", minecraft_version)
}

/// Resolve the intermediary mappings jar. Fabric Meta never ships its
/// digest, so this always goes through the sidecar (once per run).
pub async fn resolve_intermediary<F: Fetcher + ?Sized>(
    fetcher: &F,
    libraries: &mut LibraryResolver,
    repo_base: &str,
    minecraft_version: &str,
) -> CatalogResult<LibraryDownload> {
    libraries
        .resolve(
            fetcher,
            repo_base,
            &intermediary_coordinate(minecraft_version),
            None,
        )
        .await
}
