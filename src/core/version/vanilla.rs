use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::error::{CatalogError, CatalogResult};
use crate::core::http::Fetcher;
use super::manifest::LauncherManifest;
use super::version_file::{DownloadArtifact, VersionJson};

/// Pointer back to the per-version document a detail was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRef {
    pub url: String,
    pub sha1: String,
}

/// Vanilla jars and runtime requirement for one game version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VanillaDetail {
    pub server_jar: DownloadArtifact,
    pub client_jar: DownloadArtifact,
    pub java_version: String,
    pub manifest: ManifestRef,
}

/// Resolves the official per-version document for a game version.
///
/// Owns the merged launcher manifest and caches one detail per version id:
/// the result does not depend on the loader version asking for it.
pub struct VanillaResolver {
    manifest: LauncherManifest,
    resolved: HashMap<String, VanillaDetail>,
}

impl VanillaResolver {
    pub fn new(manifest: LauncherManifest) -> Self {
        Self {
            manifest,
            resolved: HashMap::new(),
        }
    }

    pub async fn resolve<F: Fetcher + ?Sized>(
        &mut self,
        fetcher: &F,
        minecraft_version: &str,
    ) -> CatalogResult<VanillaDetail> {
        if let Some(hit) = self.resolved.get(minecraft_version) {
            debug!("Vanilla cache hit: {}", minecraft_version);
            return Ok(hit.clone());
        }

        let entry = self
            .manifest
            .find_version(minecraft_version)
            .ok_or_else(|| CatalogError::UnknownVersion(minecraft_version.to_string()))?;

        info!("Fetching server JAR information for {}...", minecraft_version);
        let version_json = VersionJson::fetch(fetcher, &entry.url).await?;

        let detail = VanillaDetail {
            java_version: version_json.required_java_major(),
            server_jar: version_json.downloads.server,
            client_jar: version_json.downloads.client,
            manifest: ManifestRef {
                url: entry.url.clone(),
                sha1: entry.sha1.clone(),
            },
        };

        self.resolved
            .insert(minecraft_version.to_string(), detail.clone());
        Ok(detail)
    }

    pub fn manifest(&self) -> &LauncherManifest {
        &self.manifest
    }
}
