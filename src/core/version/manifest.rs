// ─── Launcher Manifest ───
// Fetches the Mojang version manifest and the experimental snapshot
// manifest and merges them into one id-keyed lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::error::CatalogResult;
use crate::core::http::{fetch_json, Fetcher};

/// Top-level launcher manifest document.
#[derive(Debug, Deserialize)]
pub struct VersionManifest {
    pub versions: Vec<VersionEntry>,
}

/// A single entry in a manifest: where the per-version document lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub id: String,
    pub url: String,
    pub sha1: String,
}

impl VersionManifest {
    pub async fn fetch<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> CatalogResult<Self> {
        let manifest: VersionManifest = fetch_json(fetcher, url).await?;
        info!("Loaded {} versions from {}", manifest.versions.len(), url);
        Ok(manifest)
    }
}

/// Every known version id mapped to its manifest entry.
#[derive(Debug, Default)]
pub struct LauncherManifest {
    entries: HashMap<String, VersionEntry>,
}

impl LauncherManifest {
    /// Merge manifests in order; a later manifest's entry replaces an
    /// earlier one with the same id.
    pub fn merge<I>(manifests: I) -> Self
    where
        I: IntoIterator<Item = VersionManifest>,
    {
        let mut entries = HashMap::new();
        for manifest in manifests {
            for entry in manifest.versions {
                entries.insert(entry.id.clone(), entry);
            }
        }
        Self { entries }
    }

    /// Fetch the primary and experimental manifests and merge them,
    /// experimental entries winning.
    pub async fn fetch<F: Fetcher + ?Sized>(
        fetcher: &F,
        primary_url: &str,
        experimental_url: &str,
    ) -> CatalogResult<Self> {
        info!("Fetching launcher manifests...");
        let primary = VersionManifest::fetch(fetcher, primary_url).await?;
        let experimental = VersionManifest::fetch(fetcher, experimental_url).await?;
        Ok(Self::merge([primary, experimental]))
    }

    pub fn find_version(&self, id: &str) -> Option<&VersionEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
