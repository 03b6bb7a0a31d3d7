// ─── Version File ───
// The per-version document a manifest entry points at. Only the parts the
// catalog needs are modelled.

use serde::{Deserialize, Serialize};

use crate::core::error::CatalogResult;
use crate::core::http::{fetch_json, Fetcher};

/// Java major version assumed for documents that predate `javaVersion`.
pub const DEFAULT_JAVA_MAJOR: &str = "8";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionJson {
    pub downloads: VersionDownloads,
    #[serde(default)]
    pub java_version: Option<JavaVersionInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaVersionInfo {
    #[serde(default)]
    pub major_version: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct VersionDownloads {
    pub client: DownloadArtifact,
    pub server: DownloadArtifact,
}

/// A jar download exactly as the launcher metadata describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadArtifact {
    pub sha1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    pub url: String,
}

impl VersionJson {
    pub async fn fetch<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> CatalogResult<Self> {
        fetch_json(fetcher, url).await
    }

    /// Required Java major version, rendered as a string.
    pub fn required_java_major(&self) -> String {
        self.java_version
            .as_ref()
            .and_then(|j| j.major_version)
            .map(|major| major.to_string())
            .unwrap_or_else(|| DEFAULT_JAVA_MAJOR.to_string())
    }
}
