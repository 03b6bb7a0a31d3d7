use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::artifact::{MavenArtifact, DEFAULT_EXTENSION};
use super::hash::{encode_hash, sanitize_name};
use crate::core::error::{CatalogError, CatalogResult};
use crate::core::http::Fetcher;

const HASH_ALGORITHM: &str = "sha256";
const DIGEST_SIDECAR_SUFFIX: &str = ".sha256";

/// A content-addressed download: where to get it, what to call it, what it hashes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryDownload {
    pub url: String,
    pub name: String,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LibraryKey {
    repo_base: String,
    coord: String,
    sha256: Option<String>,
}

/// Resolves Maven coordinates into hash-pinned download descriptors.
///
/// Results are cached for the lifetime of the resolver, keyed on
/// (repository, coordinate, known digest), so a library shared by many
/// profiles costs at most one sidecar fetch per run.
#[derive(Debug, Default)]
pub struct LibraryResolver {
    resolved: HashMap<LibraryKey, LibraryDownload>,
}

impl LibraryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve one coordinate against `repo_base`.
    ///
    /// When `sha256` is `None` or blank the digest is read from `<jar url>.sha256`.
    pub async fn resolve<F: Fetcher + ?Sized>(
        &mut self,
        fetcher: &F,
        repo_base: &str,
        coord: &str,
        sha256: Option<&str>,
    ) -> CatalogResult<LibraryDownload> {
        let sha256 = sha256.filter(|d| !d.trim().is_empty());
        let key = LibraryKey {
            repo_base: repo_base.to_string(),
            coord: coord.to_string(),
            sha256: sha256.map(str::to_string),
        };
        if let Some(hit) = self.resolved.get(&key) {
            debug!("Library cache hit: {}", coord);
            return Ok(hit.clone());
        }

        let artifact = MavenArtifact::parse(coord)?;
        let url = artifact.url(repo_base, DEFAULT_EXTENSION);
        let name = sanitize_name(&url);

        let hash = match sha256 {
            Some(digest) => encode_hash(HASH_ALGORITHM, digest)?,
            None => {
                debug!("Fetching library hash for {}", artifact);
                let sidecar = fetcher
                    .fetch_text(&format!("{url}{DIGEST_SIDECAR_SUFFIX}"))
                    .await?;
                encode_hash(HASH_ALGORITHM, sidecar_digest(&sidecar)?)?
            }
        };

        let download = LibraryDownload { url, name, hash };
        self.resolved.insert(key, download.clone());
        Ok(download)
    }

    /// Number of distinct lookups resolved so far.
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

/// Sidecars hold the hex digest, sometimes followed by a file name or newline.
fn sidecar_digest(body: &str) -> CatalogResult<&str> {
    body.split_whitespace()
        .next()
        .ok_or_else(|| CatalogError::InvalidDigest {
            digest: body.to_string(),
            reason: "empty digest sidecar".into(),
        })
}
