use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the catalog generator.
/// Every module returns `Result<T, CatalogError>`.
#[derive(Debug, Error)]
pub enum CatalogError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fetch failed for {url}{}", status_suffix(.status))]
    Transport { url: String, status: Option<u16> },

    // ── Maven ───────────────────────────────────────────
    #[error("Invalid Maven coordinate: {0}")]
    InvalidCoordinate(String),

    // ── Integrity ───────────────────────────────────────
    #[error("Invalid hex digest {digest:?}: {reason}")]
    InvalidDigest { digest: String, reason: String },

    // ── Metadata ────────────────────────────────────────
    #[error("Minecraft version {0} not found in launcher manifest")]
    UnknownVersion(String),

    #[error("No server profile for Minecraft {game_version} with loader {loader_version}")]
    ProfileNotFound {
        game_version: String,
        loader_version: String,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Config ──────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<std::io::Error> for CatalogError {
    fn from(source: std::io::Error) -> Self {
        CatalogError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(": HTTP {code}"),
        None => String::new(),
    }
}

impl CatalogError {
    /// HTTP status carried by a transport failure, if the server answered at all.
    pub fn transport_status(&self) -> Option<u16> {
        match self {
            CatalogError::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_display_includes_status_when_known() {
        let err = CatalogError::Transport {
            url: "https://example.com/a.json".into(),
            status: Some(404),
        };
        assert_eq!(
            err.to_string(),
            "Fetch failed for https://example.com/a.json: HTTP 404"
        );
        assert_eq!(err.transport_status(), Some(404));
    }

    #[test]
    fn transport_display_without_status() {
        let err = CatalogError::Transport {
            url: "https://example.com/a.json".into(),
            status: None,
        };
        assert_eq!(err.to_string(), "Fetch failed for https://example.com/a.json");
        assert_eq!(err.transport_status(), None);
    }
}
