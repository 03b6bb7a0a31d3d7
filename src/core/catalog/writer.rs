use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, error, info};

use super::model::Catalog;
use crate::core::error::{CatalogError, CatalogResult};

/// Write the catalog as pretty-printed JSON.
///
/// The document goes to a temp file beside `path` and is renamed over it,
/// so an existing catalog is never left half-written.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> CatalogResult<()> {
    let mut json = serde_json::to_string_pretty(catalog)?;
    json.push('\n');

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| CatalogError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let io_err = |source: std::io::Error| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut temp_file = NamedTempFile::new_in(dir).map_err(io_err)?;
    debug!(
        "Writing {} bytes to {:?} via {:?}",
        json.len(),
        path,
        temp_file.path()
    );
    temp_file.write_all(json.as_bytes()).map_err(io_err)?;
    temp_file.flush().map_err(io_err)?;
    temp_file.as_file().sync_all().map_err(io_err)?;

    temp_file.persist(path).map_err(|e| {
        error!("Failed to persist catalog over {:?}: {}", path, e.error);
        io_err(e.error)
    })?;

    info!(
        "Wrote {} versions to {:?}",
        catalog.versions.len(),
        path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::model::{Latest, VersionMap};

    fn empty_catalog() -> Catalog {
        Catalog {
            latest: Latest::default(),
            fabric_loader_version: "0.16.7".into(),
            versions: VersionMap::default(),
        }
    }

    #[test]
    fn writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("versions.json");

        write_catalog(&empty_catalog(), &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n  \"latest\""));
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["fabricLoaderVersion"], "0.16.7");
        assert_eq!(value["latest"]["stable"], serde_json::Value::Null);
        assert_eq!(value["versions"], serde_json::json!({}));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("versions.json");
        std::fs::write(&path, "stale").unwrap();

        write_catalog(&empty_catalog(), &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"fabricLoaderVersion\": \"0.16.7\""));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
