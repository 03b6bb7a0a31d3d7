use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::maven::LibraryDownload;
use crate::core::version::VanillaDetail;

/// Everything needed to run a Fabric server on one game version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    pub id: String,
    pub main_class: String,
    pub libraries: Vec<LibraryDownload>,
    pub vanilla: VanillaDetail,
    pub intermediary: LibraryDownload,
}

/// Newest stable and unstable game versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Latest {
    pub stable: Option<String>,
    pub unstable: Option<String>,
}

/// Version records keyed by game version, serialized as a JSON object in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionMap {
    entries: Vec<(String, VersionRecord)>,
}

impl VersionMap {
    /// Insert a record. Re-inserting a key replaces the record in place.
    pub fn insert(&mut self, game_version: String, record: VersionRecord) {
        match self.entries.iter_mut().find(|(k, _)| *k == game_version) {
            Some((_, existing)) => *existing = record,
            None => self.entries.push((game_version, record)),
        }
    }

    pub fn get(&self, game_version: &str) -> Option<&VersionRecord> {
        self.entries
            .iter()
            .find(|(k, _)| k == game_version)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for VersionMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// The emitted `versions.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub latest: Latest,
    pub fabric_loader_version: String,
    pub versions: VersionMap,
}
