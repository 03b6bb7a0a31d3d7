pub mod manifest;
pub mod vanilla;
pub mod version_file;

pub use manifest::{LauncherManifest, VersionEntry, VersionManifest};
pub use vanilla::{ManifestRef, VanillaDetail, VanillaResolver};
pub use version_file::{DownloadArtifact, JavaVersionInfo, VersionDownloads, VersionJson};
