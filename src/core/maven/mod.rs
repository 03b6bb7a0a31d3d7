mod artifact;
mod hash;
mod resolver;

pub use artifact::{format_maven_url, MavenArtifact, DEFAULT_EXTENSION};
pub use hash::{encode_hash, sanitize_name, NAME_ESCAPE};
pub use resolver::{LibraryDownload, LibraryResolver};
