mod builder;
mod model;
mod writer;

pub use builder::{build_catalog, select_latest, CatalogBuilder};
pub use model::{Catalog, Latest, VersionMap, VersionRecord};
pub use writer::write_catalog;
