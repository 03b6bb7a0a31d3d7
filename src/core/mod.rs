// ─── Fabric Catalog Core ───
// Resolves upstream Fabric and Mojang metadata into one hash-pinned catalog.
//
// Architecture:
//   core/
//     config/   — Endpoints, loader version, output path
//     http/     — Fetcher trait + reqwest-backed transport
//     maven/    — Coordinate URLs, SRI hashes, memoized library resolver
//     version/  — Launcher manifests (merged), per-version documents, vanilla details
//     loaders/  — Fabric Meta game versions, server profiles, intermediary
//     catalog/  — Output model, builder, atomic writer

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod loaders;
pub mod maven;
pub mod version;
