use tracing::info;

use super::model::{Catalog, Latest, VersionMap, VersionRecord};
use crate::core::config::CatalogConfig;
use crate::core::error::CatalogResult;
use crate::core::http::Fetcher;
use crate::core::loaders::{
    fetch_game_versions, resolve_intermediary, FabricServerProfile, GameVersion,
};
use crate::core::maven::LibraryResolver;
use crate::core::version::{LauncherManifest, VanillaResolver};

/// Pick the first stable and first unstable version in list order.
///
/// The list must already be newest-first, as Fabric Meta serves it; no
/// version ordering is inferred here.
pub fn select_latest(versions: &[GameVersion]) -> Latest {
    let first = |stable: bool| {
        versions
            .iter()
            .find(|v| v.stable == stable)
            .map(|v| v.version.clone())
    };
    Latest {
        stable: first(true),
        unstable: first(false),
    }
}

/// Drives one catalog build. Owns the per-run caches so every library and
/// vanilla document is fetched at most once.
pub struct CatalogBuilder<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
    config: &'a CatalogConfig,
    libraries: LibraryResolver,
    vanilla: VanillaResolver,
}

impl<'a, F: Fetcher + ?Sized> CatalogBuilder<'a, F> {
    pub fn new(fetcher: &'a F, config: &'a CatalogConfig, manifest: LauncherManifest) -> Self {
        Self {
            fetcher,
            config,
            libraries: LibraryResolver::new(),
            vanilla: VanillaResolver::new(manifest),
        }
    }

    /// Fetch and merge the launcher manifests, then set up a builder.
    pub async fn prepare(fetcher: &'a F, config: &'a CatalogConfig) -> CatalogResult<Self> {
        let manifest = LauncherManifest::fetch(
            fetcher,
            &config.launcher_manifest_url,
            &config.experimental_manifest_url,
        )
        .await?;
        Ok(Self::new(fetcher, config, manifest))
    }

    /// Assemble the record for one (game, loader) pair.
    pub async fn aggregate_version(
        &mut self,
        minecraft_version: &str,
        loader_version: &str,
    ) -> CatalogResult<VersionRecord> {
        let profile_url = self
            .config
            .server_profile_url(minecraft_version, loader_version);
        let profile = FabricServerProfile::fetch(
            self.fetcher,
            &profile_url,
            minecraft_version,
            loader_version,
        )
        .await?;
        let libraries = profile
            .resolve_libraries(self.fetcher, &mut self.libraries)
            .await?;

        let vanilla = self.vanilla.resolve(self.fetcher, minecraft_version).await?;
        let intermediary = resolve_intermediary(
            self.fetcher,
            &mut self.libraries,
            &self.config.library_repository,
            minecraft_version,
        )
        .await?;

        Ok(VersionRecord {
            id: profile.id,
            main_class: profile.main_class,
            libraries,
            vanilla,
            intermediary,
        })
    }

    /// Build the catalog for `versions` (newest-first) with the configured
    /// loader version. The first failure aborts the whole build.
    pub async fn build(&mut self, versions: &[GameVersion]) -> CatalogResult<Catalog> {
        let loader_version = self.config.loader_version.clone();
        let mut records = VersionMap::default();

        for version in versions {
            info!("Fetching data for version {}...", version.version);
            let record = self
                .aggregate_version(&version.version, &loader_version)
                .await?;
            records.insert(version.version.clone(), record);
        }

        info!(
            "Resolved {} versions ({} distinct libraries, {} launcher versions known)",
            records.len(),
            self.libraries.len(),
            self.vanilla.manifest().len()
        );

        Ok(Catalog {
            latest: select_latest(versions),
            fabric_loader_version: loader_version,
            versions: records,
        })
    }
}

/// Fetch every upstream source named in `config` and build the catalog.
pub async fn build_catalog<F: Fetcher + ?Sized>(
    fetcher: &F,
    config: &CatalogConfig,
) -> CatalogResult<Catalog> {
    let versions = fetch_game_versions(fetcher, &config.game_versions_url).await?;
    let mut builder = CatalogBuilder::prepare(fetcher, config).await?;
    builder.build(&versions).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::error::CatalogError;
    use crate::core::http::testing::StaticFetcher;
    use crate::core::maven::encode_hash;

    const DIGEST: &str = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";
    const MAIN_CLASS: &str = "net.fabricmc.loader.impl.launch.server.FabricServerLauncher";
    const LOADER_JAR: &str =
        "https://maven.fabricmc.net/net/fabricmc/fabric-loader/0.16.7/fabric-loader-0.16.7.jar";

    fn gv(version: &str, stable: bool) -> GameVersion {
        GameVersion {
            version: version.into(),
            stable,
        }
    }

    fn config() -> CatalogConfig {
        CatalogConfig {
            game_versions_url: "https://meta/game".into(),
            server_profile_url: "https://meta/{game_version}/{loader_version}/server".into(),
            launcher_manifest_url: "https://mojang/manifest.json".into(),
            experimental_manifest_url: "https://fabric/experimental.json".into(),
            library_repository: "https://maven.fabricmc.net/".into(),
            ..CatalogConfig::default()
        }
    }

    fn intermediary_jar(version: &str) -> String {
        format!(
            "https://maven.fabricmc.net/net/fabricmc/intermediary/{version}/intermediary-{version}-v2.jar"
        )
    }

    /// Upstream fixtures for the given game versions, all sharing one
    /// loader jar whose digest must come from the sidecar.
    fn upstream(versions: &[&str]) -> StaticFetcher {
        let mut fetcher = StaticFetcher::new()
            .with_json(
                "https://meta/game",
                json!(versions
                    .iter()
                    .map(|v| json!({ "version": v, "stable": !v.contains('w') }))
                    .collect::<Vec<_>>()),
            )
            .with_json(
                "https://mojang/manifest.json",
                json!({ "versions": versions
                    .iter()
                    .map(|v| json!({ "id": v, "url": format!("https://mojang/{v}.json"), "sha1": format!("{v}-sha1") }))
                    .collect::<Vec<_>>() }),
            )
            .with_json("https://fabric/experimental.json", json!({ "versions": [] }))
            .with(&format!("{LOADER_JAR}.sha256"), DIGEST);

        for v in versions {
            fetcher = fetcher
                .with_json(
                    &format!("https://meta/{v}/0.16.7/server"),
                    json!({
                        "id": format!("fabric-loader-0.16.7-{v}"),
                        "mainClass": MAIN_CLASS,
                        "libraries": [
                            { "name": "net.fabricmc:fabric-loader:0.16.7", "url": "https://maven.fabricmc.net/" }
                        ]
                    }),
                )
                .with_json(
                    &format!("https://mojang/{v}.json"),
                    json!({ "downloads": {
                        "client": { "sha1": "c", "url": format!("https://mojang/{v}/client.jar") },
                        "server": { "sha1": "s", "url": format!("https://mojang/{v}/server.jar") }
                    }}),
                )
                .with(&format!("{}.sha256", intermediary_jar(v)), DIGEST);
        }
        fetcher
    }

    #[test]
    fn latest_is_first_match_per_flag() {
        let latest = select_latest(&[gv("3", false), gv("2", true), gv("1", true)]);
        assert_eq!(latest.stable.as_deref(), Some("2"));
        assert_eq!(latest.unstable.as_deref(), Some("3"));
    }

    #[test]
    fn latest_ignores_natural_ordering() {
        let latest = select_latest(&[gv("1.0", true), gv("9.9", true), gv("0.1-pre", false)]);
        assert_eq!(latest.stable.as_deref(), Some("1.0"));
        assert_eq!(latest.unstable.as_deref(), Some("0.1-pre"));
    }

    #[test]
    fn latest_is_null_without_candidates() {
        assert_eq!(select_latest(&[]), Latest::default());
        let only_stable = select_latest(&[gv("1.21", true)]);
        assert_eq!(only_stable.unstable, None);
    }

    #[tokio::test]
    async fn full_build_shares_library_lookups() {
        let fetcher = upstream(&["24w14a", "1.20.4", "1.20.3"]);
        let config = config();

        let catalog = build_catalog(&fetcher, &config).await.unwrap();

        assert_eq!(catalog.latest.stable.as_deref(), Some("1.20.4"));
        assert_eq!(catalog.latest.unstable.as_deref(), Some("24w14a"));
        assert_eq!(catalog.fabric_loader_version, "0.16.7");
        assert_eq!(
            catalog.versions.keys().collect::<Vec<_>>(),
            vec!["24w14a", "1.20.4", "1.20.3"]
        );
        assert_eq!(fetcher.hits(&format!("{LOADER_JAR}.sha256")), 1);

        let record = catalog.versions.get("1.20.4").unwrap();
        assert_eq!(record.id, "fabric-loader-0.16.7-1.20.4");
        assert_eq!(record.main_class, MAIN_CLASS);
        assert_eq!(record.libraries[0].url, LOADER_JAR);
        assert_eq!(record.vanilla.server_jar.url, "https://mojang/1.20.4/server.jar");
        assert_eq!(record.vanilla.java_version, "8");
        assert_eq!(record.vanilla.manifest.sha1, "1.20.4-sha1");
        assert_eq!(record.intermediary.url, intermediary_jar("1.20.4"));
        assert_eq!(record.intermediary.hash, encode_hash("sha256", DIGEST).unwrap());
    }

    #[tokio::test]
    async fn vanilla_document_is_fetched_once_per_game_version() {
        let fetcher = upstream(&["1.20.4"]);
        let config = config();
        let mut builder = CatalogBuilder::prepare(&fetcher, &config).await.unwrap();

        builder.aggregate_version("1.20.4", "0.16.7").await.unwrap();
        builder.aggregate_version("1.20.4", "0.16.7").await.unwrap();

        assert_eq!(fetcher.hits("https://mojang/1.20.4.json"), 1);
        assert_eq!(fetcher.hits(&format!("{}.sha256", intermediary_jar("1.20.4"))), 1);
        assert_eq!(fetcher.hits("https://meta/1.20.4/0.16.7/server"), 2);
    }

    #[tokio::test]
    async fn version_missing_from_manifest_aborts_build() {
        let fetcher = upstream(&["1.20.4"]);
        let config = config();
        let mut builder = CatalogBuilder::new(&fetcher, &config, LauncherManifest::default());

        let err = builder.build(&[gv("1.20.4", true)]).await.unwrap_err();
        assert!(matches!(err, CatalogError::UnknownVersion(ref v) if v == "1.20.4"));
    }

    #[tokio::test]
    async fn missing_profile_aborts_build() {
        let fetcher = upstream(&["1.20.4"]);
        let config = CatalogConfig {
            loader_version: "0.0.1".into(),
            ..config()
        };
        let mut builder = CatalogBuilder::prepare(&fetcher, &config).await.unwrap();

        let err = builder.build(&[gv("1.20.4", true)]).await.unwrap_err();
        assert!(matches!(err, CatalogError::ProfileNotFound { .. }));
        assert_eq!(fetcher.hits("https://mojang/1.20.4.json"), 0);
    }
}
