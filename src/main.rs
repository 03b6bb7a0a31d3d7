use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use fabric_catalog::{
    build_catalog, init_tracing, write_catalog, Catalog, CatalogConfig, CatalogResult, HttpFetcher,
};

/// Generate a hash-pinned catalog of Fabric server versions.
#[derive(Debug, Parser)]
#[command(name = "fabric-catalog", version, about)]
struct CliArgs {
    /// JSON config file overriding upstream endpoints.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fabric loader version to pin every game version to.
    #[arg(short, long)]
    loader_version: Option<String>,

    /// Where to write the catalog.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Resolve everything but do not write the catalog.
    #[arg(long)]
    dry_run: bool,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

impl CliArgs {
    fn default_filter(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info,fabric_catalog=debug",
            1 => "debug",
            _ => "trace",
        }
    }

    fn resolve_config(&self) -> CatalogResult<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => CatalogConfig::load(path)?,
            None => CatalogConfig::default(),
        };
        if let Some(loader_version) = &self.loader_version {
            config.loader_version = loader_version.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Write the catalog to the configured output, or only report it on a dry run.
fn emit_catalog(catalog: &Catalog, config: &CatalogConfig, dry_run: bool) -> CatalogResult<()> {
    if dry_run {
        info!(
            "Dry run: {} versions resolved (latest stable {:?}, unstable {:?}), nothing written",
            catalog.versions.len(),
            catalog.latest.stable,
            catalog.latest.unstable
        );
        return Ok(());
    }

    write_catalog(catalog, &config.output)
}

async fn run(args: &CliArgs) -> CatalogResult<()> {
    let config = args.resolve_config()?;
    info!("Building catalog for Fabric loader {}", config.loader_version);

    let fetcher = HttpFetcher::new()?;
    let catalog = build_catalog(&fetcher, &config).await?;

    emit_catalog(&catalog, &config, args.dry_run)
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_tracing(args.default_filter());

    if let Err(e) = run(&args).await {
        error!("Catalog build failed: {}", e);
        process::exit(1);
    }
}
