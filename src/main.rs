mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use hypersonic::{config::DEFAULT_MANIFEST_FILE_NAME, ChangeSet, ClientConfig, Hypersonic, Manifest};
use std::path::PathBuf;

/// Opens a pull request described by a YAML manifest.
#[derive(Debug, Parser)]
#[command(name = "hypersonic", version, about)]
struct Cli {
    /// Path to the manifest file
    #[arg(short, long, default_value = DEFAULT_MANIFEST_FILE_NAME)]
    config: PathBuf,

    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: log::Level,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.log_level)?;

    log::info!("Loading {}", cli.config.display());
    let manifest = Manifest::load(&cli.config)
        .await
        .context("Cannot load manifest file")?;

    let config = ClientConfig::from_env().context("Cannot read client configuration")?;
    let client = Hypersonic::with_config(manifest.client_config(config))
        .context("Cannot create the client")?;
    let input = manifest.pr_input()?;

    log::info!("Opening pull request on {}", manifest.repository);
    let url = if manifest.contents.is_empty() {
        let files = manifest
            .files
            .iter()
            .map(|file| (file.local.as_str(), file.remote.as_str()));

        client
            .create_pr_from_files(&manifest.repository, files, input)
            .await
    } else {
        let contents = manifest
            .contents
            .iter()
            .map(|entry| (entry.path.as_str(), entry.content.as_str()))
            .collect::<ChangeSet>();
        let files = manifest
            .files
            .iter()
            .map(|file| (file.local.as_str(), file.remote.as_str()));
        let changes = client.read_files_into(contents, files).await?;

        client
            .create_pr_from_multiple_contents(&manifest.repository, changes, input)
            .await
    }
    .context("Cannot create the pull request")?;

    println!("{}", url);

    Ok(())
}
