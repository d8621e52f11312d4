mod error;
mod models;
mod render;
mod scraper;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use crate::render::OutputFormat;
use crate::scraper::fetcher::{DEFAULT_TIMEOUT, OAUTH_DOCS_URL};
use crate::scraper::{DocsFetcher, OAuthDocsExtractor, descriptor};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oauth-scope-catalogue")]
#[command(about = "Lists reddit API endpoints grouped by the OAuth scope they require")]
struct Cli {
    /// Write the catalogue to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Decode `%7B`/`%7D` style escapes in endpoint paths
    #[arg(long)]
    decode_params: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let fetcher = DocsFetcher::new(Duration::from_secs(cli.timeout))?;
    run_with(&cli, &fetcher, OAUTH_DOCS_URL, &mut std::io::stdout()).await
}

/// Fetches `url`, extracts the catalogue and writes it to `--output` or `out`.
/// Nothing reaches `out` unless every step succeeds.
async fn run_with(cli: &Cli, fetcher: &DocsFetcher, url: &str, out: &mut impl Write) -> Result<()> {
    let page = fetcher.fetch(url).await?;

    let mut catalogue = OAuthDocsExtractor::new()?.extract(&page)?;
    if cli.decode_params {
        catalogue = catalogue.map_descriptors(descriptor::decode_path_params);
    }

    let rendered = render::render(&catalogue, cli.format, url)?;
    match &cli.output {
        Some(path) => {
            write_output(path, &rendered)?;
            info!(path = %path.display(), "catalogue written");
        }
        None => writeln!(out, "{rendered}").context("writing catalogue")?,
    }

    Ok(())
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}
