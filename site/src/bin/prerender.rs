//! site-prerender - render the community page to static HTML.
//!
//! ```text
//! site-prerender --content header.json --config site.toml --out dist/index.html
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use community_site::config::SiteConfig;
use community_site::content::HeaderContent;
use community_site::render_page;

#[derive(Parser, Debug)]
#[command(name = "site-prerender")]
#[command(about = "Pre-render the community site page from CMS header content")]
#[command(version)]
struct Args {
    /// CMS header response (JSON)
    #[arg(long)]
    content: PathBuf,

    /// Site configuration (TOML); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output HTML file
    #[arg(long, default_value = "index.html")]
    out: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => SiteConfig::load_from_path(path),
        None => SiteConfig::default(),
    };
    debug!(?config, "configuration loaded");

    let raw = std::fs::read_to_string(&args.content)
        .with_context(|| format!("Failed to read {}", args.content.display()))?;
    let content = HeaderContent::from_cms_json(&raw)
        .with_context(|| format!("Failed to decode {}", args.content.display()))?;
    info!(links = content.links.len(), "header content loaded");

    let html = render_page(&content, &config);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&args.out, &html)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    info!("Page written to {} ({} bytes)", args.out.display(), html.len());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[site-prerender] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
