use anyhow::{Context, Result};
use cloudready_shell::{Config, load_content, metadata, render_page};
use std::fs;
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = Config::parse();
    cloudready_shell::init_logging();

    config.validate().context("Invalid configuration")?;
    metadata()
        .validate()
        .context("Invalid application metadata")?;

    let children = load_content(&config.content, config.format)
        .context("Failed to load page content")?;

    let html = render_page(children);

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let output_file = config.output_file();
    fs::write(&output_file, html)
        .with_context(|| format!("Failed to write page to {}", output_file.display()))?;

    info!(path = %output_file.display(), title = metadata().title(), "generated page");

    if !config.no_open
        && let Err(e) = open::that(&output_file)
    {
        warn!("Failed to open {} in browser: {:#}", output_file.display(), e);
    }

    Ok(())
}
