//! linkseeker entry point.
//!
//! Renders one URL in a headless browser, extracts every hyperlink from the
//! rendered DOM, and writes the deduplicated set to a file. Logging goes to
//! stderr so stdout stays clean for `--print` output.

mod cli;

use clap::Parser;
use linkseeker_client::render::{HeadlessRenderer, RenderOptions, Renderer};
use linkseeker_client::{canonicalize, extract_links, write_links};
use linkseeker_core::{AppConfig, Error};
use tracing_subscriber::EnvFilter;

const BANNER: &str = r"
  _ _       _                  _
 | (_)_ __ | | _____  ___  ___| | _____ _ __
 | | | '_ \| |/ / __|/ _ \/ _ \ |/ / _ \ '__|
 | | | | | |   <\__ \  __/  __/   <  __/ |
 |_|_|_| |_|_|\_\___/\___|\___|_|\_\___|_|
";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run() -> Result<(), Error> {
    let args = cli::Cli::parse();

    check_platform()?;

    let mut config = AppConfig::load()?;
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.timeout_ms = timeout_ms;
        config.validate()?;
    }

    if !args.quiet {
        println!("{BANNER}");
    }

    let url = canonicalize(&args.url)?;

    tracing::info!(%url, "loading page in headless browser");
    let renderer = HeadlessRenderer::new(&config.browser).await?;

    let opts = RenderOptions {
        timeout_ms: config.timeout_ms,
        settle_ms: config.settle_ms,
        ..Default::default()
    };
    let page = renderer.render(&url, &opts).await?;
    tracing::info!(
        final_url = %page.final_url,
        render_time_ms = page.render_time_ms,
        "fetched rendered source"
    );

    let links = extract_links(&page.html);
    tracing::info!(count = links.len(), "extracted unique links");

    if args.print {
        println!();
        for link in &links {
            println!("{link}");
        }
        println!();
    }

    let written = write_links(&config.output_path, &links)?;
    tracing::info!(
        count = written,
        path = %config.output_path.display(),
        "wrote extracted links"
    );

    Ok(())
}

/// The browser driver setup is only exercised on Linux hosts; refuse to run
/// anywhere else.
fn check_platform() -> Result<(), Error> {
    if cfg!(target_os = "linux") {
        Ok(())
    } else {
        Err(Error::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }
}
