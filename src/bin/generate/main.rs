//! Fetch the GPT-J checkpoint, verify it, and hand it to a generator.

mod cli;
mod generator;
mod manifest;

use crate::cli::Args;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use modelfetch::{FetchEvent, FetcherBuilder};
use std::path::Path;
use std::time::Instant;
use tokio::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

const OUTPUT_FILE: &str = "output_context.txt";

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let args = Args::parse();
    run(args).await
}

async fn run(args: Args) -> Result<()> {
    // Both artifacts must land in one directory, never in one file.
    if let Some(ref dir) = args.download_dir {
        fs::create_dir_all(dir)
            .await
            .wrap_err_with(|| format!("cannot create {}", dir.display()))?;
    }

    let builder = if args.quiet {
        FetcherBuilder::hidden()
    } else {
        FetcherBuilder::new()
    };
    let fetcher = builder
        .retries(args.retries)
        .on_event(|event| match event {
            FetchEvent::Progress { .. } => {}
            other => info!("{}", other),
        })
        .build();

    let requests = manifest::requests(
        &manifest::GPT_J,
        args.download_dir.as_deref(),
        args.overwrite,
    )?;
    let summaries = fetcher.fetch_all(&requests).await?;
    info!("***download finished***");

    let Some(ref program) = args.generator else {
        info!("No generator given, stopping after download");
        return Ok(());
    };

    let model_dir = summaries
        .first()
        .and_then(|s| s.path().parent())
        .map(Path::to_path_buf)
        .ok_or_else(|| eyre!("no model directory to load"))?;

    info!("***generating***");
    let start = Instant::now();
    let text = generator::generate(program, &model_dir, &generator::Params::from(&args)).await?;
    info!("***output_context: {}", text);
    info!("Total time spent: {:.2}s.", start.elapsed().as_secs_f64());

    fs::create_dir_all(&args.output_dir).await?;
    let output_file = args.output_dir.join(OUTPUT_FILE);
    fs::write(&output_file, &text)
        .await
        .wrap_err_with(|| format!("cannot write {}", output_file.display()))?;
    info!("***output has been saved to {}***", output_file.display());
    info!("***finished***");

    Ok(())
}
