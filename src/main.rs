//! tracer - capture error blocks from log streams and browse them
//!
//! This is the binary entry point. All logic lives in the libraries.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::eyre;
use tracer::ingest::{run_ingest, signals, EchoStyle};
use tracer_app::config::{load_settings, Filters, Settings, DEFAULT_CONFIG};
use tracer_core::prelude::*;
use tracer_core::Segmenter;
use tracer_store::Store;

/// tracer - capture error blocks from log streams and browse them
#[derive(Parser, Debug)]
#[command(name = "tracer", version)]
#[command(
    about = "Capture error blocks from a log stream, or browse captured blocks",
    long_about = "Pipe a log into tracer to echo it and store every error block it \
                  contains. Run it from a terminal to browse the stored blocks."
)]
struct Args {
    /// SQLite file holding captured blocks
    #[arg(value_name = "STORE", required_unless_present = "print_config")]
    store: Option<PathBuf>,

    /// Configuration file (default: ~/.tracer.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.print_config {
        print!("{}", DEFAULT_CONFIG);
        return Ok(());
    }

    tracer_core::logging::init()?;

    let settings = load_settings(args.config.as_deref())?;
    let filters = settings.compile_filters()?;
    info!(
        "Compiled {} exclude and {} highlight patterns",
        filters.exclude.len(),
        filters.highlight.len()
    );

    let store_path = args
        .store
        .ok_or_else(|| eyre!("a STORE path is required"))?;

    if std::io::stdin().is_terminal() {
        info!("Mode: browse {}", store_path.display());
        browse(&store_path, settings, filters)?;
    } else {
        info!("Mode: ingest into {}", store_path.display());
        ingest(&store_path, &settings, filters)?;
    }
    Ok(())
}

fn browse(store_path: &Path, settings: Settings, filters: Filters) -> Result<()> {
    let store = Store::open(store_path)?;
    info!("{} blocks in store", store.count()?);
    if let Some(newest) = store.list_recent(1)?.pop() {
        let block = store.get(newest.id)?;
        info!(
            "Newest block {} captured {} ({} lines)",
            block.id,
            block.timestamp,
            block.body.lines().count()
        );
    }
    tracer_tui::run_browser(&store, settings, filters.highlight)
}

/// The runtime is released with `shutdown_background`: a stdin read parked
/// on the blocking pool must not keep the process alive after an interrupt.
fn ingest(store_path: &Path, settings: &Settings, filters: Filters) -> Result<()> {
    let mut store = Store::open(store_path)?;
    let runtime = tokio::runtime::Runtime::new()?;

    let result = runtime.block_on(async {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        run_ingest(
            stdin,
            stdout,
            &mut store,
            Segmenter::new(filters.exclude),
            &EchoStyle::from_settings(&settings.general),
            signals::shutdown_signal(),
        )
        .await
    });

    runtime.shutdown_background();
    let summary = result?;
    if summary.interrupted {
        info!("Exiting after interrupt");
    }
    Ok(())
}
