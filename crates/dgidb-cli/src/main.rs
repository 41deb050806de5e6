//! dgidb: DGIdb drug-gene interaction parser.
//! Streams normalised interaction documents as JSON lines.

mod config;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dgidb_ingestion::sources::BioThingsClient;
use dgidb_ingestion::{load_annotations_from, IdentifierLookup, NoLookup};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "dgidb",
    version,
    about = "Parse DGIdb interactions into subject/object/association documents"
)]
struct Cli {
    /// Config file (defaults to ./dgidb.toml when present)
    #[arg(short, long, env = "DGIDB_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the interactions table
    #[arg(value_name = "DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Write JSON lines here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip MyGene/MyChem lookups
    #[arg(long)]
    offline: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the documents
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dgidb=info,warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.input.data_dir = data_dir;
    }
    if cli.offline {
        config.lookup.enabled = false;
    }

    info!(
        "Parsing {} (lookups {})",
        config.input.data_dir.join(&config.input.file_name).display(),
        if config.lookup.enabled { "enabled" } else { "disabled" }
    );

    let lookup: Box<dyn IdentifierLookup> = if config.lookup.enabled {
        Box::new(BioThingsClient::with_endpoints(
            &config.lookup.mygene_url,
            &config.lookup.mychem_url,
            config.lookup.timeout(),
        )?)
    } else {
        Box::new(NoLookup)
    };

    let mut parser = load_annotations_from(
        &config.input.data_dir,
        &config.input.file_name,
        lookup,
        config.parser_options(),
    )
    .context("Could not open interactions table")?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Could not create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for doc in parser.by_ref() {
        let doc = doc?;
        serde_json::to_writer(&mut out, &doc)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    let stats = parser.stats();
    info!(
        "Done: {} rows, {} documents, {} discarded",
        stats.rows, stats.emitted, stats.discarded
    );
    Ok(())
}
