use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use myanmar_rs::{FragmenterConfig, MyanmarTextFragmenter, TextFragment};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file, one text per line
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (JSONL) - optional, skip to benchmark only
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Limit number of lines to process
    #[arg(short, long)]
    limit: Option<usize>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra measure words, one per line
    #[arg(short, long)]
    measure_words: Option<PathBuf>,
}

#[derive(Serialize)]
struct Record<'a> {
    id: usize,
    input: &'a str,
    fragments: Vec<TextFragment>,
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FragmenterConfig::from_json_file(path)?,
        None => FragmenterConfig::default(),
    };
    if args.measure_words.is_some() {
        config.measure_words_path = args.measure_words.clone();
    }

    let start_load = Instant::now();
    let fragmenter = MyanmarTextFragmenter::new(&config)?;
    info!(?config, elapsed = ?start_load.elapsed(), "fragmenter ready");

    info!(input = %args.input.display(), "reading source");
    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let reader = BufReader::new(file);
    let mut lines: Vec<String> = reader
        .lines()
        .collect::<Result<Vec<String>, _>>()?
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    if let Some(limit) = args.limit {
        lines.truncate(limit);
    }

    info!(lines = lines.len(), "processing");
    let start_process = Instant::now();

    let results: Vec<String> = lines
        .par_iter()
        .enumerate()
        .map(|(id, line)| {
            let record = Record { id, input: line, fragments: fragmenter.fragment(line) };
            serde_json::to_string(&record)
        })
        .collect::<Result<_, _>>()?;

    if let Some(ref output_path) = args.output {
        let output_file = File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        let mut writer = BufWriter::with_capacity(262144, output_file);
        for result in &results {
            writeln!(writer, "{}", result)?;
        }
        writer.flush()?;
        info!(output = %output_path.display(), "saved");
    }

    let duration = start_process.elapsed();
    info!(
        seconds = duration.as_secs_f32(),
        lines_per_sec = lines.len() as f32 / duration.as_secs_f32(),
        "done"
    );

    Ok(())
}
