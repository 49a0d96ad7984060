//! Extract page text from a JSON span dump.
//!
//! Reads `{"pages": [{"width": .., "spans": [{"text": .., "x": .., "y": ..}]}]}`
//! and prints one `{"page_number", "content"}` record per page as JSON.
//!
//! Usage:
//!   cargo run --release --bin extract_layout_text -- dump.json
//!   cargo run --release --bin extract_layout_text -- dump.json --config thresholds.json --metrics
//!   cargo run --release --bin extract_layout_text -- dump.json --skip-empty --embedding
//!
//! Set `RUST_LOG=debug` to see the layout chosen for each page.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use pdf_layout_text::{InMemoryDocument, LayoutConfig, LayoutExtractor, Page, non_empty_pages};

struct CliOptions {
    input: PathBuf,
    config: Option<PathBuf>,
    metrics: bool,
    skip_empty: bool,
    embedding: bool,
}

impl CliOptions {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut input = None;
        let mut config = None;
        let mut metrics = false;
        let mut skip_empty = false;
        let mut embedding = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" => {
                    i += 1;
                    match args.get(i) {
                        Some(path) => config = Some(PathBuf::from(path)),
                        None => usage_and_exit("--config needs a path"),
                    }
                },
                "--metrics" => metrics = true,
                "--skip-empty" => skip_empty = true,
                "--embedding" => embedding = true,
                "--help" | "-h" => usage_and_exit(""),
                other if input.is_none() && !other.starts_with('-') => {
                    input = Some(PathBuf::from(other));
                },
                other => usage_and_exit(&format!("unexpected argument: {}", other)),
            }
            i += 1;
        }

        let Some(input) = input else {
            usage_and_exit("missing span dump path")
        };

        Self {
            input,
            config,
            metrics,
            skip_empty,
            embedding,
        }
    }
}

fn usage_and_exit(message: &str) -> ! {
    if !message.is_empty() {
        eprintln!("error: {}", message);
    }
    eprintln!(
        "usage: extract_layout_text <dump.json> [--config thresholds.json] [--metrics] [--skip-empty] [--embedding]"
    );
    process::exit(2);
}

fn main() -> pdf_layout_text::Result<()> {
    env_logger::init();
    let options = CliOptions::from_args();

    let config = match &options.config {
        Some(path) => LayoutConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => LayoutConfig::default(),
    };
    let extractor = LayoutExtractor::with_config(config)?;

    let document = InMemoryDocument::from_reader(BufReader::new(File::open(&options.input)?))?;
    let (pages, metrics) = extractor.extract_document_with_metrics(&document)?;

    let selected: Vec<Page> = if options.skip_empty {
        non_empty_pages(&pages).cloned().collect()
    } else {
        pages
    };
    let selected: Vec<Page> = if options.embedding {
        selected
            .into_iter()
            .map(|page| {
                let text = page.embedding_text();
                Page::new(page.page_number, text)
            })
            .collect()
    } else {
        selected
    };

    println!("{}", serde_json::to_string_pretty(&selected)?);
    if options.metrics {
        eprintln!("{}", serde_json::to_string_pretty(&metrics)?);
    }

    Ok(())
}
