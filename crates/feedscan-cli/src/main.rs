use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use feedscan::{render_outline, Document, Forecast};

#[derive(Debug, Parser)]
#[command(
    name = "feedscan",
    version,
    about = "Scan, validate and scrape RSS/XML weather feeds"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that every opening tag has a matching closing tag
    Validate {
        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Print the indented tag hierarchy
    Outline {
        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Print the value of the nth occurrence of a tag
    Get {
        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
        /// Tag name to look up (matched as the literal `<NAME>`)
        #[arg(short, long)]
        tag: String,
        /// 1-based occurrence to select
        #[arg(short, long, default_value_t = 1)]
        nth: usize,
    },
    /// Count occurrences of a tag
    Count {
        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
        /// Tag name to count
        #[arg(short, long)]
        tag: String,
    },
    /// Extract the 3-day weather forecast
    Forecast {
        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
        /// Emit the forecast as JSON instead of the text layout
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Validate { input } => {
            let document = read_document(&input)?;
            if let Err(error) = document.validate() {
                bail!("{error}");
            }
            println!("OK");
        }
        Command::Outline { input } => {
            let document = read_document(&input)?;
            let entries = document.outline()?;
            println!("{}", render_outline(&entries));
        }
        Command::Get { input, tag, nth } => {
            let document = read_document(&input)?;
            println!("{}", document.tag_value(&tag, nth));
        }
        Command::Count { input, tag } => {
            let document = read_document(&input)?;
            println!("{}", document.tag_count(&tag));
        }
        Command::Forecast { input, json } => {
            let document = read_document(&input)?;
            let forecast = Forecast::from_document(&document);
            if json {
                println!("{}", serde_json::to_string_pretty(&forecast)?);
            } else {
                print!("{forecast}");
            }
        }
    }
    Ok(())
}

fn read_document(path: &Option<PathBuf>) -> Result<Document> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            Document::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to read input file {}", path.display()))
        }
        None => Document::from_reader(io::stdin().lock()).context("failed to read stdin"),
    }
}
