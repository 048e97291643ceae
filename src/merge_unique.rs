/*
cargo run --bin merge_unique -- \
    --incoming data/mathematics_questions_new.json \
    --existing data/mathematics_questions.json \
    --output   data/mathematics_questions_final.json
*/

use std::fs::{create_dir_all, File};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use qprep::{load_document, merge_unique, write_document, Document};

/// Merge two question files, keeping the first occurrence of each question
/// text and renumbering ids from 1. The incoming file is scanned first, so
/// its copy of a duplicate wins.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// New questions file (takes precedence on duplicates)
    #[arg(long)]
    incoming: PathBuf,

    /// Existing questions file
    #[arg(long)]
    existing: PathBuf,

    /// Output file (created / overwritten)
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // logging setup
    create_dir_all("logs")?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(format!("logs/merge_unique_{ts}.log"))?,
    )?;

    let incoming = load_document(&args.incoming)?;
    info!(
        "loaded {} questions from {}",
        incoming.questions.len(),
        args.incoming.display()
    );
    let existing = load_document(&args.existing)?;
    info!(
        "loaded {} questions from {}",
        existing.questions.len(),
        args.existing.display()
    );

    // passages/instructions and any extra top-level fields follow the
    // incoming file
    let Document {
        passages,
        instructions,
        questions: incoming_questions,
        extra,
    } = incoming;

    let outcome = merge_unique(incoming_questions, existing.questions);
    info!(
        "{} kept, {} duplicate(s) dropped",
        outcome.questions.len(),
        outcome.duplicates_dropped
    );

    let merged = Document {
        passages,
        instructions,
        questions: outcome.questions,
        extra,
    };
    write_document(&args.output, &merged)?;

    println!("Merged questions written to {}", args.output.display());
    println!(
        "{} question(s) kept, {} duplicate(s) dropped",
        merged.questions.len(),
        outcome.duplicates_dropped
    );
    Ok(())
}
