/*
cargo run --bin reorganize -- \
    --input  data/subjects/english_questions_jamb_2010.json \
    --output data/subjects/english_questions_jamb_2010_organized.json
*/

use std::fs::{create_dir_all, File};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::{info, warn};
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use qprep::{group_questions, load_document, write_document, Document};

/// Group questions behind their passage or instruction and rewrite the file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input questions JSON (object with passages/instructions/questions)
    #[arg(short, long)]
    input: PathBuf,

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
        File::create(format!("logs/reorganize_{ts}.log"))?,
    )?;
    info!(
        "reorganize {} -> {}",
        args.input.display(),
        args.output.display()
    );

    let doc = load_document(&args.input)?;
    info!(
        "loaded {} passages, {} instructions, {} questions",
        doc.passages.len(),
        doc.instructions.len(),
        doc.questions.len()
    );

    let grouped = group_questions(&doc);
    for (id, key) in &grouped.unresolved {
        warn!("question {id}: group key '{key}' matches no passage or instruction - excluded");
    }
    if grouped.dropped_keyless > 0 {
        warn!(
            "{} question(s) without a group key dropped",
            grouped.dropped_keyless
        );
    }

    let organized = Document {
        passages: doc.passages,
        instructions: doc.instructions,
        questions: grouped.questions,
        extra: doc.extra,
    };
    write_document(&args.output, &organized)?;
    info!("wrote {} questions", organized.questions.len());

    println!(
        "Questions have been reorganized and saved to {}",
        args.output.display()
    );
    println!("Total passages: {}", organized.passages.len());
    println!("Total instructions: {}", organized.instructions.len());
    println!("Total questions: {}", organized.questions.len());
    println!("\nGroup order and question counts:");
    for (key, count) in &grouped.group_counts {
        println!("  {key}: {count} questions");
    }
    Ok(())
}
