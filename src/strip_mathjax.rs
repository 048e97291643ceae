/*
cargo run --bin strip_mathjax -- \
    --input  data/mathematics_questions_fixed.json \
    --output data/mathematics_questions_final.json
*/

use std::fs::{create_dir_all, File};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use qprep::{load_document, normalize_question, write_document};

/// Convert MathJax markup in question, option and explanation text to plain
/// Unicode.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input questions JSON
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
        File::create(format!("logs/strip_mathjax_{ts}.log"))?,
    )?;
    info!(
        "strip_mathjax {} -> {}",
        args.input.display(),
        args.output.display()
    );

    let mut doc = load_document(&args.input)?;
    info!("loaded {} questions", doc.questions.len());

    let bar = ProgressBar::new(doc.questions.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{spinner:.green} {pos}/{len} {wide_bar:.cyan/blue} {elapsed_precise}",
    )?);

    let mut changed_fields = 0usize;
    for q in &mut doc.questions {
        changed_fields += normalize_question(q);
        bar.inc(1);
    }
    bar.finish();
    info!("{changed_fields} field(s) rewritten");

    write_document(&args.output, &doc)?;

    println!(
        "Processing complete. Output saved to {}",
        args.output.display()
    );
    println!(
        "{} question(s) scanned, {} field(s) rewritten",
        doc.questions.len(),
        changed_fields
    );
    Ok(())
}
