/*
cargo run --bin patch_diagrams -- \
    --input  data/mathematics_questions.json \
    --output data/mathematics_questions_diagrams_fixed.json \
    --fix chord-geometry --fix trig-sides
*/

use std::fs::{create_dir_all, File};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::{info, warn};
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use qprep::diagram::{lookup, DiagramFix, FIXES};
use qprep::{load_document, write_document, PipelineError};

/// Apply named SVG corrections to explanation fields.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input questions JSON
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (created / overwritten)
    #[arg(short, long)]
    output: PathBuf,

    /// Fix ids to attempt. May be given several times; defaults to every
    /// registered fix.
    #[arg(long = "fix")]
    fixes: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // logging setup
    create_dir_all("logs")?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(format!("logs/patch_diagrams_{ts}.log"))?,
    )?;

    // resolve requested fixes up front so an unknown id fails before any work
    let selected: Vec<&DiagramFix> = if args.fixes.is_empty() {
        FIXES.iter().collect()
    } else {
        args.fixes
            .iter()
            .map(|id| lookup(id))
            .collect::<Result<_, _>>()?
    };
    info!(
        "attempting fixes: {:?}",
        selected.iter().map(|f| f.id).collect::<Vec<_>>()
    );

    let mut doc = load_document(&args.input)?;
    info!("loaded {} questions", doc.questions.len());

    let mut patched = 0usize;
    let mut skipped = 0usize;
    for q in &mut doc.questions {
        let Some(text) = q.explanation.as_deref() else {
            continue;
        };
        let mut current = text.to_string();
        let mut touched = false;
        for fix in &selected {
            if !fix.is_candidate(&current) {
                continue;
            }
            match fix.apply(&current) {
                Ok(next) => {
                    current = next;
                    touched = true;
                    patched += 1;
                    info!("question {}: applied fix '{}'", q.id, fix.id);
                }
                Err(PipelineError::FixNotApplicable { .. }) => {
                    warn!(
                        "question {}: fix '{}' not applicable, explanation left unchanged",
                        q.id, fix.id
                    );
                    skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
        if touched {
            q.explanation = Some(current);
        }
    }

    write_document(&args.output, &doc)?;

    println!(
        "Diagram patching complete. Output saved to {}",
        args.output.display()
    );
    println!("{patched} fix application(s), {skipped} candidate(s) skipped");
    Ok(())
}
