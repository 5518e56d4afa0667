//! CLI tool that prints the slide text and speaker notes of a PowerPoint
//! file as a Markdown report.

use anyhow::{Context, Result};
use clap::Parser;
use slidenotes_core::render_outcome;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File read when no input is given.
const DEFAULT_INPUT: &str = "japanese_longevity_exercise.pptx";

/// Print slide content and speaker notes of a .pptx file as Markdown.
#[derive(Parser, Debug)]
#[command(name = "pptx-notes")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input PowerPoint file (.pptx)
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let output = process_file(&args.input);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output).context("Failed to write report to stdout")?;

    Ok(())
}

/// Extract one file into printable text. Extraction failures become the
/// one-line error message rather than a process failure.
fn process_file(input_path: &Path) -> String {
    log::debug!("Processing: {}", input_path.display());

    let result = slidenotes_pptx::extract_report(input_path);
    if let Err(e) = &result {
        log::debug!("Extraction failed for {}: {:?}", input_path.display(), e);
    }

    render_outcome(result)
}
