//! Easel - a console drawing pipeline.
//!
//! Renders a drawing document (ordered groups of rect/circle primitives) as
//! a human-readable report on stdout. Diagnostics go to stderr through the
//! log, so the report stream stays clean.

mod demo;
mod logger;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use canvas::{render_drawing, Canvas};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use scene::{normalize, Drawing, RawDrawing};

/// Render drawing documents as console reports
#[derive(Parser)]
#[command(name = "easel")]
#[command(about = "Render drawing documents as console reports")]
struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in demo drawing
    Demo,

    /// Render a drawing document
    Render {
        /// Path to a JSON drawing document
        file: PathBuf,
    },

    /// Validate a drawing document without rendering it
    Check {
        /// Path to a JSON drawing document
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::init(level)?;

    match cli.command {
        Commands::Demo => render(&demo::drawing()),
        Commands::Render { file } => render(&load_drawing(&file)?),
        Commands::Check { file } => check(&file),
    }
}

fn render(drawing: &Drawing) -> Result<()> {
    let stdout = io::stdout();
    let mut canvas = Canvas::new(stdout.lock());
    render_drawing(drawing, &mut canvas)?;
    Ok(())
}

fn load_raw(file: &Path) -> Result<RawDrawing> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a drawing document", file.display()))
}

fn load_drawing(file: &Path) -> Result<Drawing> {
    let raw = load_raw(file)?;
    normalize(&raw).with_context(|| format!("{} failed validation", file.display()))
}

fn check(file: &Path) -> Result<()> {
    let raw = load_raw(file)?;
    let submitted: usize = raw.0.iter().map(|group| group.0.len()).sum();

    let drawing = normalize(&raw).with_context(|| format!("{} failed validation", file.display()))?;
    let kept = drawing.element_count();

    println!(
        "{}: {} groups, {} elements ({} skipped)",
        file.display(),
        drawing.groups.len(),
        kept,
        submitted - kept
    );
    Ok(())
}
