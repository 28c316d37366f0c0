//! domsnap CLI
//!
//! Reads a JSON-serialized styled-element tree and writes the rendered
//! snapshot as a PNG file (or prints it as a data URI).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use domsnap_render::snapshot;
use domsnap_style::StyledElement;

/// Render a styled-element tree to a raster snapshot.
#[derive(Parser)]
#[command(name = "domsnap", version, about)]
struct Args {
    /// Path to a JSON-serialized styled-element tree.
    input: PathBuf,

    /// Output PNG path.
    #[arg(short, long, default_value = "snapshot.png")]
    output: PathBuf,

    /// Print the snapshot as a data:image/png;base64 URI instead of
    /// writing a file.
    #[arg(long)]
    data_uri: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read '{}'", args.input.display()))?;
    let root: StyledElement = serde_json::from_str(&json)
        .with_context(|| format!("'{}' is not a styled-element tree", args.input.display()))?;

    let shot = snapshot(&root)?;

    if args.data_uri {
        println!("{}", shot.data_uri());
    } else {
        shot.write_to(&args.output)?;
        eprintln!(
            "wrote {}x{} snapshot to '{}'",
            shot.width(),
            shot.height(),
            args.output.display()
        );
    }

    Ok(())
}
