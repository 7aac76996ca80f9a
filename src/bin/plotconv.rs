/// Converts an action layer document to a feature list on stdout.
///
/// Usage:
///     cargo run --bin plotconv -- <path_to_json> [--parallel]
///
/// The run summary (including any skipped-entity log) goes to stderr so
/// the feature JSON on stdout stays pipeable.

use anyhow::{bail, Context, Result};
use plotconv::{convert_document, ConvertOptions, SymbolTable};
use std::env;
use std::fs;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("usage: plotconv <path_to_json> [--parallel]");
    }

    let path = &args[1];
    let options = ConvertOptions {
        parallel: args.iter().any(|a| a == "--parallel"),
        ..ConvertOptions::default()
    };

    let json = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let report = convert_document(&json, &options, SymbolTable::standard())
        .with_context(|| format!("converting {path}"))?;

    eprintln!("{}", report.summary());
    println!("{}", report.to_json()?);
    Ok(())
}
