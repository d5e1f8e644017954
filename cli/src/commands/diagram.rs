//! # ScreenFlow Diagram Command
//!
//! File: cli/src/commands/diagram.rs
//!
//! ## Overview
//!
//! This module implements `screenflow diagram`, which regenerates the flow
//! document from the screen-definitions module that `extract` produced. It
//! reuses the same scanner, parser, and generators with the grouped variant
//! constants: nodes are grouped under sorted per-category headers, the
//! overview gains a total link count, the navigation summary covers ten
//! screens, and a usage section shows how to import the definitions.
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load configuration and resolve the definitions and document paths
//! 2. Read the definitions module and isolate the re-exported screens block
//!    (anchored at the generated `export const` declaration)
//! 3. Parse the block into the ordered screen collection
//! 4. Render the grouped diagram and extended flow document, and write it
//!
//! Reading back our own generated module instead of the original source is
//! what makes this command independent of the journey-map checkout: the
//! definitions module is committed alongside the bot code.
//!
//! ## Examples
//!
//! Usage:
//!
//! ```bash
//! # Paths from .screenflow.toml
//! screenflow diagram
//!
//! # Explicit paths
//! screenflow diagram --definitions src/bot/screen-definitions.ts \
//!     --output docs/SCREEN_FLOW.md
//! ```
//!
use crate::common::fs::io;
use crate::core::codegen::DEFINITIONS_ANCHOR;
use crate::core::error::Result;
use crate::core::screens::{ParseOptions, Patterns};
use crate::core::{config, mermaid, report, scanner, screens};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Variant constants for the grouped pipeline.
const PARSE_OPTS: ParseOptions = ParseOptions {
    preview_min_len: 2,
    preview_max_len: 25,
    preview_scan_window: 20,
};
const DIAGRAM_OPTS: mermaid::DiagramOptions = mermaid::DiagramOptions {
    group_by_category: true,
    action_label_len: 18,
    preview_max_len: PARSE_OPTS.preview_max_len,
};
const REPORT_OPTS: report::ReportOptions = report::ReportOptions {
    sample_size: 10,
    include_link_total: true,
    include_usage: true,
    sort_categories: true,
};

/// # Diagram Command Arguments (`DiagramArgs`)
///
/// Path flags override the corresponding `[paths]` entries of the
/// configuration file; a path defined in neither place is a configuration
/// error.
#[derive(Parser, Debug)]
pub struct DiagramArgs {
    /// Screen-definitions module to read (overrides `paths.screen_definitions`).
    #[arg(long, value_name = "FILE")]
    definitions: Option<PathBuf>,
    /// Output path for the generated Markdown flow document (overrides `paths.flow_doc`).
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// # Handle Diagram Command (`handle_diagram`)
///
/// Runs the definitions-to-document pipeline in one sequential pass.
///
/// ## Arguments
///
/// * `args`: The parsed `DiagramArgs` struct with optional path overrides.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` when the flow document was written. An `Err`
///   from configuration, file I/O, or structure extraction aborts the run
///   before anything is written.
pub async fn handle_diagram(args: DiagramArgs) -> Result<()> {
    info!("Handling diagram command...");

    let cfg = config::load_config().context("Failed to load ScreenFlow configuration")?;
    let definitions = config::resolve_path(
        args.definitions,
        &cfg.paths.screen_definitions,
        "--definitions",
        "screen_definitions",
    )?;
    let output = config::resolve_path(args.output, &cfg.paths.flow_doc, "--output", "flow_doc")?;

    println!("Reading screen definitions from '{}'...", definitions.display());
    let content = io::read_file_to_string(&definitions)?;

    let block = scanner::balanced_block(&content, DEFINITIONS_ANCHOR)?;
    let patterns = Patterns::new()?;

    let collection = screens::parse_screens(block, &patterns, &PARSE_OPTS);
    println!("Found {} screens.", collection.len());

    let diagram = mermaid::flowchart(&collection, &DIAGRAM_OPTS);
    let doc = report::flow_doc(&collection, &diagram, &REPORT_OPTS)?;
    io::write_string_to_file(&output, &doc)?;
    println!("Wrote flow document to '{}'", output.display());

    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_diagram_without_flags() {
        let args = DiagramArgs::try_parse_from(["diagram"]).unwrap();
        assert!(args.definitions.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_parses_diagram_with_paths() {
        let args = DiagramArgs::try_parse_from([
            "diagram",
            "--definitions",
            "defs.ts",
            "--output",
            "flow.md",
        ])
        .unwrap();
        assert_eq!(args.definitions.unwrap(), PathBuf::from("defs.ts"));
        assert_eq!(args.output.unwrap(), PathBuf::from("flow.md"));
    }

    /// The diagram command reads only the definitions module; there is no --source.
    #[test]
    fn test_rejects_source_flag() {
        assert!(DiagramArgs::try_parse_from(["diagram", "--source", "map.jsx"]).is_err());
    }
}
