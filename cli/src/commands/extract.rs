//! # ScreenFlow Extract Command
//!
//! File: cli/src/commands/extract.rs
//!
//! ## Overview
//!
//! This module implements `screenflow extract`, the full pipeline from the
//! journey-map source file. It handles:
//! - Locating the screens map in the source via the balanced-brace scanner
//! - Regenerating the typed screen-definitions module from the raw block
//! - Parsing every screen entry into a record
//! - Rendering the Mermaid diagram and the Markdown flow document
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load configuration and resolve the three pipeline paths (CLI flags win)
//! 2. Read the journey-map source and isolate the screens block — the only
//!    fatal extraction step; nothing is written before it succeeds
//! 3. Write the definitions module (the block re-exported verbatim)
//! 4. Parse the block into the ordered screen collection
//! 5. Render the diagram and flow document, and write the document
//!
//! This pipeline renders the plain document variant: nodes in source order,
//! previews up to 30 chars, action labels up to 20, a five-screen navigation
//! summary, no extended overview sections.
//!
//! ## Examples
//!
//! Usage:
//!
//! ```bash
//! # Paths from .screenflow.toml
//! screenflow extract
//!
//! # Explicit paths
//! screenflow extract --source src/JourneyMap.jsx \
//!     --definitions src/bot/screen-definitions.ts \
//!     --output docs/SCREEN_FLOW.md
//! ```
//!
use crate::common::fs::io;
use crate::core::error::Result;
use crate::core::screens::{ParseOptions, Patterns};
use crate::core::{codegen, config, mermaid, report, scanner, screens};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Marker preceding the screens map in the journey-map source.
const SCREENS_ANCHOR: &str = "const screens =";

/// Variant constants for the plain pipeline.
const PARSE_OPTS: ParseOptions = ParseOptions {
    preview_min_len: 3,
    preview_max_len: 30,
    preview_scan_window: 20,
};
const DIAGRAM_OPTS: mermaid::DiagramOptions = mermaid::DiagramOptions {
    group_by_category: false,
    action_label_len: 20,
    preview_max_len: PARSE_OPTS.preview_max_len,
};
const REPORT_OPTS: report::ReportOptions = report::ReportOptions {
    sample_size: 5,
    include_link_total: false,
    include_usage: false,
    sort_categories: false,
};

/// # Extract Command Arguments (`ExtractArgs`)
///
/// Path flags override the corresponding `[paths]` entries of the
/// configuration file; a path defined in neither place is a configuration
/// error.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Journey-map source file containing the screens map (overrides `paths.journey_map`).
    #[arg(long, value_name = "FILE")]
    source: Option<PathBuf>,
    /// Output path for the generated screen-definitions module (overrides `paths.screen_definitions`).
    #[arg(long, value_name = "FILE")]
    definitions: Option<PathBuf>,
    /// Output path for the generated Markdown flow document (overrides `paths.flow_doc`).
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// # Handle Extract Command (`handle_extract`)
///
/// Runs the full source-to-documents pipeline in one sequential pass.
///
/// ## Arguments
///
/// * `args`: The parsed `ExtractArgs` struct with optional path overrides.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` when both output files were written. An `Err`
///   from configuration, file I/O, or structure extraction aborts the run;
///   extraction failure happens before any write.
pub async fn handle_extract(args: ExtractArgs) -> Result<()> {
    info!("Handling extract command...");

    let cfg = config::load_config().context("Failed to load ScreenFlow configuration")?;
    let source = config::resolve_path(args.source, &cfg.paths.journey_map, "--source", "journey_map")?;
    let definitions = config::resolve_path(
        args.definitions,
        &cfg.paths.screen_definitions,
        "--definitions",
        "screen_definitions",
    )?;
    let output = config::resolve_path(args.output, &cfg.paths.flow_doc, "--output", "flow_doc")?;

    println!("Reading screen map from '{}'...", source.display());
    let content = io::read_file_to_string(&source)?;

    // Fatal when the map cannot be isolated; nothing has been written yet.
    let block = scanner::balanced_block(&content, SCREENS_ANCHOR)?;
    let patterns = Patterns::new()?;

    let source_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());
    io::write_string_to_file(&definitions, &codegen::definitions_source(block, &source_name))?;
    println!("Wrote screen definitions to '{}'", definitions.display());

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

    /// The path flags are all optional; configuration fills the gaps at runtime.
    #[test]
    fn test_parses_extract_without_flags() {
        let args = ExtractArgs::try_parse_from(["extract"]).unwrap();
        assert!(args.source.is_none());
        assert!(args.definitions.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_parses_extract_with_paths() {
        let args = ExtractArgs::try_parse_from([
            "extract",
            "--source",
            "map.jsx",
            "--definitions",
            "defs.ts",
            "--output",
            "flow.md",
        ])
        .unwrap();
        assert_eq!(args.source.unwrap(), PathBuf::from("map.jsx"));
        assert_eq!(args.definitions.unwrap(), PathBuf::from("defs.ts"));
        assert_eq!(args.output.unwrap(), PathBuf::from("flow.md"));
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(ExtractArgs::try_parse_from(["extract", "--bogus"]).is_err());
    }
}
