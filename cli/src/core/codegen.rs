//! # ScreenFlow Definitions Codegen
//!
//! File: cli/src/core/codegen.rs
//!
//! ## Overview
//!
//! This module re-exports the extracted screens map as a typed TypeScript
//! module for the bot code to import: the balanced block is embedded verbatim
//! under a stable constant name, followed by a key-enumeration type derived
//! from it. Because the block is embedded unchanged, re-parsing the generated
//! module with the same field parser yields exactly the records parsed from
//! the original source — the diagram pipeline relies on that round trip.
//!
use tracing::debug;

/// Anchor preceding the re-exported map in the generated module. The diagram
/// pipeline scans for this when it re-reads the definitions file.
pub const DEFINITIONS_ANCHOR: &str = "export const BOT_SCREENS =";

/// # Render the Definitions Module (`definitions_source`)
///
/// Produces the full text of the generated screen-definitions module.
///
/// ## Arguments
///
/// * `block` - The balanced screens block, embedded verbatim.
/// * `source` - Display name of the file the block was extracted from,
///   recorded in the header comment.
///
/// ## Returns
///
/// * `String` - The module text, ready to write to disk.
pub fn definitions_source(block: &str, source: &str) -> String {
    debug!("Rendering definitions module ({} byte block)", block.len());
    format!(
        "/**\n * Telegram Bot Screen Definitions\n * Extracted from {}\n */\n\n{} {};\n\nexport type ScreenKey = keyof typeof BOT_SCREENS;\n",
        source, DEFINITIONS_ANCHOR, block
    )
}
