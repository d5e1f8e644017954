//! # ScreenFlow Block Scanner
//!
//! File: cli/src/core/scanner.rs
//!
//! ## Overview
//!
//! This module locates the screens map inside a free-form source file and
//! isolates each screen entry's text block. The source is a known convention,
//! not a machine-readable grammar, so the scanner is deliberately a textual
//! approximation: a balanced-delimiter scan plus a per-line entry pattern,
//! never a tokenizer.
//!
//! ## Architecture
//!
//! Two operations, shared by both generation pipelines:
//! - `balanced_block`: find an anchor string, then scan forward from the first
//!   opening brace after it, tracking nesting depth until it returns to zero.
//! - `entry_blocks`: within an isolated map block, recognize entry start lines
//!   (fixed indentation, identifier, colon, opening brace) and run the same
//!   depth count per entry, accumulating whole lines.
//!
//! Braces inside string or text-art literals are counted like structural ones.
//! That is an accepted fragility of the format this tool consumes; inputs whose
//! literal content carries unbalanced braces will terminate a scan early or
//! late. Callers must not paper over this with a real parser — the tolerance
//! for malformed input is part of the documented behavior.
//!
//! ## Examples
//!
//! ```rust
//! let block = scanner::balanced_block(&content, "const screens =")?;
//! for (key, entry) in scanner::entry_blocks(block, &patterns.entry) {
//!     // entry holds everything from the `key: {` line to its closing brace
//! }
//! ```
//!
use crate::core::error::{Result, ScreenflowError};
use anyhow::anyhow;
use regex::Regex;
use tracing::{debug, trace};

/// # Locate a Balanced Brace Block (`balanced_block`)
///
/// Finds the first occurrence of `anchor` in `content` and returns the
/// balanced `{...}` block that follows it: the substring from the first `{`
/// at or after the end of the anchor through its matching `}`, inclusive.
///
/// The scan maintains a signed depth counter, incremented on every `{` and
/// decremented on every `}`; the block ends at the character where the counter
/// returns to zero. Linear in the input length, constant auxiliary state.
///
/// ## Arguments
///
/// * `content` - The full source text to scan.
/// * `anchor` - A literal marker expected to precede the block (e.g., `const screens =`).
///
/// ## Returns
///
/// * `Result<&str>` - The balanced block, borrowed from `content`.
///
/// ## Errors
///
/// Returns `ScreenflowError::StructureNotFound` when the anchor is absent,
/// when no opening brace follows it, or when the input ends before the depth
/// counter returns to zero. Nothing is written by any pipeline before this
/// function has succeeded.
pub fn balanced_block<'a>(content: &'a str, anchor: &str) -> Result<&'a str> {
    let anchor_idx = content.find(anchor).ok_or_else(|| {
        anyhow!(ScreenflowError::StructureNotFound(format!(
            "anchor '{}' not present in source",
            anchor
        )))
    })?;
    let after_anchor = anchor_idx + anchor.len();
    let open_offset = content[after_anchor..].find('{').ok_or_else(|| {
        anyhow!(ScreenflowError::StructureNotFound(format!(
            "no opening brace after anchor '{}'",
            anchor
        )))
    })?;
    let start = after_anchor + open_offset;
    debug!("Anchor '{}' found; block starts at byte {}", anchor, start);

    let mut depth: i32 = 0;
    for (offset, ch) in content[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let block = &content[start..start + offset + 1];
                    trace!("Block closed after {} bytes", block.len());
                    return Ok(block);
                }
            }
            _ => {}
        }
    }
    Err(anyhow!(ScreenflowError::StructureNotFound(format!(
        "no matching close brace for block after anchor '{}'",
        anchor
    ))))
}

/// # Split a Map Block into Entries (`entry_blocks`)
///
/// Walks the lines of an isolated map block and collects one text block per
/// screen entry. An entry starts at a line matching `entry_line` (four spaces
/// of indentation, an identifier, a colon, an opening brace); from there the
/// nested scan starts at depth 1 and accumulates whole lines, counting braces
/// character by character, until the line on which the depth reaches zero.
/// That closing line is included in the entry. Lines that don't match the
/// entry pattern are passed over without action.
///
/// ## Arguments
///
/// * `block` - The balanced map block returned by [`balanced_block`].
/// * `entry_line` - The compiled entry start pattern (see `screens::Patterns`).
///
/// ## Returns
///
/// * `Vec<(String, String)>` - `(key, entry text)` pairs in source order.
///   Duplicate keys are returned as-is; the caller's keyed collection decides
///   overwrite semantics.
pub fn entry_blocks(block: &str, entry_line: &Regex) -> Vec<(String, String)> {
    let lines: Vec<&str> = block.split('\n').collect();
    let mut entries = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let captures = match entry_line.captures(lines[i]) {
            Some(c) => c,
            None => {
                i += 1;
                continue;
            }
        };
        let key = captures[1].to_string();
        trace!("Entry '{}' starts at line {}", key, i);

        // The entry's opening brace is on the start line, so the nested scan
        // begins at depth 1 and only examines the lines that follow.
        let mut depth: i32 = 1;
        let mut entry_lines = vec![lines[i]];
        i += 1;
        while i < lines.len() && depth > 0 {
            let line = lines[i];
            entry_lines.push(line);
            for ch in line.chars() {
                match ch {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
            }
            i += 1;
        }
        entries.push((key, entry_lines.join("\n")));
    }

    debug!("Found {} entries in block", entries.len());
    entries
}
