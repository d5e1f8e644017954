//! # ScreenFlow Screen Records & Field Parser
//!
//! File: cli/src/core/screens.rs
//!
//! ## Overview
//!
//! This module defines the screen record model and the field parser that turns
//! one isolated entry block into a record. Field extractions are independent
//! pattern searches: a missing field never rejects the block, it resolves to a
//! documented fallback (title-cased key for the name, `Other` for the
//! category, empty navigation, empty preview). The parser never fails on an
//! entry.
//!
//! ## Architecture
//!
//! - `Patterns`: the field regexes, compiled once per run and reused.
//! - `ParseOptions`: the constants that differ between the two pipelines
//!   (preview length bounds); everything else is shared code.
//! - `Screen` / `NavLink` / `ScreenMap`: the immutable output of the single
//!   parse pass. The map preserves source order and is keyed by screen key;
//!   inserting a duplicate key overwrites the value in place (last write
//!   wins, original position kept).
//!
//! The navigation list regex is intentionally not balance-aware: it takes the
//! shortest span from `navigation: [` to the next `]` across lines, so nested
//! brackets inside the list would be cut short. Same fragility contract as the
//! block scanner.
//!
use crate::core::error::Result;
use crate::core::scanner;
use anyhow::Context;
use indexmap::IndexMap;
use regex::Regex;
use tracing::{debug, trace};

/// Category assigned to a screen whose entry block carries no `category` field.
pub const DEFAULT_CATEGORY: &str = "Other";

/// One navigation action on a screen, pointing at the key of the screen it
/// leads to. The target need not resolve to a known key; unresolvable pairs
/// are dropped at diagram render time, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub action: String,
    pub to: String,
}

/// One parsed screen record. Immutable after the parse pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Display name; title-cased key when the entry has no `name` field.
    pub name: String,
    /// Grouping label; [`DEFAULT_CATEGORY`] when absent.
    pub category: String,
    /// Navigation pairs in source order. Order is significant for output.
    pub navigation: Vec<NavLink>,
    /// Short text pulled from the text-art preview; empty when none qualifies.
    pub ui_preview: String,
}

/// The screen collection: keyed by screen key, ordered by source position.
/// Re-inserting an existing key overwrites the value while keeping the
/// original position — the last definition of a key wins.
pub type ScreenMap = IndexMap<String, Screen>;

/// Constants that vary between the two generation pipelines.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// A candidate preview line must be at least this many chars long.
    pub preview_min_len: usize,
    /// Accepted previews are cut to this many chars.
    pub preview_max_len: usize,
    /// Only this many leading text-art lines are examined for a preview.
    pub preview_scan_window: usize,
}

/// Field patterns, compiled once per run.
///
/// `entry` is the screen-entry start line used by the block scanner; the rest
/// are the per-entry field searches. All patterns accept single or double
/// quoting where the source convention allows either.
pub struct Patterns {
    pub entry: Regex,
    category: Regex,
    name: Regex,
    navigation: Regex,
    nav_pair: Regex,
    telegram_ui: Regex,
}

impl Patterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            entry: Regex::new(r"^    (\w+):\s*\{").context("invalid entry pattern")?,
            category: Regex::new(r#"category:\s*['"]([^'"]+)['"]"#)
                .context("invalid category pattern")?,
            name: Regex::new(r#"name:\s*['"]([^'"]+)['"]"#).context("invalid name pattern")?,
            navigation: Regex::new(r"(?s)navigation:\s*\[(.*?)\]")
                .context("invalid navigation pattern")?,
            nav_pair: Regex::new(r#"\{\s*action:\s*['"]([^'"]+)['"],\s*to:\s*['"]([^'"]+)['"]"#)
                .context("invalid navigation pair pattern")?,
            telegram_ui: Regex::new(r"(?s)telegram_ui:\s*`([^`]+)`")
                .context("invalid telegram_ui pattern")?,
        })
    }
}

/// # Parse One Entry Block (`parse_screen`)
///
/// Extracts the four screen fields from an isolated entry block. Each field is
/// an independent search; absence resolves to the fallback documented on
/// [`Screen`]. First match wins when a field pattern repeats in the block.
pub fn parse_screen(key: &str, block: &str, patterns: &Patterns, opts: &ParseOptions) -> Screen {
    let category = patterns
        .category
        .captures(block)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let name = patterns
        .name
        .captures(block)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| title_case_key(key));

    let navigation: Vec<NavLink> = patterns
        .navigation
        .captures(block)
        .map(|c| {
            patterns
                .nav_pair
                .captures_iter(&c[1])
                .map(|pair| NavLink {
                    action: pair[1].to_string(),
                    to: pair[2].to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    let ui_preview = patterns
        .telegram_ui
        .captures(block)
        .map(|c| preview_from_art(&c[1], opts))
        .unwrap_or_default();

    trace!("Parsed screen '{}' ({} nav pairs)", key, navigation.len());
    Screen {
        name,
        category,
        navigation,
        ui_preview,
    }
}

/// # Parse a Whole Map Block (`parse_screens`)
///
/// Runs the block scanner over the balanced map block and parses every entry,
/// building the ordered screen collection in a single pass. Duplicate keys
/// overwrite in place.
pub fn parse_screens(block: &str, patterns: &Patterns, opts: &ParseOptions) -> ScreenMap {
    let mut screens = ScreenMap::new();
    for (key, entry) in scanner::entry_blocks(block, &patterns.entry) {
        let screen = parse_screen(&key, &entry, patterns, opts);
        screens.insert(key, screen);
    }
    debug!("Parsed {} screens", screens.len());
    screens
}

/// Groups the collection by category for rendering. Categories appear in
/// first-seen order (or sorted alphabetically when `sorted` is set); screens
/// keep insertion order within their category.
pub fn group_by_category<'a>(
    screens: &'a ScreenMap,
    sorted: bool,
) -> Vec<(&'a str, Vec<(&'a str, &'a Screen)>)> {
    let mut categories: IndexMap<&str, Vec<(&str, &Screen)>> = IndexMap::new();
    for (key, screen) in screens {
        categories
            .entry(screen.category.as_str())
            .or_default()
            .push((key.as_str(), screen));
    }
    let mut grouped: Vec<_> = categories.into_iter().collect();
    if sorted {
        grouped.sort_by(|a, b| a.0.cmp(b.0));
    }
    grouped
}

/// Derives a display name from a screen key: underscores become spaces and
/// each word is capitalized with the remainder lowercased.
fn title_case_key(key: &str) -> String {
    key.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pulls the preview string out of a text-art template body.
///
/// The template encodes line breaks as the literal two-character sequence
/// `\n`, so that is the split delimiter — not a real newline. The first line
/// inside the scan window that contains a box-drawing vertical bar is
/// stripped of frame characters and trimmed; it qualifies if it is non-empty,
/// does not start with a heavy horizontal bar, and meets the minimum length.
/// Qualifying text is cut to the maximum length. No qualifying line means an
/// empty preview.
fn preview_from_art(art: &str, opts: &ParseOptions) -> String {
    for line in art.split("\\n").take(opts.preview_scan_window) {
        if !line.contains('│') {
            continue;
        }
        let stripped: String = line
            .chars()
            .filter(|c| !matches!(c, '│' | '┌' | '└' | '─' | '┐' | '┘'))
            .collect();
        let clean = stripped.trim();
        if !clean.is_empty()
            && !clean.starts_with('━')
            && clean.chars().count() >= opts.preview_min_len
        {
            return clean.chars().take(opts.preview_max_len).collect();
        }
    }
    String::new()
}
