//! # ScreenFlow Mermaid Diagram Generator
//!
//! File: cli/src/core/mermaid.rs
//!
//! ## Overview
//!
//! This module renders the screen collection as a fenced Mermaid flowchart:
//! one node per screen, one labeled directed edge per navigation pair whose
//! target is a known screen key. Navigation pairs pointing at unknown keys are
//! silently omitted from the diagram — they still appear in the flow
//! document's navigation summary.
//!
//! ## Architecture
//!
//! One generator serves both pipelines; [`DiagramOptions`] carries the
//! constants that differ:
//! - `group_by_category`: the grouped variant emits nodes under sorted
//!   per-category comment headers; the plain variant emits nodes in source
//!   order followed by a blank separator line.
//! - `action_label_len` / `preview_max_len`: label truncation bounds.
//!
//! Node and edge declaration order is exactly the iteration order described
//! above. Mermaid lays the chart out from declaration order, and the
//! idempotence tests compare output byte-for-byte, so the order is contract,
//! not cosmetics.
//!
use crate::core::screens::{group_by_category, Screen, ScreenMap};
use tracing::debug;

/// Rendering constants that vary between the two pipelines.
#[derive(Debug, Clone, Copy)]
pub struct DiagramOptions {
    /// Group nodes under sorted per-category headers instead of source order.
    pub group_by_category: bool,
    /// Edge labels (action text) are cut to this many chars.
    pub action_label_len: usize,
    /// Preview length at which a node label gains an `...` suffix; must match
    /// the `preview_max_len` the collection was parsed with.
    pub preview_max_len: usize,
}

/// # Render the Flowchart (`flowchart`)
///
/// Produces the complete fenced ` ```mermaid ` block for the collection,
/// top-down orientation.
///
/// ## Arguments
///
/// * `screens` - The parsed screen collection.
/// * `opts` - Variant constants (grouping, truncation lengths).
///
/// ## Returns
///
/// * `String` - The diagram text, ready to embed in the flow document.
pub fn flowchart(screens: &ScreenMap, opts: &DiagramOptions) -> String {
    let mut lines = vec!["```mermaid".to_string(), "flowchart TD".to_string()];

    if opts.group_by_category {
        for (category, members) in group_by_category(screens, true) {
            lines.push(format!("\n    %% {} Screens", category));
            for (key, screen) in members {
                lines.push(node_line(key, screen, opts));
            }
        }
        lines.push("\n    %% Navigation Flows".to_string());
    } else {
        for (key, screen) in screens {
            lines.push(node_line(key, screen, opts));
        }
        lines.push(String::new());
    }

    let mut edges = 0usize;
    for (key, screen) in screens {
        for nav in &screen.navigation {
            // Dangling reference: no node to point at, silently omitted.
            if !screens.contains_key(&nav.to) {
                continue;
            }
            let action: String = nav
                .action
                .chars()
                .take(opts.action_label_len)
                .collect::<String>()
                .replace('"', "'");
            lines.push(format!("    {} -->|\"{}\"| {}", key, action, nav.to));
            edges += 1;
        }
    }
    debug!("Rendered {} nodes, {} edges", screens.len(), edges);

    lines.push("```".to_string());
    lines.join("\n")
}

/// Renders one node declaration. The label joins the display name and the
/// preview with a line break; an empty preview repeats the name instead. The
/// `...` suffix marks a preview that hit the truncation bound. Double quotes
/// would terminate the Mermaid label early, so they become single quotes.
fn node_line(key: &str, screen: &Screen, opts: &DiagramOptions) -> String {
    let preview = if screen.ui_preview.is_empty() {
        screen.name.as_str()
    } else {
        screen.ui_preview.as_str()
    };
    let ellipsis = if screen.ui_preview.chars().count() == opts.preview_max_len {
        "..."
    } else {
        ""
    };
    let label = format!("{}<br/>{}{}", screen.name, preview, ellipsis).replace('"', "'");
    format!("    {}[\"{}\"]", key, label)
}
