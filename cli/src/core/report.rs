//! # ScreenFlow Flow Document Generator
//!
//! File: cli/src/core/report.rs
//!
//! ## Overview
//!
//! This module assembles the Markdown flow document: an overview of the
//! collection, the Mermaid diagram, a per-category listing of screens, and a
//! navigation summary for the first few screens. The document skeleton is a
//! Tera template rendered in one shot; the variable sections are computed
//! here and passed in through the template context.
//!
//! ## Architecture
//!
//! One generator serves both pipelines; [`ReportOptions`] carries the
//! constants that differ:
//! - `sample_size`: how many screens the navigation summary covers.
//! - `include_link_total`: the extended overview adds a total link count.
//! - `include_usage`: the extended document appends an import example for the
//!   generated definitions module.
//! - `sort_categories`: category sections sorted alphabetically instead of
//!   first-seen order.
//!
//! The footer timestamp is the only line allowed to differ between two runs
//! on unchanged input; everything above it renders deterministically from the
//! collection.
//!
use crate::core::error::{Result, ScreenflowError};
use crate::core::screens::{group_by_category, ScreenMap};
use anyhow::anyhow;
use tera::{Context, Tera};
use tracing::debug;

/// Report constants that vary between the two pipelines.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Number of screens covered by the navigation summary.
    pub sample_size: usize,
    /// Add the total navigation-link count to the overview.
    pub include_link_total: bool,
    /// Append the definitions-import usage section.
    pub include_usage: bool,
    /// Sort category sections alphabetically.
    pub sort_categories: bool,
}

/// Placeholder used in the navigation summary for screens with no outgoing pairs.
const NO_NAVIGATION: &str = "- No navigation defined";

/// The document skeleton. Section bodies are rendered in code and injected as
/// plain strings; the template only decides section presence and framing.
const FLOW_DOC_TEMPLATE: &str = r#"# Telegram Bot Screen Flow

Complete visualization of all {{ total }} bot screens and their navigation flows.

## Overview

- **Total Screens**: {{ total }}
- **Categories**: {{ category_list }}
{% if include_link_total %}- **Total Navigation Links**: {{ link_total }}
{% endif %}
## Screen Flow Diagram

The diagram below shows all screens, their names, preview text, and navigation CTAs.

{{ diagram }}

## Screen Categories

{{ category_summary }}

## Navigation Summary

Each screen has specific CTAs that navigate to other screens:

{{ nav_summary }}

*... and {{ omitted }} more screens*
{% if include_usage %}
## Usage

Import the generated definitions in your bot code:

```typescript
import { BOT_SCREENS, ScreenKey } from './screen-definitions';

const screen = BOT_SCREENS.welcome;
console.log(screen.name, screen.navigation);
```
{% endif %}
---

Generated on: {{ generated }}
"#;

/// # Render the Flow Document (`flow_doc`)
///
/// Builds every variable section from the collection and renders the final
/// Markdown text.
///
/// ## Arguments
///
/// * `screens` - The parsed screen collection.
/// * `diagram` - The rendered Mermaid block (see `mermaid::flowchart`).
/// * `opts` - Variant constants (sample size, extended sections, ordering).
///
/// ## Returns
///
/// * `Result<String>` - The complete document.
///
/// ## Errors
///
/// Returns `ScreenflowError::Template` if the template fails to render; the
/// template is a compile-time constant, so this indicates a programming error
/// rather than bad input.
pub fn flow_doc(screens: &ScreenMap, diagram: &str, opts: &ReportOptions) -> Result<String> {
    let categories = group_by_category(screens, opts.sort_categories);

    let category_list = categories
        .iter()
        .map(|(category, _)| *category)
        .collect::<Vec<_>>()
        .join(", ");

    let category_summary = categories
        .iter()
        .map(|(category, members)| {
            let items = members
                .iter()
                .map(|(key, screen)| format!("- **{}** (`{}`)", screen.name, key))
                .collect::<Vec<_>>()
                .join("\n");
            format!("### {}\n{}", category, items)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    // The summary lists every navigation pair of the sampled screens,
    // including pairs whose target is not a known key. Only the diagram
    // drops dangling references.
    let nav_summary = screens
        .iter()
        .take(opts.sample_size)
        .map(|(key, screen)| {
            let pairs = if screen.navigation.is_empty() {
                NO_NAVIGATION.to_string()
            } else {
                screen
                    .navigation
                    .iter()
                    .map(|nav| format!("- {} → `{}`", nav.action, nav.to))
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            format!("### {} (`{}`)\n{}", screen.name, key, pairs)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let link_total: usize = screens.values().map(|s| s.navigation.len()).sum();
    let omitted = screens.len().saturating_sub(opts.sample_size);

    let mut context = Context::new();
    context.insert("total", &screens.len());
    context.insert("category_list", &category_list);
    context.insert("include_link_total", &opts.include_link_total);
    context.insert("link_total", &link_total);
    context.insert("diagram", &diagram);
    context.insert("category_summary", &category_summary);
    context.insert("nav_summary", &nav_summary);
    context.insert("omitted", &omitted);
    context.insert("include_usage", &opts.include_usage);
    context.insert("generated", &chrono::Local::now().to_rfc3339());

    debug!(
        "Rendering flow document: {} screens, {} links, {} categories",
        screens.len(),
        link_total,
        categories.len()
    );

    // The document is Markdown, not HTML, so autoescaping stays off.
    Tera::one_off(FLOW_DOC_TEMPLATE, &context, false)
        .map_err(|e| anyhow!(ScreenflowError::Template { source: e }).context("Flow document rendering failed"))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screens::{NavLink, Screen};

    const BASIC: ReportOptions = ReportOptions {
        sample_size: 5,
        include_link_total: false,
        include_usage: false,
        sort_categories: false,
    };

    const EXTENDED: ReportOptions = ReportOptions {
        sample_size: 10,
        include_link_total: true,
        include_usage: true,
        sort_categories: true,
    };

    fn screen(name: &str, category: &str, navigation: Vec<NavLink>) -> Screen {
        Screen {
            name: name.to_string(),
            category: category.to_string(),
            navigation,
            ui_preview: String::new(),
        }
    }

    fn nav(action: &str, to: &str) -> NavLink {
        NavLink {
            action: action.to_string(),
            to: to.to_string(),
        }
    }

    fn sample_screens() -> ScreenMap {
        let mut screens = ScreenMap::new();
        screens.insert(
            "welcome".to_string(),
            screen("Welcome", "Start", vec![nav("Get Started", "hub")]),
        );
        screens.insert("hub".to_string(), screen("Hub", "Core", vec![]));
        screens.insert(
            "wallet".to_string(),
            screen(
                "Wallet",
                "Core",
                vec![nav("Back", "hub"), nav("Export", "ghost")],
            ),
        );
        screens
    }

    #[test]
    fn test_flow_doc_sections() {
        let doc = flow_doc(&sample_screens(), "```mermaid\nflowchart TD\n```", &BASIC).unwrap();
        assert!(doc.starts_with("# Telegram Bot Screen Flow"));
        assert!(doc.contains("- **Total Screens**: 3"));
        assert!(doc.contains("- **Categories**: Start, Core"));
        assert!(doc.contains("## Screen Flow Diagram"));
        assert!(doc.contains("```mermaid"));
        assert!(doc.contains("### Start\n- **Welcome** (`welcome`)"));
        assert!(doc.contains("### Core\n- **Hub** (`hub`)\n- **Wallet** (`wallet`)"));
        assert!(doc.contains("### Welcome (`welcome`)\n- Get Started → `hub`"));
        assert!(doc.contains("### Hub (`hub`)\n- No navigation defined"));
        assert!(doc.contains("*... and 0 more screens*"));
        assert!(doc.contains("Generated on: "));
    }

    #[test]
    fn test_flow_doc_basic_omits_extended_sections() {
        let doc = flow_doc(&sample_screens(), "(diagram)", &BASIC).unwrap();
        assert!(!doc.contains("Total Navigation Links"));
        assert!(!doc.contains("## Usage"));
    }

    #[test]
    fn test_flow_doc_extended_sections() {
        let doc = flow_doc(&sample_screens(), "(diagram)", &EXTENDED).unwrap();
        assert!(doc.contains("- **Total Navigation Links**: 3"));
        assert!(doc.contains("## Usage"));
        assert!(doc.contains("import { BOT_SCREENS, ScreenKey } from './screen-definitions';"));
        // Sorted category order.
        assert!(doc.contains("- **Categories**: Core, Start"));
    }

    #[test]
    fn test_flow_doc_sample_cutoff_and_omitted_note() {
        let opts = ReportOptions {
            sample_size: 2,
            ..BASIC
        };
        let doc = flow_doc(&sample_screens(), "(diagram)", &opts).unwrap();
        assert!(doc.contains("### Welcome (`welcome`)"));
        assert!(doc.contains("### Hub (`hub`)"));
        // Third screen falls outside the sample.
        assert!(!doc.contains("### Wallet (`wallet`)"));
        assert!(doc.contains("*... and 1 more screens*"));
    }

    /// Dangling targets still show in the summary; only the diagram drops them.
    #[test]
    fn test_flow_doc_summary_keeps_dangling_targets() {
        let doc = flow_doc(&sample_screens(), "(diagram)", &BASIC).unwrap();
        assert!(doc.contains("- Export → `ghost`"));
    }

    /// Two renders of the same collection differ at most in the footer timestamp.
    #[test]
    fn test_flow_doc_idempotent_above_footer() {
        let screens = sample_screens();
        let first = flow_doc(&screens, "(diagram)", &EXTENDED).unwrap();
        let second = flow_doc(&screens, "(diagram)", &EXTENDED).unwrap();

        let strip = |doc: &str| {
            doc.lines()
                .filter(|line| !line.starts_with("Generated on: "))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(strip(&first), strip(&second));
    }
}
