//! # ScreenFlow Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands that comprise the ScreenFlow
//! CLI. It serves as the central point for importing and re-exporting command
//! modules to make them accessible to the main application entry point
//! (`main.rs`).
//!
//! ## Architecture
//!
//! Each command is a single module exposing an arguments struct and an async
//! handler function. The two commands are the two halves of the original
//! tool, sharing one extractor/parser/generator set from `core::` and
//! differing only in their input anchor and variant constants:
//!
//! - `extract`: journey-map source → definitions module + flow document
//! - `diagram`: definitions module → grouped, extended flow document
//!

/// Full pipeline from the journey-map source: regenerate the definitions
/// module and the flow document.
pub mod extract;
/// Regenerate the flow document from the definitions module, grouped by
/// category with the extended overview.
pub mod diagram;
