//! # ScreenFlow Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module is the organizational entry point for shared utility modules
//! used across the ScreenFlow CLI. Centralizing cross-cutting helpers under
//! the `common::` namespace keeps a clear separation between command-specific
//! logic (`commands::`) and core pipeline machinery (`core::`).
//!
//! ## Architecture
//!
//! Currently a single submodule:
//!
//! - **`fs`**: Foundational filesystem operations — reading source files into
//!   strings and writing generated files back out, with parent-directory
//!   creation and contextual error messages.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! let content = io::read_file_to_string(Path::new("src/JourneyMap.jsx"))?;
//! io::write_string_to_file(Path::new("docs/SCREEN_FLOW.md"), &content)?;
//! # Ok(())
//! # }
//! ```
//!

/// Utilities for filesystem operations (file I/O).
pub mod fs;
