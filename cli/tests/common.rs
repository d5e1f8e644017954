//! # ScreenFlow CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions and fixtures used across the
//! integration test files (`extract.rs`, `diagram.rs`). This avoids code
//! duplication in the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs`
//! file in that directory (that isn't a module like this one) is compiled as a
//! separate test crate linked against the main `screenflow` binary crate.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

// Re-export common crates/modules needed by multiple test files
pub use assert_cmd::Command;

/// # Get ScreenFlow Command (`screenflow_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to the
/// compiled `screenflow` binary target for the current test run.
///
/// ## Panics
/// Panics if the `screenflow` binary cannot be found via `Command::cargo_bin`.
pub fn screenflow_cmd() -> Command {
    Command::cargo_bin("screenflow").expect("Failed to find screenflow binary for testing")
}

/// A small journey-map fixture with three screens: one dangling navigation
/// target (`about_bot`), one screen without a `name` field (`wallet`), and a
/// text-art block whose first framed line is a heavy separator.
pub const SAMPLE_JOURNEY_MAP: &str = r#"import React from 'react';

const journeyTitle = 'Bot Journey';

const screens = {
    welcome: {
        category: 'Onboarding',
        name: 'Welcome',
        navigation: [
            { action: 'Get Started', to: 'main_menu' },
            { action: 'Learn More', to: 'about_bot' },
        ],
        telegram_ui: `┌──────────────┐\n│ Welcome aboard! │\n└──────────────┘`,
    },
    main_menu: {
        category: 'Core',
        name: 'Main Menu',
        navigation: [
            { action: 'Open Wallet', to: 'wallet' },
        ],
        telegram_ui: `┌──────────────┐\n│ Pick an option │\n└──────────────┘`,
    },
    wallet: {
        category: 'Core',
        navigation: [],
        telegram_ui: `│━━━━━━│\n│ Balance: 42 USDC │`,
    },
};

export default function JourneyMap() {
    return null;
}
"#;
