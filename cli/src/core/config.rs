//! # ScreenFlow Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for ScreenFlow, handling
//! loading, merging, validation, and access to configuration data. The original
//! generation scripts hardcoded their input and output locations; here every
//! path is injected configuration, resolved once at process start.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - Paths are expanded (e.g., `~` to home directory)
//! - Command-line flags override configured values
//! - Structured data models ensure type safety
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line path flags (`--source`, `--definitions`, `--output`)
//! 2. Project-specific `.screenflow.toml` in current directory or ancestors
//! 3. User-specific `~/.config/screenflow/config.toml`
//!
//! ## Examples
//!
//! A project configuration file:
//!
//! ```toml
//! [paths]
//! journey_map = "~/code/journey-map-app/src/JourneyMap.jsx"
//! screen_definitions = "src/bot/screen-definitions.ts"
//! flow_doc = "docs/SCREEN_FLOW.md"
//! ```
//!
//! The configuration is loaded once per command execution and the resolved
//! paths are passed to the pipeline stages that need them.
//!
use crate::core::error::{Result, ScreenflowError}; // Use error from the same core module
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;
use std::{fs, path::Path};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    // Add other top-level configuration sections here
}

/// Input and output locations for the generation pipelines.
///
/// Every field is optional in the file; a path that is needed by the invoked
/// command but defined neither here nor on the command line is a
/// configuration error.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Source file containing the screens map (the journey-map export). Can use ~.
    pub journey_map: Option<String>,
    /// Generated screen-definitions module. Can use ~.
    pub screen_definitions: Option<String>,
    /// Generated Markdown flow document. Can use ~.
    pub flow_doc: Option<String>,
}

const PROJECT_CONFIG_FILENAME: &str = ".screenflow.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ScreenFlow", "screenflow") {
        let config_dir = proj_dirs.config_dir();
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.screenflow.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if project_config.exists() && project_config.is_file() {
            return Ok(Some(project_config));
        }
        if git_dir.exists() && git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.paths.journey_map = project_cfg.paths.journey_map.or(user.paths.journey_map);
    merged.paths.screen_definitions = project_cfg
        .paths
        .screen_definitions
        .or(user.paths.screen_definitions);
    merged.paths.flow_doc = project_cfg.paths.flow_doc.or(user.paths.flow_doc);
    merged
}

fn expand_config_paths(config: &mut Config) {
    debug!("Expanding paths in configuration...");
    for entry in [
        &mut config.paths.journey_map,
        &mut config.paths.screen_definitions,
        &mut config.paths.flow_doc,
    ] {
        if let Some(raw) = entry.take() {
            let expanded = shellexpand::tilde(&raw).into_owned();
            debug!("Expanded configured path '{}' to '{}'", raw, expanded);
            *entry = Some(expanded);
        }
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    for (key, value) in [
        ("journey_map", &config.paths.journey_map),
        ("screen_definitions", &config.paths.screen_definitions),
        ("flow_doc", &config.paths.flow_doc),
    ] {
        if let Some(path) = value {
            if path.trim().is_empty() {
                return Err(anyhow!(ScreenflowError::Config(format!(
                    "Configured path '{}' is empty.",
                    key
                ))));
            }
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}

/// Resolves one pipeline path: the command-line override wins, then the
/// configured value; neither present is a configuration error naming both the
/// flag and the config key so the user knows where to supply it.
pub fn resolve_path(
    cli_override: Option<PathBuf>,
    configured: &Option<String>,
    flag: &str,
    key: &str,
) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        debug!("Using {} from command line: {}", key, path.display());
        return Ok(path);
    }
    match configured {
        Some(path) => Ok(PathBuf::from(path)),
        None => Err(anyhow!(ScreenflowError::Config(format!(
            "No path for '{}'; pass {} or set 'paths.{}' in the configuration file.",
            key, flag, key
        )))),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [paths]
            journey_map = "~/code/journey-map-app/src/JourneyMap.jsx"
            flow_doc = "docs/SCREEN_FLOW.md"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(
            config.paths.journey_map.as_deref(),
            Some("~/code/journey-map-app/src/JourneyMap.jsx") // Not yet expanded
        );
        assert_eq!(config.paths.screen_definitions, None); // Absent fields stay None
        assert_eq!(config.paths.flow_doc.as_deref(), Some("docs/SCREEN_FLOW.md"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let toml_content = r#"
            [paths]
            journey_map = "map.jsx"
            typo_field = "oops"
        "#;
        assert!(toml::from_str::<Config>(toml_content).is_err());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            paths: PathsConfig {
                journey_map: Some("~/journeys/map.jsx".to_string()),
                screen_definitions: Some("/absolute/defs.ts".to_string()),
                flow_doc: None,
            },
        };

        expand_config_paths(&mut config);

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.paths.journey_map.as_deref().unwrap(),
            home_dir.join("journeys/map.jsx").to_string_lossy()
        );
        assert_eq!(
            config.paths.screen_definitions.as_deref(),
            Some("/absolute/defs.ts") // Absolute path unchanged
        );
        assert_eq!(config.paths.flow_doc, None);
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            paths: PathsConfig {
                journey_map: Some("user-map.jsx".to_string()),
                screen_definitions: Some("user-defs.ts".to_string()),
                flow_doc: None,
            },
        };
        let project = Config {
            paths: PathsConfig {
                journey_map: Some("project-map.jsx".to_string()),
                screen_definitions: None,
                flow_doc: Some("project-doc.md".to_string()),
            },
        };

        let merged = merge_configs(user, Some(project));

        assert_eq!(merged.paths.journey_map.as_deref(), Some("project-map.jsx"));
        assert_eq!(
            merged.paths.screen_definitions.as_deref(),
            Some("user-defs.ts") // Falls back to user value
        );
        assert_eq!(merged.paths.flow_doc.as_deref(), Some("project-doc.md"));
    }

    #[test]
    fn test_validate_config_rejects_empty_path() {
        let config = Config {
            paths: PathsConfig {
                journey_map: Some("   ".to_string()),
                screen_definitions: None,
                flow_doc: None,
            },
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("is empty"));
    }

    #[test]
    fn test_resolve_path_cli_wins() {
        let resolved = resolve_path(
            Some(PathBuf::from("/cli/map.jsx")),
            &Some("/config/map.jsx".to_string()),
            "--source",
            "journey_map",
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("/cli/map.jsx"));
    }

    #[test]
    fn test_resolve_path_falls_back_to_config() {
        let resolved = resolve_path(
            None,
            &Some("/config/map.jsx".to_string()),
            "--source",
            "journey_map",
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("/config/map.jsx"));
    }

    #[test]
    fn test_resolve_path_missing_everywhere() {
        let result = resolve_path(None, &None, "--source", "journey_map");
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("--source"));
        assert!(message.contains("journey_map"));
    }
}
