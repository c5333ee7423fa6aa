//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Categories to register. `None` registers every shipped category.
    pub enabled_categories: Option<Vec<String>>,

    /// Maximum number of resources per `resources/list` page.
    /// `None` returns everything in one page.
    pub page_size: Option<usize>,
}

impl ResourcesConfig {
    /// Whether documents of `category` should be registered.
    pub fn is_category_enabled(&self, category: &str) -> bool {
        match &self.enabled_categories {
            Some(enabled) => enabled.iter().any(|c| c == category),
            None => true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "docs-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: ResourcesConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables, logging anything
    /// that was ignored.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        let (config, warnings) = Self::load_env();
        for warning in &warnings {
            warn!("{}", warning);
        }
        config
    }

    /// Load configuration from environment variables.
    ///
    /// Invalid values are replaced by their defaults and described in the
    /// returned warnings, so they can be logged once a subscriber exists.
    pub fn load_env() -> (Self, Vec<String>) {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps);
        }

        if let Ok(categories) = std::env::var("MCP_DOCS_CATEGORIES") {
            let enabled = parse_list(&categories);
            if enabled.is_empty() {
                warnings.push(
                    "MCP_DOCS_CATEGORIES is empty - registering every category".to_string(),
                );
            } else {
                config.resources.enabled_categories = Some(enabled);
            }
        }

        if let Ok(page_size) = std::env::var("MCP_RESOURCES_PAGE_SIZE") {
            match page_size.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.resources.page_size = Some(size),
                _ => warnings.push(format!(
                    "Ignoring invalid MCP_RESOURCES_PAGE_SIZE '{}' - listing without pagination",
                    page_size
                )),
            }
        }

        config.transport = TransportConfig::load_env(&mut warnings);

        (config, warnings)
    }
}

/// Anything but `false`/`0` (case-insensitive) is true.
fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    !(value.eq_ignore_ascii_case("false") || value == "0")
}

/// Split a comma-separated list, dropping blanks.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
