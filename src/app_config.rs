use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Synthesized subtitle style settings
    #[serde(default)]
    pub style: StyleConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the subtitle style injected into overlay documents
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StyleConfig {
    /// Style name, referenced by every injected dialogue line
    #[serde(default = "default_style_name")]
    pub name: String,

    /// Font face name
    #[serde(default = "default_style_font")]
    pub font: String,

    /// Font size in script units
    #[serde(default = "default_style_font_size")]
    pub font_size: u32,

    /// Vertical margin, distance from the bottom edge
    #[serde(default = "default_style_margin_vertical")]
    pub margin_vertical: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            name: default_style_name(),
            font: default_style_font(),
            font_size: default_style_font_size(),
            margin_vertical: default_style_margin_vertical(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_style_name() -> String {
    "Subtitle".to_string()
}

fn default_style_font() -> String {
    "SimHei".to_string()
}

fn default_style_font_size() -> u32 {
    42
}

fn default_style_margin_vertical() -> u32 {
    90
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.style.name.trim().is_empty() {
            return Err(anyhow!("Style name must not be empty"));
        }

        // Commas separate fields in style and dialogue lines
        if self.style.name.contains(',') || self.style.font.contains(',') {
            return Err(anyhow!("Style name and font must not contain commas"));
        }

        if self.style.font_size == 0 {
            return Err(anyhow!("Style font size must be greater than zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            style: StyleConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
