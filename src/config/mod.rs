// SPDX-License-Identifier: MPL-2.0
//! This module handles the editor configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use magic_edit::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.brush_size = Some(40.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.brush_size, Some(40.0));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::domain::editing::BrushSize;
use crate::error::Result;
use defaults::{
    DEFAULT_EXPANSION_STEP_RATIO, DEFAULT_JPEG_QUALITY, DEFAULT_MAX_EXPANSION_CLICKS,
    DEFAULT_MIN_CROP_SELECTION_PX, DEFAULT_NOTICE_TIMEOUT_SECS, DEFAULT_REFLOW_QUIET_MS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "MagicEdit";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub brush_size: Option<f32>,
    #[serde(default)]
    pub max_expansion_clicks: Option<usize>,
    #[serde(default)]
    pub expansion_step_ratio: Option<f32>,
    #[serde(default)]
    pub notice_timeout_secs: Option<u32>,
    #[serde(default)]
    pub reflow_quiet_ms: Option<u64>,
    #[serde(default)]
    pub min_crop_selection_px: Option<f32>,
    #[serde(default)]
    pub jpeg_quality: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brush_size: Some(defaults::DEFAULT_BRUSH_SIZE),
            max_expansion_clicks: Some(DEFAULT_MAX_EXPANSION_CLICKS),
            expansion_step_ratio: Some(DEFAULT_EXPANSION_STEP_RATIO),
            notice_timeout_secs: Some(DEFAULT_NOTICE_TIMEOUT_SECS),
            reflow_quiet_ms: Some(DEFAULT_REFLOW_QUIET_MS),
            min_crop_selection_px: Some(DEFAULT_MIN_CROP_SELECTION_PX),
            jpeg_quality: Some(DEFAULT_JPEG_QUALITY),
        }
    }
}

impl Config {
    /// Resolves optional fields into the concrete values the editor runs with.
    ///
    /// Missing fields fall back to their defaults; out-of-range values are
    /// clamped rather than rejected.
    #[must_use]
    pub fn editor_settings(&self) -> EditorSettings {
        EditorSettings {
            brush_size: BrushSize::new(self.brush_size.unwrap_or(defaults::DEFAULT_BRUSH_SIZE)),
            max_expansion_clicks: self
                .max_expansion_clicks
                .unwrap_or(DEFAULT_MAX_EXPANSION_CLICKS)
                .max(1),
            expansion_step_ratio: self
                .expansion_step_ratio
                .unwrap_or(DEFAULT_EXPANSION_STEP_RATIO)
                .clamp(0.01, 1.0),
            notice_timeout: Duration::from_secs(u64::from(
                self.notice_timeout_secs
                    .unwrap_or(DEFAULT_NOTICE_TIMEOUT_SECS)
                    .max(1),
            )),
            reflow_quiet: Duration::from_millis(
                self.reflow_quiet_ms.unwrap_or(DEFAULT_REFLOW_QUIET_MS),
            ),
            min_crop_selection_px: self
                .min_crop_selection_px
                .unwrap_or(DEFAULT_MIN_CROP_SELECTION_PX)
                .max(0.0),
            jpeg_quality: self.jpeg_quality.unwrap_or(DEFAULT_JPEG_QUALITY).clamp(1, 100),
        }
    }
}

/// Concrete settings consumed by [`crate::editor::State`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorSettings {
    pub brush_size: BrushSize,
    pub max_expansion_clicks: usize,
    pub expansion_step_ratio: f32,
    pub notice_timeout: Duration,
    pub reflow_quiet: Duration,
    pub min_crop_selection_px: f32,
    pub jpeg_quality: u8,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Config::default().editor_settings()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid settings file {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
