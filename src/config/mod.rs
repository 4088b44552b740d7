//! Configuration module for the telemetry inspector
//!
//! This module handles the persisted inspector configuration:
//! - Plot appearance (checker tiles, axis color, channel palette, legend)
//! - Sample window capacity (fixed, or derived once from the render surface)
//! - Sampling tick rate
//! - Member discovery policy
//!
//! # App Data Location
//!
//! The configuration is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.telemetry-inspector/`
//! - **macOS**: `~/Library/Application Support/dev.telemetry-inspector/`
//! - **Windows**: `%APPDATA%\dev.telemetry-inspector\`
//!
//! # Example
//!
//! ```ignore
//! use telemetry_inspector::config::InspectorConfig;
//!
//! let config = InspectorConfig::load_or_default();
//! let capacity = config.plot.window_capacity_for(640.0);
//! ```

use crate::error::{InspectorError, Result, ResultExt};
use crate::types::{Color, MAX_CHANNELS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application identifier for data directories
pub const APP_ID: &str = "dev.telemetry-inspector";

/// Config filename
pub const CONFIG_FILE: &str = "config.json";

/// Default checker tile edge in pixels
pub const DEFAULT_TILE_SIZE: f32 = 50.0;

/// Default sampling rate in Hz
pub const DEFAULT_TICK_RATE_HZ: u32 = 60;

/// Smallest window that can still draw a line
pub const MIN_WINDOW_CAPACITY: usize = 2;

/// Default channel palette: channel `i` is always drawn in `palette[i]`
pub const DEFAULT_PALETTE: [Color; MAX_CHANNELS] =
    [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        InspectorError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            InspectorError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the config file
pub fn config_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(CONFIG_FILE))
}

// ==================== Inspector Config ====================

/// Complete inspector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Version for future migration support
    #[serde(default = "default_config_version")]
    pub version: u32,

    /// Plot appearance and window sizing
    #[serde(default)]
    pub plot: PlotConfig,

    /// Sampling clock
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Member discovery policy
    #[serde(default)]
    pub catalog: CatalogConfig,
}

fn default_config_version() -> u32 {
    1
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            version: 1,
            plot: PlotConfig::default(),
            sampling: SamplingConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl InspectorConfig {
    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            InspectorError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            InspectorError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }

    /// Load the config from the default location, returning defaults on any error
    pub fn load_or_default() -> Self {
        match config_path() {
            Some(path) if path.exists() => Self::load(&path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Save the config to disk as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {:?}", path))
    }

    /// Save the config to the default location
    pub fn save_default(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save(dir.join(CONFIG_FILE))
    }
}

/// Plot appearance and window sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Checker tile edge in pixels
    pub tile_size: f32,
    /// Color of the even checker tiles
    pub checker_dark: Color,
    /// Color of the odd checker tiles
    pub checker_light: Color,
    /// Axis line color
    pub axis_color: Color,
    /// Per-channel trace colors
    pub palette: [Color; MAX_CHANNELS],
    /// Trace stroke width
    pub line_width: f32,
    /// Whether to draw the legend
    pub show_legend: bool,
    /// Render the full window with leading zero rows, so traces scroll in from the right
    pub pad_with_zeros: bool,
    /// Fixed window capacity; `None` derives it from the initial surface width
    pub window_capacity: Option<usize>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            checker_dark: Color::BLACK,
            checker_light: Color::gray(24),
            axis_color: Color::gray(200),
            palette: DEFAULT_PALETTE,
            line_width: 1.5,
            show_legend: true,
            pad_with_zeros: false,
            window_capacity: None,
        }
    }
}

impl PlotConfig {
    /// Window capacity `W` for a surface of the given width
    ///
    /// One sample per horizontal pixel unless a fixed capacity is configured.
    /// Called once when the inspector is created, not per frame.
    pub fn window_capacity_for(&self, surface_width: f32) -> usize {
        let derived = if surface_width.is_finite() && surface_width > 0.0 {
            surface_width.floor() as usize
        } else {
            0
        };
        self.window_capacity
            .unwrap_or(derived)
            .max(MIN_WINDOW_CAPACITY)
    }
}

/// Sampling clock settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Ticks per second
    pub tick_rate_hz: u32,
    /// Upper bound on catch-up ticks run in a single frame
    pub max_ticks_per_frame: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            max_ticks_per_frame: 8,
        }
    }
}

impl SamplingConfig {
    /// Interval between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate_hz.max(1) as f64)
    }
}

/// Member discovery policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Apply the numeric filter to fields as well as properties
    ///
    /// Off by default: every public field is listed regardless of type.
    pub filter_fields: bool,
}
