//! Front end configuration
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration. The WASM entry point feeds the page-supplied
//! `window.DOCLUSTER_CONFIG` object through [`FrontendConfig::from_json`].

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Path of the document processing endpoint
pub const PROCESS_PATH: &str = "/api/documents/process";

/// Path of the search endpoint
pub const SEARCH_PATH: &str = "/api/search";

/// Upper bound on `tick_count`
pub const MAX_TICK_COUNT: usize = 100;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrontendConfig {
    /// Prefix prepended to the endpoint paths; empty means same origin
    pub api_base: String,

    /// Scatter plot geometry and marker styling
    pub plot: PlotConfig,

    /// Number of placeholder cluster labels (labels are drawn from 0..n)
    pub cluster_count: u32,

    /// Console log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            plot: PlotConfig::default(),
            cluster_count: 5,
            log_level: "info".to_string(),
        }
    }
}

impl FrontendConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FrontendConfig = serde_json::from_str(json)
            .map_err(|e| ClientError::config(format!("invalid configuration JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.plot.validate()?;
        if self.cluster_count == 0 {
            return Err(ClientError::config("cluster_count must be at least 1"));
        }
        Ok(())
    }

    /// Level for the console logger, falling back to `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn process_url(&self) -> String {
        self.endpoint(PROCESS_PATH)
    }

    pub fn search_url(&self) -> String {
        self.endpoint(SEARCH_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

/// Margins around the scatter plot drawing area
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 40.0,
        }
    }
}

/// Scatter plot geometry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    /// Width of the SVG canvas
    pub width: f64,
    /// Height of the SVG canvas
    pub height: f64,
    pub margin: Margin,
    /// Marker radius at rest
    pub point_radius: f64,
    /// Marker radius under the pointer
    pub hover_radius: f64,
    /// Marker opacity at rest (hovered markers are opaque)
    pub point_opacity: f64,
    /// Approximate number of ticks per axis
    pub tick_count: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: Margin::default(),
            point_radius: 5.0,
            hover_radius: 8.0,
            point_opacity: 0.6,
            tick_count: 10,
        }
    }
}

impl PlotConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ClientError::config(format!(
                "plot area must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let m = &self.margin;
        if m.left + m.right >= self.width || m.top + m.bottom >= self.height {
            return Err(ClientError::config(
                "plot margins leave no room for the drawing area",
            ));
        }
        if !(0.0..=1.0).contains(&self.point_opacity) {
            return Err(ClientError::config("point_opacity must be within 0..=1"));
        }
        if self.tick_count > MAX_TICK_COUNT {
            return Err(ClientError::config(format!(
                "tick_count must be at most {MAX_TICK_COUNT}, got {}",
                self.tick_count
            )));
        }
        Ok(())
    }

    /// Horizontal pixel range available to points
    pub fn x_range(&self) -> (f64, f64) {
        (self.margin.left, self.width - self.margin.right)
    }

    /// Vertical pixel range; inverted so larger values sit higher
    pub fn y_range(&self) -> (f64, f64) {
        (self.height - self.margin.bottom, self.margin.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FrontendConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.cluster_count, 5);
        assert_eq!(config.plot.width, 800.0);
        assert_eq!(config.plot.height, 600.0);
        assert_eq!(config.plot.margin.left, 40.0);
        assert_eq!(config.log_level(), log::Level::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_endpoints_are_same_origin() {
        let config = FrontendConfig::default();
        assert_eq!(config.process_url(), "/api/documents/process");
        assert_eq!(config.search_url(), "/api/search");
    }

    #[test]
    fn test_api_base_trailing_slash() {
        let config = FrontendConfig::from_json(r#"{"api_base": "http://localhost:8000/"}"#)
            .unwrap();
        assert_eq!(
            config.process_url(),
            "http://localhost:8000/api/documents/process"
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            FrontendConfig::from_json(r#"{"plot": {"width": 1024}, "log_level": "debug"}"#)
                .unwrap();
        assert_eq!(config.plot.width, 1024.0);
        assert_eq!(config.plot.height, 600.0);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_margin_keeps_defaults() {
        let config = FrontendConfig::from_json(r#"{"plot": {"margin": {"top": 10}}}"#).unwrap();
        assert_eq!(config.plot.margin.top, 10.0);
        assert_eq!(config.plot.margin.right, 20.0);
        assert_eq!(config.plot.margin.bottom, 30.0);
        assert_eq!(config.plot.margin.left, 40.0);
    }

    #[test]
    fn test_tick_count_is_bounded() {
        assert!(FrontendConfig::from_json(r#"{"plot": {"tick_count": 100}}"#).is_ok());
        assert!(FrontendConfig::from_json(r#"{"plot": {"tick_count": 101}}"#).is_err());
        assert!(FrontendConfig::from_json(r#"{"plot": {"tick_count": 1000000000}}"#).is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = FrontendConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(FrontendConfig::from_json(r#"{"cluster_count": 0}"#).is_err());
        assert!(FrontendConfig::from_json(r#"{"plot": {"width": 50}}"#).is_err());
        assert!(FrontendConfig::from_json("[1, 2]").is_err());
    }
}
