use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::distance::{ZoneFilter, HUNDRED_YEAR_ZONES};
use crate::pipeline::DistanceOptions;

pub const DEFAULT_ZONE_FIELD: &str = "FLD_ZONE";
pub const DEFAULT_LINES_NAME: &str = "houston-texas-community-centers-distance-lines";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub zones: ZonesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ZonesConfig {
    /// Property holding the zone class on each hazard polygon
    #[serde(default = "default_zone_field")]
    pub field: String,
    #[serde(default = "default_allowed")]
    pub allowed: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_lines_name")]
    pub lines_name: String,
}

impl Default for ZonesConfig {
    fn default() -> Self {
        Self {
            field: default_zone_field(),
            allowed: default_allowed(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            lines_name: default_lines_name(),
        }
    }
}

fn default_zone_field() -> String {
    DEFAULT_ZONE_FIELD.to_string()
}

fn default_allowed() -> Vec<String> {
    HUNDRED_YEAR_ZONES.iter().map(|z| z.to_string()).collect()
}

fn default_lines_name() -> String {
    DEFAULT_LINES_NAME.to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        Ok(config)
    }

    pub fn options(&self) -> DistanceOptions {
        DistanceOptions {
            zone_field: self.zones.field.clone(),
            filter: ZoneFilter::new(self.zones.allowed.iter().cloned()),
            lines_name: self.output.lines_name.clone(),
        }
    }
}
