use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClockFormat {
    #[default]
    Hour24, // "14:30"
    Hour12, // "2:30pm"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    /// Shows carrying exactly this name are the station's filler slots,
    /// not real programs, and are dropped before layout.
    #[serde(default = "default_station_name")]
    pub station_name: String,
    #[serde(default)]
    pub clock_format: ClockFormat,
}

fn default_feed_url() -> String {
    "https://neunzugmilradio.airtime.pro/api/week-info".to_string()
}

fn default_station_name() -> String {
    "90mil Radio".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            station_name: default_station_name(),
            clock_format: ClockFormat::Hour24,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            serde_json::from_str(&contents).context("Failed to parse config file")
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "airwave", "airwave")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_falls_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.feed_url, default_feed_url());
        assert_eq!(config.station_name, "90mil Radio");
        assert_eq!(config.clock_format, ClockFormat::Hour24);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config {
            feed_url: "https://example.test/api/week-info".to_string(),
            station_name: "Example FM".to_string(),
            clock_format: ClockFormat::Hour12,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.feed_url, config.feed_url);
        assert_eq!(parsed.station_name, config.station_name);
        assert_eq!(parsed.clock_format, config.clock_format);
    }
}
