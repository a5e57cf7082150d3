use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use feriados::carousel::CarouselOptions;
use feriados::carousel::options::{DEFAULT_GAP, DEFAULT_VIEWPORT_WIDTH};
use feriados::time::Date;
use serde::Deserialize;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "feriados.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FeriadosConfig {
    /// Override for "today" (quoted `"YYYY-MM-DD"`).
    #[serde(default)]
    pub today: Option<Date>,

    /// Carousel geometry and timing.
    #[serde(default)]
    pub carousel: CarouselToml,

    /// Output settings.
    #[serde(default)]
    pub display: DisplayToml,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CarouselToml {
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    #[serde(default = "default_gap")]
    pub gap: f64,
}

impl Default for CarouselToml {
    fn default() -> Self {
        Self {
            animation_ms: default_animation_ms(),
            viewport_width: default_viewport_width(),
            gap: default_gap(),
        }
    }
}

fn default_animation_ms() -> u64 {
    500
}
fn default_viewport_width() -> f64 {
    DEFAULT_VIEWPORT_WIDTH
}
fn default_gap() -> f64 {
    DEFAULT_GAP
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self { color: true }
    }
}

fn default_true() -> bool {
    true
}

impl FeriadosConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist.  Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read when present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    tracing::debug!("no {DEFAULT_CONFIG_PATH}, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Validated carousel options.
    pub fn carousel_options(&self) -> Result<CarouselOptions> {
        let c = &self.carousel;
        CarouselOptions::new(
            Duration::from_millis(c.animation_ms),
            c.viewport_width,
            c.gap,
        )
        .context("invalid [carousel] settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = FeriadosConfig::parse("").unwrap();
        assert_eq!(config, FeriadosConfig::default());
        assert_eq!(config.carousel_options().unwrap(), CarouselOptions::default());
        assert!(config.display.color);
    }

    #[test]
    fn full_config() {
        let config = FeriadosConfig::parse(
            r#"
            today = "2025-04-20"

            [carousel]
            animation_ms = 250
            viewport_width = 300.0
            gap = 12.0

            [display]
            color = false
            "#,
        )
        .unwrap();
        assert_eq!(config.today, Some(Date::from_ymd(2025, 4, 20).unwrap()));
        let options = config.carousel_options().unwrap();
        assert_eq!(options.animation(), Duration::from_millis(250));
        assert_eq!(options.slide_shift(), 312.0);
        assert!(!config.display.color);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(FeriadosConfig::parse("[carousel]\nspeed = 3\n").is_err());
        assert!(FeriadosConfig::parse("locale = \"en\"\n").is_err());
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(FeriadosConfig::parse("today = \"2025-02-30\"\n").is_err());
        let config = FeriadosConfig::parse("[carousel]\nanimation_ms = 0\n").unwrap();
        assert!(config.carousel_options().is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = Path::new("/nonexistent/feriados.toml");
        assert!(FeriadosConfig::load(Some(missing)).is_err());
    }
}
