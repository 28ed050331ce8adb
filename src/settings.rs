//! Scene settings
//!
//! Loaded from a JSON file. Missing keys fall back to defaults.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FRAME_RATE, DEFAULT_WIDTH};
use crate::error::{ConfigError, FieldError};
use crate::field::Field;

/// Full-strip effect drawn under the paddles and ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    /// Transparent black
    None,
    /// Rolling three-channel sine
    Sinusoid {
        /// Sample through a precomputed table instead of calling `sin`
        #[serde(default)]
        tabulated: bool,
    },
    /// Cycling hue with a luminosity ramp
    HslWheel,
}

impl Default for Background {
    fn default() -> Self {
        Background::Sinusoid { tabulated: false }
    }
}

impl Background {
    pub fn as_str(&self) -> &'static str {
        match self {
            Background::None => "none",
            Background::Sinusoid { tabulated: false } => "sinusoid",
            Background::Sinusoid { tabulated: true } => "sinusoid-table",
            Background::HslWheel => "hsl",
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Background {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Ok(Background::None),
            "sinusoid" | "sine" => Ok(Background::Sinusoid { tabulated: false }),
            "sinusoid-table" | "sine-table" => Ok(Background::Sinusoid { tabulated: true }),
            "hsl" | "hsl-wheel" | "wheel" => Ok(Background::HslWheel),
            other => Err(format!(
                "unknown background '{other}' (expected none, sinusoid, sinusoid-table or hsl)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of LEDs on the strip
    pub width: u32,
    pub background: Background,
    /// Simulation steps per second
    pub frame_rate: u32,
    /// Seed for serve directions
    pub seed: u64,
    /// Let the demo player drive both paddles
    pub idle_mode: bool,
    /// Draw frames to the terminal
    pub terminal: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            background: Background::default(),
            frame_rate: DEFAULT_FRAME_RATE,
            seed: 0,
            idle_mode: true,
            terminal: true,
        }
    }
}

impl Settings {
    /// Validated strip geometry
    pub fn field(&self) -> Result<Field, FieldError> {
        Field::new(self.width)
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.field()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings = Settings::from_json(r#"{ "width": 144 }"#).unwrap();
        assert_eq!(settings.width, 144);
        assert_eq!(settings.frame_rate, DEFAULT_FRAME_RATE);
        assert_eq!(settings.background, Background::Sinusoid { tabulated: false });
    }

    #[test]
    fn test_background_tagging() {
        let settings =
            Settings::from_json(r#"{ "background": { "kind": "sinusoid", "tabulated": true } }"#)
                .unwrap();
        assert_eq!(settings.background, Background::Sinusoid { tabulated: true });

        let settings = Settings::from_json(r#"{ "background": { "kind": "hsl_wheel" } }"#).unwrap();
        assert_eq!(settings.background, Background::HslWheel);
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = Settings::from_json(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Field(FieldError::EmptyField)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ width: "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("strip-pong-settings-{}.json", std::process::id()));
        let settings = Settings {
            width: 32,
            background: Background::HslWheel,
            seed: 42,
            ..Default::default()
        };

        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/nonexistent/strip-pong.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_background_names() {
        assert_eq!("HSL".parse::<Background>(), Ok(Background::HslWheel));
        assert_eq!("sine-table".parse::<Background>(), Ok(Background::Sinusoid { tabulated: true }));
        assert!("plasma".parse::<Background>().is_err());
        for bg in [
            Background::None,
            Background::Sinusoid { tabulated: false },
            Background::Sinusoid { tabulated: true },
            Background::HslWheel,
        ] {
            assert_eq!(bg.as_str().parse::<Background>(), Ok(bg));
        }
    }
}
