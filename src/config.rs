use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::slide::{ThemeColor, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

impl std::str::FromStr for Rgba {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "white" => return Ok(Rgba::rgb(255, 255, 255)),
            "black" => return Ok(Rgba::rgb(0, 0, 0)),
            "transparent" => return Ok(Rgba { r: 0, g: 0, b: 0, a: 0 }),
            _ => {}
        }

        let hex = s.strip_prefix('#').ok_or_else(|| format!("unknown color '{s}'"))?;
        let digits = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| format!("invalid hex color '{s}'"))?;

        match digits.as_slice() {
            [r, g, b] => Ok(Rgba::rgb(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Rgba::rgb(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0)),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Rgba { r: r1 * 16 + r0, g: g1 * 16 + g0, b: b1 * 16 + b0, a: a1 * 16 + a0 }),
            _ => Err(format!("hex color '{s}' must have 3, 6 or 8 digits")),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_primary")]
    pub primary: Rgba,

    #[serde(default = "default_secondary")]
    pub secondary: Rgba,

    #[serde(default = "default_tertiary")]
    pub tertiary: Rgba,

    #[serde(default = "default_quaternary")]
    pub quaternary: Rgba,
}

fn default_primary() -> Rgba {
    Rgba::rgb(255, 255, 255)
}

fn default_secondary() -> Rgba {
    Rgba::rgb(0x1F, 0x20, 0x22)
}

fn default_tertiary() -> Rgba {
    Rgba::rgb(0x03, 0xA9, 0xFC)
}

fn default_quaternary() -> Rgba {
    Rgba::rgb(0xCE, 0xCE, 0xCE)
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
            tertiary: default_tertiary(),
            quaternary: default_quaternary(),
        }
    }
}

impl Theme {
    pub fn color(&self, color: ThemeColor) -> Rgba {
        match color {
            ThemeColor::Primary => self.primary,
            ThemeColor::Secondary => self.secondary,
            ThemeColor::Tertiary => self.tertiary,
            ThemeColor::Quaternary => self.quaternary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,

    /// Deck-wide transition, used by slides that declare none.
    #[serde(default = "default_transition")]
    pub transition: Vec<Transition>,

    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u64,

    #[serde(default)]
    pub theme: Theme,
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_transition() -> Vec<Transition> {
    vec![Transition::Zoom, Transition::Slide]
}

fn default_transition_duration_ms() -> u64 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_dir: default_asset_dir(),
            transition: default_transition(),
            transition_duration_ms: default_transition_duration_ms(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Read a TOML config, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn transition_seconds(&self) -> f32 {
        self.transition_duration_ms as f32 / 1000.0
    }
}
