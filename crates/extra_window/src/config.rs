//! Window configuration
//!
//! An explicit, serializable alternative to the hint-before-create flow:
//! describe a window up front and hand the description to
//! [`crate::WindowSystem::create_window_from_config`]. Supports TOML files
//! so demo and tool binaries can keep window setup out of code.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flags::WindowFlags;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for a window description.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Declarative description of one extra window.
///
/// Every field has a default, so a TOML file only needs the values it wants
/// to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Logical width in screen units.
    pub width: u32,
    /// Logical height in screen units.
    pub height: u32,
    /// Title bar text.
    pub title: String,
    /// Fullscreen on the primary monitor.
    pub fullscreen: bool,
    /// Allow user-driven resizing.
    pub resizable: bool,
    /// Create without decorations.
    pub undecorated: bool,
    /// Request a transparent framebuffer.
    pub transparent: bool,
    /// Keep the window above all others.
    pub always_on_top: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Extra Window".to_string(),
            fullscreen: false,
            resizable: false,
            undecorated: false,
            transparent: false,
            always_on_top: false,
        }
    }
}

impl WindowConfig {
    /// Load a window description from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// The display-attribute set this configuration describes.
    #[must_use]
    pub fn flags(&self) -> WindowFlags {
        let mut flags = WindowFlags::empty();
        if self.fullscreen {
            flags |= WindowFlags::FULLSCREEN;
        }
        if self.resizable {
            flags |= WindowFlags::RESIZABLE;
        }
        if self.undecorated {
            flags |= WindowFlags::UNDECORATED;
        }
        if self.transparent {
            flags |= WindowFlags::TRANSPARENT;
        }
        if self.always_on_top {
            flags |= WindowFlags::ALWAYS_ON_TOP;
        }
        flags
    }
}
