//! Settings file (castmix.yaml) parsing.
//!
//! Settings supply defaults for CLI runs: the product and waste margin used
//! when neither the command line nor the saved state provides one, and
//! where the store file lives.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CastError, Result};
use crate::types::Product;

/// Settings file name looked up in the current directory.
pub const SETTINGS_FILENAME: &str = "castmix.yaml";

/// Settings loaded from castmix.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Product used when no product was ever selected.
    pub product: Option<Product>,

    /// Waste margin used when none was ever entered, in percent.
    pub waste: Option<f64>,

    /// Store file location.
    pub store: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CastError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `castmix.yaml` from `dir` if it exists, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILENAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading settings");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(content).map_err(|e| CastError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", SETTINGS_FILENAME)),
        })?;

        if let Some(waste) = settings.waste {
            if !waste.is_finite() || waste < 0.0 {
                return Err(CastError::Parse {
                    message: format!("Invalid waste margin: {}", waste),
                    help: Some("Waste must be zero or a positive percentage".to_string()),
                });
            }
        }

        Ok(settings)
    }
}
