//! Generator configuration, loadable from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::element::is_safe_color;
use crate::error::{Result, StyleError};
use crate::templates::DEFAULT_PALETTE;

pub const DEFAULT_PROJECT: &str = "stylegen";
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prefix of every generated element id.
    pub project_name: String,
    /// Directory `persist` writes into.
    pub output_dir: PathBuf,
    /// Colors for the `:root` custom properties; the first is the button default.
    pub palette: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Read and validate a JSON config file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| StyleError::config(&format!("cannot read '{}': {e}", path.display())))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.project_name.is_empty() {
            return Err(StyleError::config("project_name must not be empty"));
        }
        if !self
            .project_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StyleError::config(&format!(
                "project_name '{}' may only contain letters, digits, '_' and '-'",
                self.project_name
            )));
        }
        if self.palette.is_empty() {
            return Err(StyleError::config("palette must contain at least one color"));
        }
        if let Some(bad) = self.palette.iter().find(|c| !is_safe_color(c)) {
            return Err(StyleError::config(&format!("palette entry '{bad}' is not a color")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GeneratorConfig::default();
        config.validate().expect("default config should validate");
        assert_eq!(config.output_dir, PathBuf::from("downloads"));
        assert_eq!(config.palette[0], "#3498db");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = GeneratorConfig::from_json(r#"{"project_name": "acme"}"#).unwrap();
        assert_eq!(config.project_name, "acme");
        assert_eq!(config.palette.len(), 6);
    }

    #[test]
    fn rejects_bad_project_name() {
        let err = GeneratorConfig::from_json(r#"{"project_name": "a b"}"#).unwrap_err();
        assert!(matches!(err, StyleError::Config(_)));
        assert!(GeneratorConfig::from_json(r#"{"project_name": ""}"#).is_err());
    }

    #[test]
    fn rejects_bad_palette() {
        assert!(GeneratorConfig::from_json(r#"{"palette": []}"#).is_err());
        assert!(GeneratorConfig::from_json(r##"{"palette": ["#fff", "blue;"]}"##).is_err());
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = GeneratorConfig::from_json("{").unwrap_err();
        assert!(matches!(err, StyleError::Json(_)));
    }
}
