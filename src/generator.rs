//! The stylesheet accumulator.
//!
//! A [`Generator`] owns the growing stylesheet text and the ordered list of
//! element records. Both are append-only: record `n` always corresponds to
//! the `n`-th block after the header.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::GeneratorConfig;
use crate::element::{ElementRecord, ElementSpec, ElementType, Properties};
use crate::error::{Result, StyleError};
use crate::{ident, page, templates};

/// File name `persist` writes inside the output directory.
pub const OUTPUT_FILE: &str = "generated_styles.css";

#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    header: String,
    stylesheet: String,
    elements: Vec<ElementRecord>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::build(GeneratorConfig::default())
    }
}

impl Generator {
    /// Generator with default settings that persists into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::build(GeneratorConfig::with_output_dir(output_dir))
    }

    /// Generator for a caller-supplied config. The project name and palette
    /// end up in CSS text, so the config is validated first.
    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    // Callers guarantee `config` has passed `validate`.
    fn build(config: GeneratorConfig) -> Self {
        let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let header = templates::header(&config.project_name, &config.palette, &generated_at);
        Self {
            stylesheet: header.clone(),
            header,
            config,
            elements: Vec::new(),
        }
    }

    /// The three elements the demo page starts with.
    pub fn with_demo_elements(config: GeneratorConfig) -> Result<Self> {
        let mut generator = Self::with_config(config)?;
        let primary = generator
            .config
            .palette
            .first()
            .cloned()
            .unwrap_or_else(|| templates::DEFAULT_PALETTE[0].to_string());
        generator.add_element(
            ElementType::Button,
            Properties::new()
                .with("bg_color", &primary)
                .with("text_color", templates::DEFAULT_TEXT_COLOR),
        );
        generator.add_element(
            ElementType::Input,
            Properties::new().with("border_color", templates::DEFAULT_BORDER_COLOR),
        );
        generator.add_element(ElementType::Card, Properties::new());
        Ok(generator)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The fixed block every stylesheet starts with.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Records in insertion order.
    pub fn elements(&self) -> &[ElementRecord] {
        &self.elements
    }

    /// Raw, unescaped stylesheet text.
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Add an element of an already-validated type. Never fails.
    pub fn add_element(&mut self, kind: ElementType, properties: Properties) -> &ElementRecord {
        let id = ident::generate_id(&self.config.project_name, kind);
        let css = templates::render(kind, &id, &properties, &self.config.palette);
        tracing::debug!(%id, %kind, "added element");

        self.stylesheet.push('\n');
        self.stylesheet.push_str(&css);
        let index = self.elements.len();
        self.elements.push(ElementRecord {
            id,
            kind,
            properties,
            css,
        });
        &self.elements[index]
    }

    /// Add an element by type name. Unknown names leave the generator untouched.
    pub fn add_named(&mut self, kind: &str, properties: Properties) -> Result<&ElementRecord> {
        let kind = kind.parse::<ElementType>().map_err(|e| {
            tracing::warn!(kind, "rejected element type");
            e
        })?;
        Ok(self.add_element(kind, properties))
    }

    /// Add every spec in order. Invalid types are skipped and returned.
    pub fn add_specs(&mut self, specs: &[ElementSpec]) -> Vec<StyleError> {
        let mut skipped = Vec::new();
        for spec in specs {
            if let Err(e) = self.add_named(&spec.kind, spec.properties.clone()) {
                skipped.push(e);
            }
        }
        skipped
    }

    /// The stylesheet, HTML-escaped for embedding in a document.
    pub fn get_css_code(&self) -> String {
        page::html_escape(&self.stylesheet)
    }

    /// Element records as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.elements)?)
    }

    /// Write the raw stylesheet to `<output_dir>/generated_styles.css`.
    pub fn persist(&self) -> Result<PathBuf> {
        self.persist_to(&self.config.output_dir)
    }

    /// Write the raw stylesheet into `dir`, creating it if needed.
    /// Returns the written path.
    pub fn persist_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| StyleError::io(dir, e))?;

        let path = dir.join(OUTPUT_FILE);
        fs::write(&path, &self.stylesheet).map_err(|e| StyleError::io(&path, e))?;
        set_readable(&path)?;

        tracing::info!(path = %path.display(), bytes = self.stylesheet.len(), "saved stylesheet");
        Ok(path)
    }

    /// Full demo page embedding this stylesheet.
    pub fn generate_html_interface(&self) -> String {
        page::build_page(self)
    }
}

#[cfg(unix)]
fn set_readable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
        .map_err(|e| StyleError::io(path, e))
}

#[cfg(not(unix))]
fn set_readable(_path: &Path) -> Result<()> {
    Ok(())
}
