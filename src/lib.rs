pub mod config;
pub mod element;
pub mod error;
pub mod generator;
pub mod ident;
pub mod page;
pub mod server;
pub mod templates;

pub use config::GeneratorConfig;
pub use element::{ElementRecord, ElementSpec, ElementType, Properties};
pub use error::{Result, StyleError};
pub use generator::{Generator, OUTPUT_FILE};

/// Build a stylesheet from element specs. Specs with unknown types are
/// skipped; their errors are returned alongside the generator.
pub fn generate(config: GeneratorConfig, specs: &[ElementSpec]) -> Result<(Generator, Vec<StyleError>)> {
    let mut generator = Generator::with_config(config)?;
    let skipped = generator.add_specs(specs);
    Ok((generator, skipped))
}

/// Build the demo page: the default button, input and card.
pub fn demo_page(config: GeneratorConfig) -> Result<String> {
    Ok(Generator::with_demo_elements(config)?.generate_html_interface())
}
