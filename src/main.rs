use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stylegen::{ElementSpec, Generator, GeneratorConfig};

#[derive(Parser)]
#[command(name = "stylegen", version)]
#[command(about = "stylegen — CSS for common UI elements, plus a drag-and-drop preview page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file (project_name, output_dir, palette)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Project name used as the element id prefix
    #[arg(long, global = true)]
    project: Option<String>,

    /// Directory the stylesheet is saved into
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct ElementArgs {
    /// Element to add, as type[:key=value,...] (repeatable)
    #[arg(short = 'e', long = "element")]
    elements: Vec<ElementSpec>,

    /// JSON file holding a list of {"type", "properties"} objects
    #[arg(long)]
    from: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the generated stylesheet, or save it with --save
    Css {
        #[command(flatten)]
        elements: ElementArgs,

        /// Write generated_styles.css into the output directory
        #[arg(long)]
        save: bool,
    },

    /// Emit the HTML preview page
    Page {
        #[command(flatten)]
        elements: ElementArgs,

        /// Write the page to a file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Print the element records as JSON
    Elements {
        #[command(flatten)]
        elements: ElementArgs,
    },

    /// Serve the demo page over HTTP
    Serve {
        /// Server port
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "stylegen=debug" } else { "stylegen=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Css { elements, save } => {
            let generator = build_generator(config, &elements)?;
            if save {
                let path = generator.persist()?;
                eprintln!(
                    "wrote CSS to {} ({} bytes)",
                    path.display(),
                    generator.stylesheet().len()
                );
                println!("{}", path.display());
            } else {
                print!("{}", generator.stylesheet());
            }
        }

        Commands::Page { elements, o } => {
            let generator = build_generator(config, &elements)?;
            let html = generator.generate_html_interface();
            if let Some(out_path) = o {
                fs::write(&out_path, &html)
                    .with_context(|| format!("cannot write '{}'", out_path.display()))?;
                eprintln!("wrote HTML to {} ({} bytes)", out_path.display(), html.len());
            } else {
                print!("{html}");
            }
        }

        Commands::Elements { elements } => {
            let generator = build_generator(config, &elements)?;
            println!("{}", generator.to_json()?);
        }

        Commands::Serve { port } => {
            stylegen::server::run_server(port, config)
                .map_err(|e| anyhow::anyhow!("server failed: {e}"))?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(project) = &cli.project {
        config.project_name = project.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Demo elements when none were requested; otherwise file specs followed
/// by command-line specs, skipping unknown types with a warning.
fn build_generator(config: GeneratorConfig, args: &ElementArgs) -> Result<Generator> {
    let mut specs = match &args.from {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("cannot read '{}'", path.display()))?;
            ElementSpec::list_from_json(&json)
                .with_context(|| format!("cannot parse '{}'", path.display()))?
        }
        None => Vec::new(),
    };
    specs.extend(args.elements.iter().cloned());

    if specs.is_empty() {
        return Ok(Generator::with_demo_elements(config)?);
    }

    let (generator, skipped) = stylegen::generate(config, &specs)?;
    for e in &skipped {
        eprintln!("warning: {e}, skipped");
    }
    Ok(generator)
}
