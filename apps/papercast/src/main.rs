//! papercast - structure an academic paper and speak its math
//!
//! Reads extracted paper text from a file (or `-` for stdin) and prints the
//! canonical sections as JSON.

mod config;
mod report;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use papercast_core::PaperParser;
use papercast_llm::{LlmFrontMatterModel, LlmSettings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use report::Report;

#[derive(Debug, Parser)]
#[command(name = "papercast", version, about)]
struct Cli {
    /// Extracted paper text, or `-` to read stdin
    input: PathBuf,

    /// Config file (default: <config dir>/papercast/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the language model and use heuristic front-matter detection
    #[arg(long)]
    no_llm: bool,

    /// Print sections with math converted to spoken English
    #[arg(long)]
    speak: bool,

    /// Print compact single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    let raw_text = read_input(&cli.input)?;

    let parser = build_parser(&config, cli.no_llm);
    let paper = parser.parse(&raw_text);

    println!("{}", Report::new(&paper, cli.speak).to_json(cli.compact)?);
    Ok(())
}

fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
}

fn build_parser(config: &AppConfig, no_llm: bool) -> PaperParser {
    if no_llm {
        info!("Language model disabled, using heuristic front matter");
        return PaperParser::new(config.parser.clone());
    }

    let settings = LlmSettings::from_env_with(&config.llm);
    match LlmFrontMatterModel::new(settings) {
        Ok(model) => {
            info!(
                "Front matter via {} ({})",
                model.settings().provider,
                model
                    .settings()
                    .resolved_model()
                    .unwrap_or_else(|_| "unknown model".to_string())
            );
            PaperParser::with_model(config.parser.clone(), Box::new(model))
        }
        Err(e) => {
            warn!("Front-matter model unavailable ({}), using heuristics", e);
            PaperParser::new(config.parser.clone())
        }
    }
}
