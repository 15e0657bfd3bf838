//! folio CLI.
//!
//! Loads site config and content, then renders one page view as text.

use clap::Parser;
use folio_core::{init_logging, Catalog, CatalogError, ConfigError, SiteConfig};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod cli;
mod commands;

use crate::cli::{Cli, Command};

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Catalog(CatalogError),
    Logging(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Logging(message) => write!(f, "failed to initialize logging: {message}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Catalog(err) => Some(err),
            Self::Logging(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<CatalogError> for CliError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = SiteConfig::load(cli.config.as_deref())?;
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir).map_err(CliError::Logging)?;
    }

    let catalog = match config.content_path.as_deref() {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    info!(
        "event=cli_start module=cli status=ok version={}",
        folio_core::core_version()
    );

    match cli.command {
        Command::Work(args) => commands::run_work(&catalog, &config, &args),
        Command::Project { slug } => commands::run_project(&catalog, &slug)?,
        Command::Creations { category } => commands::run_creations(&catalog, &config, &category),
        Command::Music { play } => commands::run_music(&catalog, play.as_deref())?,
        Command::Tags { search } => commands::run_tags(&catalog, &search),
        Command::Sitemap { xml } => commands::run_sitemap(&catalog, &config, xml),
        Command::About => commands::run_about(&catalog),
    }
    Ok(())
}
