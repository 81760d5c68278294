//! CLI command definitions and dispatch.

pub mod albums;
pub mod config;
pub mod matching;
pub mod open;
pub mod share;

use clap::{Parser, Subcommand};
use tracing::debug;
use url::Url;

use crate::output::OutputFormat;
use lumiere_core::config::AppConfig;
use lumiere_core::error::AppError;
use lumiere_service::{InMemoryAlbumStore, ShareLinkController};

/// Lumiere - shared photo album links
#[derive(Debug, Parser)]
#[command(name = "lumiere", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Album listing
    Albums(albums::AlbumsArgs),
    /// Sharing toggles and link generation
    Share(share::ShareArgs),
    /// Open a location as a viewer would
    Open(open::OpenArgs),
    /// Find yourself in a shared album
    Match(matching::MatchArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Albums(args) => albums::execute(args, &config, self.format),
            Commands::Share(args) => share::execute(args, &config, self.format),
            Commands::Open(args) => open::execute(args, &config, self.format),
            Commands::Match(args) => matching::execute(args, &config, self.format),
            Commands::Config(args) => config::execute(args, &config, &self.config, self.format),
        }
    }
}

/// Everything a command needs to act on albums.
pub struct Context {
    pub store: InMemoryAlbumStore,
    pub controller: ShareLinkController,
}

impl Context {
    /// Builds a fresh store and controller. Nothing persists between runs.
    pub fn build(config: &AppConfig) -> Result<Self, AppError> {
        let store = if config.demo.sample_data {
            InMemoryAlbumStore::sample()?
        } else {
            InMemoryAlbumStore::new()
        };
        let controller = ShareLinkController::new(&config.share)?;
        debug!(albums = store.len(), base_url = %controller.base_url(), "CLI context ready");
        Ok(Self { store, controller })
    }
}

/// Helper: parse a location argument
pub fn parse_location(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw).map_err(|e| AppError::validation(format!("Invalid location '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_entity::view::UserRole;

    #[test]
    fn test_parse_open_with_role() {
        let cli = Cli::try_parse_from([
            "lumiere",
            "--format",
            "json",
            "open",
            "http://localhost:3000/?album=1",
            "--role",
            "photographer",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Open(args) => {
                assert_eq!(args.role, UserRole::Photographer);
                assert!(!args.exit);
            }
            other => panic!("expected open, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_album_id_is_rejected() {
        assert!(Cli::try_parse_from(["lumiere", "share", "link", "0"]).is_err());
    }

    #[test]
    fn test_context_follows_sample_data_flag() {
        let mut config = AppConfig::default();
        assert_eq!(Context::build(&config).unwrap().store.len(), 6);

        config.demo.sample_data = false;
        assert!(Context::build(&config).unwrap().store.is_empty());
    }

    #[test]
    fn test_parse_location_rejects_relative() {
        let err = parse_location("?album=1").unwrap_err();
        assert_eq!(err.kind, lumiere_core::error::ErrorKind::Validation);
    }
}
