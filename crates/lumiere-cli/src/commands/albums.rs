//! Album listing commands.

use clap::{Args, Subcommand};

use crate::output::{self, AlbumRow, OutputFormat};
use lumiere_core::config::AppConfig;
use lumiere_core::error::AppError;
use lumiere_core::types::AlbumId;
use lumiere_service::AlbumStore;

use super::Context;

/// Arguments for album commands
#[derive(Debug, Args)]
pub struct AlbumsArgs {
    /// Album subcommand
    #[command(subcommand)]
    pub command: AlbumsCommand,
}

/// Album subcommands
#[derive(Debug, Subcommand)]
pub enum AlbumsCommand {
    /// List albums
    List {
        /// Only albums whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show album details with its photos
    Show {
        /// Album ID
        id: AlbumId,
    },
}

/// Execute album commands
pub fn execute(args: &AlbumsArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let ctx = Context::build(config)?;

    match &args.command {
        AlbumsCommand::List { search } => {
            let albums = match search {
                Some(query) => ctx.store.search(query),
                None => ctx.store.list(),
            };
            let rows: Vec<AlbumRow> = albums.iter().map(|a| AlbumRow::from(a.as_ref())).collect();
            output::print_list(&rows, format);
        }
        AlbumsCommand::Show { id } => {
            let album = ctx
                .store
                .find(*id)
                .ok_or_else(|| AppError::not_found(format!("Album {id} not found")))?;
            match format {
                OutputFormat::Json => output::print_item(album.as_ref(), format),
                OutputFormat::Table => {
                    output::print_kv("Title", &album.title);
                    output::print_kv("Status", album.status.as_str());
                    output::print_kv("Shared", if album.share_enabled { "yes" } else { "no" });
                    output::print_kv("Photos", &album.photo_count().to_string());
                    output::print_kv("Share link", ctx.controller.share_url(*id).as_str());
                }
            }
        }
    }

    Ok(())
}
