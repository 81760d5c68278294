//! Sharing toggles and link generation.

use clap::{Args, Subcommand};
use serde::Serialize;
use url::Url;

use crate::output::{self, AlbumRow, OutputFormat};
use lumiere_core::config::AppConfig;
use lumiere_core::error::AppError;
use lumiere_core::types::AlbumId;
use lumiere_service::AlbumStore;

use super::Context;

/// Arguments for share commands
#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Share subcommand
    #[command(subcommand)]
    pub command: ShareCommand,
}

/// Share subcommands
#[derive(Debug, Subcommand)]
pub enum ShareCommand {
    /// Turn sharing on for an album
    Enable {
        /// Album ID
        id: AlbumId,
    },
    /// Turn sharing off for an album
    Disable {
        /// Album ID
        id: AlbumId,
    },
    /// Print the share link for an album
    Link {
        /// Album ID
        id: AlbumId,
    },
}

/// A minted share link and what a viewer opening it would run into.
#[derive(Debug, Serialize)]
pub struct LinkReport {
    /// The linked album.
    pub album_id: AlbumId,
    /// The link to hand out.
    pub url: Url,
    /// Set when the link will not show photos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Mints the link for `id`. Minting never checks the album, so the
/// report warns when it is missing or not shared.
pub fn link(ctx: &Context, id: AlbumId) -> LinkReport {
    let warning = match ctx.store.find(id) {
        Some(album) if !album.share_enabled => Some(format!(
            "\"{}\" is not shared; this link shows an access notice",
            album.title
        )),
        Some(_) => None,
        None => Some(format!("Album {id} does not exist")),
    };
    LinkReport {
        album_id: id,
        url: ctx.controller.share_url(id),
        warning,
    }
}

/// Sets the sharing flag and returns the updated album row.
pub fn toggle(ctx: &mut Context, id: AlbumId, enabled: bool) -> Result<AlbumRow, AppError> {
    let album = if enabled {
        ctx.controller.enable_sharing(&mut ctx.store, id)?
    } else {
        ctx.controller.disable_sharing(&mut ctx.store, id)?
    };
    Ok(AlbumRow::from(album.as_ref()))
}

/// Execute share commands
pub fn execute(args: &ShareArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let mut ctx = Context::build(config)?;

    match &args.command {
        ShareCommand::Enable { id } => {
            let row = toggle(&mut ctx, *id, true)?;
            print_album(&row, "Sharing enabled", format);
        }
        ShareCommand::Disable { id } => {
            let row = toggle(&mut ctx, *id, false)?;
            print_album(&row, "Sharing disabled", format);
        }
        ShareCommand::Link { id } => {
            let report = link(&ctx, *id);
            match format {
                OutputFormat::Json => output::print_item(&report, format),
                OutputFormat::Table => {
                    println!("{}", report.url);
                    if let Some(warning) = &report.warning {
                        output::print_warning(warning);
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_album(row: &AlbumRow, msg: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_item(row, format),
        OutputFormat::Table => {
            output::print_success(&format!("{msg} for \"{}\"", row.title));
            output::print_kv("Status", &row.status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_core::error::ErrorKind;

    fn ctx() -> Context {
        Context::build(&AppConfig::default()).unwrap()
    }

    fn id(n: u64) -> AlbumId {
        AlbumId::new(n).unwrap()
    }

    #[test]
    fn test_link_for_shared_album_has_no_warning() {
        let report = link(&ctx(), id(1));
        assert_eq!(report.url.as_str(), "http://localhost:3000/?album=1");
        assert!(report.warning.is_none());
    }

    #[test]
    fn test_link_warns_for_unshared_album() {
        let report = link(&ctx(), id(3));
        assert_eq!(report.url.as_str(), "http://localhost:3000/?album=3");
        assert!(report.warning.unwrap().contains("Summer Collection"));
    }

    #[test]
    fn test_link_warns_for_missing_album() {
        let report = link(&ctx(), id(99));
        assert_eq!(report.url.as_str(), "http://localhost:3000/?album=99");
        assert_eq!(report.warning.as_deref(), Some("Album 99 does not exist"));
    }

    #[test]
    fn test_toggle_updates_status() {
        let mut ctx = ctx();
        let row = toggle(&mut ctx, id(5), true).unwrap();
        assert!(row.shared);
        assert_eq!(row.status, "Active");

        let row = toggle(&mut ctx, id(5), false).unwrap();
        assert!(!row.shared);
        assert_eq!(row.status, "Draft");

        let err = toggle(&mut ctx, id(99), true).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
