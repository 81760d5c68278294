//! Face-match search over a shared album.

use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::output::{self, MatchRow, OutputFormat};
use lumiere_core::config::AppConfig;
use lumiere_core::config::matching::MatchingConfig;
use lumiere_core::error::AppError;
use lumiere_service::{FaceMatchService, MatchScorer, PhotoMatch, RandomScorer};

use super::Context;

/// Arguments for the match command
#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Share link of the album to search
    pub url: String,

    /// Seed for reproducible confidences
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Resolves the share link and searches the album it grants.
pub fn find_matches(
    args: &MatchArgs,
    ctx: &Context,
    config: &MatchingConfig,
) -> Result<Vec<PhotoMatch>, AppError> {
    let location = super::parse_location(&args.url)?;
    let reference = ctx
        .controller
        .decode_from_location(&location)?
        .ok_or_else(|| AppError::validation(format!("'{location}' is not a share link")))?;
    let access = ctx.controller.resolve_access(&reference, &ctx.store);

    let mut scorer: Box<dyn MatchScorer> = match args.seed {
        Some(seed) => Box::new(RandomScorer::with_rng(StdRng::seed_from_u64(seed))),
        None => Box::new(RandomScorer::new()),
    };
    FaceMatchService::new(config.clone()).search(&access, scorer.as_mut())
}

/// Execute the match command
pub fn execute(args: &MatchArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let ctx = Context::build(config)?;
    let matches = find_matches(args, &ctx, &config.matching)?;

    let rows: Vec<MatchRow> = matches.iter().map(MatchRow::from).collect();
    output::print_list(&rows, format);
    if format == OutputFormat::Table && !rows.is_empty() {
        output::print_success(&format!("Found you in {} photos", rows.len()));
    }

    Ok(())
}
