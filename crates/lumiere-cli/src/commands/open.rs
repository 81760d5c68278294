//! Open a location the way a viewer's browser would.

use clap::Args;
use serde::Serialize;
use url::Url;

use crate::output::{self, OutputFormat};
use lumiere_core::config::AppConfig;
use lumiere_core::error::AppError;
use lumiere_entity::share::AccessResult;
use lumiere_entity::view::{UserRole, ViewMode, ViewState};
use lumiere_service::{ScreenRouter, SessionState, ViewingSession};

use super::Context;

/// Arguments for the open command
#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Location to open, e.g. http://localhost:3000/?album=1
    pub url: String,

    /// Role of the viewer
    #[arg(short, long, default_value = "guest")]
    pub role: UserRole,

    /// Leave the shared preview right after opening
    #[arg(long)]
    pub exit: bool,
}

/// What a viewer sees after opening a location.
#[derive(Debug, Serialize)]
pub struct OpenReport {
    /// The opened location.
    pub location: Url,
    /// Role of the viewer.
    pub role: UserRole,
    /// Session state right after the location was observed.
    pub session: SessionState,
    /// Access decision shown in preview, if the location carried a reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessResult>,
    /// Final view state.
    pub view: ViewState,
    /// Location written back when leaving preview with `--exit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exited_to: Option<Url>,
}

/// Observes `args.url` with a fresh session and router.
pub fn report(args: &OpenArgs, ctx: &Context) -> Result<OpenReport, AppError> {
    let location = super::parse_location(&args.url)?;

    let mut router = ScreenRouter::new(args.role);
    let mut session = ViewingSession::new();
    let state = session
        .observe(&location, &ctx.controller, &ctx.store, &mut router)?
        .clone();

    let access = match router.mode() {
        ViewMode::SharedPreview { access } => Some(access.clone()),
        ViewMode::Normal => None,
    };
    let exited_to = args
        .exit
        .then(|| session.exit_preview(&location, &ctx.controller, &mut router));

    Ok(OpenReport {
        location,
        role: router.role(),
        session: state,
        access,
        view: router.view_state(),
        exited_to,
    })
}

/// Execute the open command
pub fn execute(args: &OpenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let ctx = Context::build(config)?;
    let report = report(args, &ctx)?;

    match format {
        OutputFormat::Json => output::print_item(&report, format),
        OutputFormat::Table => {
            output::print_kv("Role", report.role.label());
            output::print_kv("Screen", report.view.screen.label());
            output::print_kv("Session", report.session.name());
            match &report.access {
                Some(access) if access.is_granted() => output::print_success(&access.message()),
                Some(access) => output::print_warning(&access.message()),
                None => output::print_kv("Mode", "normal navigation"),
            }
            if let Some(cleared) = &report.exited_to {
                output::print_kv("Exited to", cleared.as_str());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_core::error::ErrorKind;

    fn ctx() -> Context {
        Context::build(&AppConfig::default()).unwrap()
    }

    fn args(url: &str, exit: bool) -> OpenArgs {
        OpenArgs {
            url: url.to_string(),
            role: UserRole::Guest,
            exit,
        }
    }

    #[test]
    fn test_unshared_sample_album_is_forbidden() {
        let report = report(&args("http://localhost:3000/?album=3", false), &ctx()).unwrap();
        assert_eq!(report.session.name(), "forbidden");
        assert!(report.view.is_shared_preview());
        assert_eq!(
            report.access.unwrap().message(),
            "\"Summer Collection\" is not currently shared"
        );
        assert!(report.exited_to.is_none());
    }

    #[test]
    fn test_exit_returns_to_base_url() {
        let ctx = ctx();
        let report = report(&args("http://localhost:3000/?album=1", true), &ctx).unwrap();
        assert_eq!(report.session.name(), "granted");
        assert_eq!(report.exited_to.as_ref(), Some(ctx.controller.base_url()));
        assert!(!report.view.is_shared_preview());
    }

    #[test]
    fn test_plain_location_stays_normal() {
        let report = report(&args("http://localhost:3000/?lang=fr", false), &ctx()).unwrap();
        assert_eq!(report.session, SessionState::Idle);
        assert!(report.access.is_none());
    }

    #[test]
    fn test_malformed_reference_is_an_error() {
        let err = report(&args("http://localhost:3000/?album=abc", false), &ctx()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedReference);
    }
}
