//! Viewing session state machine.
//!
//! `Idle -> AwaitingResolve -> {Forbidden | NotFound | Granted}`, and back
//! to `Idle` on an explicit exit or when the location stops carrying a
//! reference. Every observed location is resolved afresh against the
//! store; an already granted snapshot is never revoked retroactively.

use tracing::{debug, warn};
use url::Url;

use lumiere_core::error::AppError;
use lumiere_core::result::AppResult;
use lumiere_entity::share::ShareReference;

use super::state::SessionState;
use crate::album::AlbumStore;
use crate::navigation::ViewRouter;
use crate::share::ShareLinkController;

/// A single viewer's session, driven by location changes.
#[derive(Debug, Clone)]
pub struct ViewingSession {
    state: SessionState,
}

impl ViewingSession {
    /// A session with no reference observed yet.
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// The current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Handles a location-change notification.
    ///
    /// A location carrying a reference is resolved and the router is
    /// switched to shared preview. A location without one returns the
    /// session to `Idle`. A malformed reference also returns to `Idle`
    /// and is reported as a `MalformedReference` error.
    pub fn observe(
        &mut self,
        location: &Url,
        controller: &ShareLinkController,
        store: &dyn AlbumStore,
        router: &mut dyn ViewRouter,
    ) -> AppResult<&SessionState> {
        match controller.decode_from_location(location) {
            Ok(Some(reference)) => {
                self.begin(reference);
                self.resolve(controller, store, router)
            }
            Ok(None) => {
                self.reset(router);
                Ok(&self.state)
            }
            Err(e) => {
                warn!(location = %location, error = %e, "Ignoring malformed share reference");
                self.reset(router);
                Err(e)
            }
        }
    }

    /// Records an observed reference; the session awaits resolution.
    pub fn begin(&mut self, reference: ShareReference) {
        self.transition(SessionState::AwaitingResolve { reference });
    }

    /// Resolves the awaited reference against the store's current state.
    pub fn resolve(
        &mut self,
        controller: &ShareLinkController,
        store: &dyn AlbumStore,
        router: &mut dyn ViewRouter,
    ) -> AppResult<&SessionState> {
        let SessionState::AwaitingResolve { reference } = self.state else {
            return Err(AppError::validation(format!(
                "No share reference awaiting resolution (state: {})",
                self.state.name()
            )));
        };

        let access = controller.resolve_access(&reference, store);
        router.show_shared(&access);
        self.transition(SessionState::resolved(reference, access));
        Ok(&self.state)
    }

    /// Explicitly leaves shared preview.
    ///
    /// Returns `location` with the reference removed, for the host to
    /// write back to its history.
    pub fn exit_preview(
        &mut self,
        location: &Url,
        controller: &ShareLinkController,
        router: &mut dyn ViewRouter,
    ) -> Url {
        let cleared = match self.state.reference() {
            Some(reference) => controller.exit_preview(reference, location),
            None => controller.clear_from_location(location),
        };
        self.reset(router);
        cleared
    }

    fn reset(&mut self, router: &mut dyn ViewRouter) {
        if self.state != SessionState::Idle {
            router.show_normal();
            self.transition(SessionState::Idle);
        }
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = self.state.name(), to = next.name(), "Viewing session transition");
        self.state = next;
    }
}

impl Default for ViewingSession {
    fn default() -> Self {
        Self::new()
    }
}
