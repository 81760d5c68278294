//! View router: role-based screen navigation plus shared preview mode.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, info};

use lumiere_core::error::AppError;
use lumiere_core::events::{DomainEvent, NavigationEvent};
use lumiere_core::result::AppResult;
use lumiere_core::traits::EventSink;
use lumiere_entity::share::AccessResult;
use lumiere_entity::view::{Screen, UserRole, ViewMode, ViewState};

/// Receives requests to switch between normal navigation and shared preview.
pub trait ViewRouter {
    /// Show the shared/preview view for a resolved reference.
    fn show_shared(&mut self, access: &AccessResult);

    /// Return to normal role-based navigation.
    fn show_normal(&mut self);
}

/// Router holding the active role, screen, and view mode.
///
/// The screen is kept while a shared album is shown, so leaving preview
/// lands back where the viewer was.
pub struct ScreenRouter {
    role: UserRole,
    screen: Screen,
    mode: ViewMode,
    events: Option<Rc<dyn EventSink>>,
}

impl fmt::Debug for ScreenRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenRouter")
            .field("role", &self.role)
            .field("screen", &self.screen)
            .field("mode", &self.mode)
            .finish()
    }
}

impl ScreenRouter {
    /// Starts on the role's landing screen in normal mode.
    pub fn new(role: UserRole) -> Self {
        Self {
            role,
            screen: role.default_screen(),
            mode: ViewMode::Normal,
            events: None,
        }
    }

    /// Attach a sink that receives navigation events.
    pub fn with_event_sink(mut self, sink: Rc<dyn EventSink>) -> Self {
        self.events = Some(sink);
        self
    }

    /// The active role.
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// The active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The current mode.
    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    /// Snapshot of the externally observable view state.
    pub fn view_state(&self) -> ViewState {
        ViewState {
            screen: self.screen,
            mode: self.mode.clone(),
        }
    }

    /// Switches role and moves to its landing screen.
    ///
    /// Shared preview is left only through [`ViewRouter::show_normal`], so an
    /// open preview survives the switch.
    pub fn switch_role(&mut self, role: UserRole) {
        self.role = role;
        self.screen = role.default_screen();
        info!(role = %role, screen = %self.screen, "Role switched");
        self.emit(NavigationEvent::RoleSwitched {
            role: role.to_string(),
            screen: self.screen.to_string(),
        });
    }

    /// Moves to `screen`; the role's navigation must list it. The view mode
    /// is left as is.
    pub fn navigate(&mut self, screen: Screen) -> AppResult<()> {
        if !self.role.can_view(screen) {
            return Err(AppError::authorization(format!(
                "Role '{}' cannot open screen '{}'",
                self.role, screen
            )));
        }
        if self.screen != screen {
            self.screen = screen;
            debug!(screen = %screen, "Screen changed");
            self.emit(NavigationEvent::ScreenChanged {
                screen: screen.to_string(),
            });
        }
        Ok(())
    }

    fn emit(&self, event: NavigationEvent) {
        if let Some(ref sink) = self.events {
            sink.publish(DomainEvent::from(event));
        }
    }
}

impl ViewRouter for ScreenRouter {
    fn show_shared(&mut self, access: &AccessResult) {
        let entering = matches!(self.mode, ViewMode::Normal);
        self.mode = ViewMode::SharedPreview {
            access: access.clone(),
        };
        if entering {
            debug!(album_id = %access.album_id(), "Shared preview entered");
            self.emit(NavigationEvent::SharedPreviewEntered);
        }
    }

    fn show_normal(&mut self) {
        if matches!(self.mode, ViewMode::SharedPreview { .. }) {
            self.mode = ViewMode::Normal;
            debug!(screen = %self.screen, "Shared preview left");
            self.emit(NavigationEvent::SharedPreviewLeft);
        }
    }
}
