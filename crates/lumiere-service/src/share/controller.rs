//! The share link controller: sharing toggles, link synthesis, and access
//! resolution over a caller-supplied album store.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, info};
use url::Url;

use lumiere_core::config::share::ShareConfig;
use lumiere_core::error::AppError;
use lumiere_core::events::{DomainEvent, ShareEvent};
use lumiere_core::result::AppResult;
use lumiere_core::traits::EventSink;
use lumiere_core::types::AlbumId;
use lumiere_entity::album::{Album, AlbumStatus, UpdateAlbum};
use lumiere_entity::share::{AccessResult, ShareReference};

use super::access::AccessService;
use super::link::LinkService;
use crate::album::AlbumStore;

/// Translates between an album's sharing flag and the externally
/// observable link, and decides what an inbound reference grants.
///
/// Revocation is enforced when a reference is resolved: disabling sharing
/// does not touch links already handed out.
pub struct ShareLinkController {
    /// Location codec.
    links: LinkService,
    /// Access policy.
    access: AccessService,
    /// Application base URL for synthesized links.
    base_url: Url,
    /// Optional sink for share events.
    events: Option<Rc<dyn EventSink>>,
}

impl fmt::Debug for ShareLinkController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareLinkController")
            .field("base_url", &self.base_url.as_str())
            .field("events", &self.events.is_some())
            .finish()
    }
}

impl ShareLinkController {
    /// Creates a controller from configuration.
    pub fn new(config: &ShareConfig) -> AppResult<Self> {
        Ok(Self::with_base_url(config.base_url()?))
    }

    /// Creates a controller for an already parsed base URL.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            links: LinkService::new(),
            access: AccessService::new(),
            base_url,
            events: None,
        }
    }

    /// Attach a sink that receives every share event.
    pub fn with_event_sink(mut self, sink: Rc<dyn EventSink>) -> Self {
        self.events = Some(sink);
        self
    }

    /// The application base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Turns sharing on. Idempotent; `NotFound` if the album is absent.
    pub fn enable_sharing(
        &self,
        store: &mut dyn AlbumStore,
        album_id: AlbumId,
    ) -> AppResult<Arc<Album>> {
        self.set_sharing(store, album_id, true)
    }

    /// Turns sharing off. Idempotent; `NotFound` if the album is absent.
    ///
    /// References already handed out stay valid tokens; they resolve to
    /// `Forbidden` from now on.
    pub fn disable_sharing(
        &self,
        store: &mut dyn AlbumStore,
        album_id: AlbumId,
    ) -> AppResult<Arc<Album>> {
        self.set_sharing(store, album_id, false)
    }

    fn set_sharing(
        &self,
        store: &mut dyn AlbumStore,
        album_id: AlbumId,
        enabled: bool,
    ) -> AppResult<Arc<Album>> {
        let current = store
            .find(album_id)
            .ok_or_else(|| AppError::not_found(format!("Album {album_id} not found")))?;

        if current.share_enabled == enabled && current.status == AlbumStatus::for_sharing(enabled) {
            debug!(album_id = %album_id, enabled, "Sharing already in requested state");
            return Ok(current);
        }

        let album = store.update(album_id, &UpdateAlbum::sharing(enabled))?;
        info!(album_id = %album_id, enabled, "Album sharing toggled");
        self.emit(if enabled {
            ShareEvent::SharingEnabled { album_id }
        } else {
            ShareEvent::SharingDisabled { album_id }
        });
        Ok(album)
    }

    /// Mints the reference for an album. Never fails: whether the album
    /// exists or is shared is only checked on resolve.
    pub fn mint_reference(&self, album_id: AlbumId) -> ShareReference {
        let reference = self.links.mint_reference(album_id);
        debug!(album_id = %album_id, "Share reference minted");
        self.emit(ShareEvent::ReferenceMinted { album_id });
        reference
    }

    /// The link a photographer hands out: the base URL carrying the reference.
    pub fn share_url(&self, album_id: AlbumId) -> Url {
        let reference = self.mint_reference(album_id);
        self.links.encode_into_location(&reference, &self.base_url)
    }

    /// See [`LinkService::encode_into_location`].
    pub fn encode_into_location(&self, reference: &ShareReference, location: &Url) -> Url {
        self.links.encode_into_location(reference, location)
    }

    /// See [`LinkService::decode_from_location`].
    pub fn decode_from_location(&self, location: &Url) -> AppResult<Option<ShareReference>> {
        self.links.decode_from_location(location)
    }

    /// See [`LinkService::clear_from_location`].
    pub fn clear_from_location(&self, location: &Url) -> Url {
        self.links.clear_from_location(location)
    }

    /// Checks a reference against the store's current contents.
    pub fn resolve_access(&self, reference: &ShareReference, store: &dyn AlbumStore) -> AccessResult {
        let result = self.access.resolve_access(reference, store);
        self.emit(ShareEvent::AccessResolved {
            album_id: reference.album_id,
            outcome: result.outcome(),
        });
        result
    }

    /// Leaves shared preview for `reference`: records the exit and returns
    /// `location` without its reference.
    pub fn exit_preview(&self, reference: &ShareReference, location: &Url) -> Url {
        info!(album_id = %reference.album_id, "Shared preview exited");
        self.emit(ShareEvent::PreviewExited {
            album_id: reference.album_id,
        });
        self.links.clear_from_location(location)
    }

    fn emit(&self, event: ShareEvent) {
        if let Some(ref sink) = self.events {
            sink.publish(DomainEvent::from(event));
        }
    }
}
