//! Shared test helpers for scenario tests.

#![allow(dead_code)]

use std::rc::Rc;

use url::Url;

use lumiere_core::config::share::ShareConfig;
use lumiere_core::types::AlbumId;
use lumiere_entity::album::CreateAlbum;
use lumiere_entity::view::UserRole;
use lumiere_service::album::sample::placeholder_photos;
use lumiere_service::{
    AlbumStore, InMemoryAlbumStore, MemoryEventSink, ScreenRouter, ShareLinkController,
    ViewingSession,
};

/// Everything a photographer and a guest share in one process.
pub struct TestApp {
    /// Album store.
    pub store: InMemoryAlbumStore,
    /// Share controller wired to `events`.
    pub controller: ShareLinkController,
    /// Guest's router.
    pub router: ScreenRouter,
    /// Guest's viewing session.
    pub session: ViewingSession,
    /// Recorded share and navigation events.
    pub events: Rc<MemoryEventSink>,
}

impl TestApp {
    /// A fresh app with an empty store and a guest viewer.
    pub fn new() -> Self {
        let events = Rc::new(MemoryEventSink::new());
        let controller = ShareLinkController::new(&ShareConfig {
            base_url: "https://app/".to_string(),
        })
        .expect("valid base url")
        .with_event_sink(events.clone());
        let router = ScreenRouter::new(UserRole::Guest).with_event_sink(events.clone());

        Self {
            store: InMemoryAlbumStore::new(),
            controller,
            router,
            session: ViewingSession::new(),
            events,
        }
    }

    /// Creates albums with these settings until one with `id` exists.
    pub fn album_with_id(&mut self, id: u64, title: &str, share_enabled: bool) -> AlbumId {
        loop {
            let album = self
                .store
                .create(CreateAlbum {
                    title: title.to_string(),
                    share_enabled,
                    photos: placeholder_photos(4),
                    ..CreateAlbum::default()
                })
                .expect("create album");
            if album.id.get() >= id {
                return album.id;
            }
        }
    }
}

/// Parse a URL literal.
pub fn url(s: &str) -> Url {
    Url::parse(s).expect("valid url")
}

/// Album id literal.
pub fn album_id(id: u64) -> AlbumId {
    AlbumId::new(id).expect("non-zero id")
}
