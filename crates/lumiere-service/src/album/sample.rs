//! Sample albums for demos.

use lumiere_core::result::AppResult;
use lumiere_entity::album::{AlbumStatus, CreateAlbum, NewPhoto, UpdateAlbum};

use super::memory::InMemoryAlbumStore;
use super::store::AlbumStore;

const PLACEHOLDER_COLORS: [&str; 6] = ["amber", "rose", "sky", "emerald", "violet", "slate"];

const PHOTOS_PER_ALBUM: u32 = 12;

const SAMPLE_ALBUMS: [(&str, &str, AlbumStatus); 6] = [
    (
        "Anderson Wedding",
        "A celebration of love at the Anderson estate. Golden hour portraits, candid moments, and ceremony coverage.",
        AlbumStatus::Active,
    ),
    ("Corporate Gala 2026", "", AlbumStatus::Active),
    ("Summer Collection", "", AlbumStatus::Draft),
    ("Lakeside Retreat", "", AlbumStatus::Active),
    ("Fashion Week Milano", "", AlbumStatus::Expired),
    ("Birthday Celebration", "", AlbumStatus::Active),
];

/// Placeholder photos named `IMG_4200.jpg` onwards.
pub fn placeholder_photos(count: u32) -> Vec<NewPhoto> {
    (0..count)
        .map(|i| {
            NewPhoto::named(
                format!("IMG_{}.jpg", 4200 + i),
                PLACEHOLDER_COLORS[i as usize % PLACEHOLDER_COLORS.len()],
            )
        })
        .collect()
}

impl InMemoryAlbumStore {
    /// A store seeded with the sample albums; ids run from 1 to 6.
    pub fn sample() -> AppResult<Self> {
        let mut store = Self::new();
        for (title, description, status) in SAMPLE_ALBUMS {
            let album = store.create(CreateAlbum {
                title: title.to_string(),
                description: description.to_string(),
                share_enabled: status == AlbumStatus::Active,
                photos: placeholder_photos(PHOTOS_PER_ALBUM),
            })?;
            if album.status != status {
                store.update(
                    album.id,
                    &UpdateAlbum {
                        status: Some(status),
                        ..UpdateAlbum::default()
                    },
                )?;
            }
        }
        Ok(store)
    }
}
