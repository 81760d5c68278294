//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use lumiere_entity::album::Album;
use lumiere_service::PhotoMatch;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<16} {}", format!("{}:", key), value);
}

/// One album as a table row.
#[derive(Debug, Serialize, Tabled)]
pub struct AlbumRow {
    /// Album id
    #[tabled(rename = "ID")]
    pub id: u64,
    /// Album title
    #[tabled(rename = "Title")]
    pub title: String,
    /// Status label
    #[tabled(rename = "Status")]
    pub status: String,
    /// Sharing flag
    #[tabled(rename = "Shared")]
    pub shared: bool,
    /// Photo count
    #[tabled(rename = "Photos")]
    pub photos: usize,
}

impl From<&Album> for AlbumRow {
    fn from(album: &Album) -> Self {
        Self {
            id: album.id.get(),
            title: album.title.clone(),
            status: album.status.to_string(),
            shared: album.share_enabled,
            photos: album.photo_count(),
        }
    }
}

/// One face-match hit as a table row.
#[derive(Debug, Serialize, Tabled)]
pub struct MatchRow {
    /// Photo id
    #[tabled(rename = "Photo")]
    pub photo_id: u64,
    /// File name
    #[tabled(rename = "Name")]
    pub name: String,
    /// Confidence percentage
    #[tabled(rename = "Confidence")]
    pub confidence: String,
}

impl From<&PhotoMatch> for MatchRow {
    fn from(m: &PhotoMatch) -> Self {
        Self {
            photo_id: m.photo.id.get(),
            name: m.photo.name.clone(),
            confidence: format!("{}%", m.confidence),
        }
    }
}
