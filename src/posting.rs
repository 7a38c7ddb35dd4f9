//! Posting items and the host content repository

use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Identifier assigned to a posting by the content repository
pub type PostingId = u64;

/// Metadata key for the featured-image alt text
pub const ALT_TAG_KEY: &str = "posting_alt_tag";

/// Publication status of a content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostingStatus {
    /// Unpublished work in progress
    Draft,

    /// Waiting for a future publish time ("future" in the host)
    Scheduled,

    /// Live ("publish" in the host)
    Published,

    /// Any other host status (pending, trash, ...)
    Other(String),
}

impl PostingStatus {
    /// Map a host status string onto this taxonomy
    pub fn from_host_status(status: &str) -> Self {
        match status {
            "draft" => Self::Draft,
            "future" => Self::Scheduled,
            "publish" => Self::Published,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for PostingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Scheduled => write!(f, "future"),
            Self::Published => write!(f, "publish"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Kind of content item the repository hands us
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// The posting content type this crate governs
    Posting,

    /// A transient revision/autosave snapshot of another item
    Revision,

    /// Any unrelated content type
    Other(String),
}

/// One schedulable content item
///
/// Timestamps are wall-clock times in the zone configured on the host,
/// matching how the host stores and displays publish times.
#[derive(Debug, Clone)]
pub struct PostingItem {
    /// Repository-assigned identifier
    pub id: PostingId,

    /// Content type of this item
    pub kind: ItemKind,

    /// Post title
    pub title: String,

    /// Post body (rich text / HTML)
    pub body: String,

    /// URL of the featured image at its "full" size variant, if any
    pub featured_image_url: Option<String>,

    /// Current publication status
    pub status: PostingStatus,

    /// The host-managed publish timestamp
    pub scheduled_at: NaiveDateTime,
}

impl PostingItem {
    /// Create a draft posting with the given content
    pub fn new(id: PostingId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            kind: ItemKind::Posting,
            title: title.into(),
            body: body.into(),
            featured_image_url: None,
            status: PostingStatus::Draft,
            scheduled_at: NaiveDateTime::default(),
        }
    }
}

/// The slice of the host content repository this crate needs
///
/// The host owns storage; this trait covers fetching items, inserting the
/// draft created by the duplicate action, and the per-item key-value
/// metadata store that holds channel selections, the alt tag, and the
/// notified-at marker.
pub trait PostingRepository {
    /// Fetch an item by id
    fn get(&self, id: PostingId) -> Option<PostingItem>;

    /// Insert a new item, assigning and returning a fresh id
    fn insert(&mut self, item: PostingItem) -> PostingId;

    /// Read one metadata value
    fn meta(&self, id: PostingId, key: &str) -> Option<String>;

    /// Write one metadata value
    fn set_meta(&mut self, id: PostingId, key: &str, value: &str);

    /// Remove one metadata value
    fn delete_meta(&mut self, id: PostingId, key: &str);

    /// All metadata entries for an item
    fn meta_entries(&self, id: PostingId) -> Vec<(String, String)>;
}

/// In-memory content repository
///
/// Reference implementation of [`PostingRepository`], useful for host
/// integration tests and used throughout this crate's own tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    items: BTreeMap<PostingId, PostingItem>,
    meta: BTreeMap<PostingId, BTreeMap<String, String>>,
}

impl MemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an item under its own id, replacing any existing one
    pub fn put(&mut self, item: PostingItem) {
        self.items.insert(item.id, item);
    }
}

impl PostingRepository for MemoryRepository {
    fn get(&self, id: PostingId) -> Option<PostingItem> {
        self.items.get(&id).cloned()
    }

    fn insert(&mut self, mut item: PostingItem) -> PostingId {
        let id = self.items.keys().next_back().map_or(1, |max| max + 1);
        item.id = id;
        self.items.insert(id, item);
        id
    }

    fn meta(&self, id: PostingId, key: &str) -> Option<String> {
        self.meta.get(&id).and_then(|m| m.get(key)).cloned()
    }

    fn set_meta(&mut self, id: PostingId, key: &str, value: &str) {
        self.meta
            .entry(id)
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    fn delete_meta(&mut self, id: PostingId, key: &str) {
        if let Some(m) = self.meta.get_mut(&id) {
            m.remove(key);
        }
    }

    fn meta_entries(&self, id: PostingId) -> Vec<(String, String)> {
        self.meta
            .get(&id)
            .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default()
    }
}
