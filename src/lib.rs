//! Scheduled posting delivery to configured webhook channels
//!
//! This crate carries the channel and dispatch logic of a content-management
//! plugin: editors configure up to five webhook channels, opt individual
//! postings into them, and when a posting transitions into its scheduled
//! state the host fires a status-transition event and the dispatcher pushes
//! one JSON payload to every selected, active channel.
//!
//! # Features
//!
//! - **Channel slots**: five fixed numbered webhook destinations with
//!   settings-form validation
//! - **Endpoint secrecy**: webhook URLs are stored encrypted (AES-256-CBC)
//!   and recovered only at dispatch time
//! - **Publish-time floor**: reported publish times are never closer to
//!   "now" than the configured lead time
//! - **Sanitized payloads**: post bodies are reduced to a safe HTML subset
//!   before leaving the site
//! - **Fire-and-forget delivery**: no retries, no response inspection,
//!   nothing surfaced to the editor
//!
//! # Example: saving channel settings
//!
//! ```rust
//! use simple_posting::{ChannelForm, SecretCodec, validate_and_encode};
//!
//! let codec = SecretCodec::new("site-auth-secret", "site-nonce-secret");
//!
//! let mut form: [ChannelForm; 5] = Default::default();
//! form[0] = ChannelForm {
//!     name: "Zapier".to_string(),
//!     endpoint: "https://hooks.zapier.com/hooks/catch/12345/abcde/".to_string(),
//!     active: true,
//! };
//!
//! let outcome = validate_and_encode(&form, &codec);
//! assert!(!outcome.has_errors());
//! // Persist outcome.settings in the host's configuration store.
//! ```
//!
//! # Example: reacting to the host's transition event
//!
//! ```rust,no_run
//! use simple_posting::{
//!     ChannelSettings, DispatchConfig, Dispatcher, MemoryRepository,
//!     PostingItem, PostingStatus, SecretCodec,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let codec = SecretCodec::new("site-auth-secret", "site-nonce-secret");
//!     let settings = ChannelSettings::empty(); // loaded from the host in practice
//!     let dispatcher = Dispatcher::new(&DispatchConfig::default(), &settings, codec);
//!
//!     let mut repo = MemoryRepository::new();
//!     let item = PostingItem::new(1, "Launch day", "<p>We are live!</p>");
//!
//!     // Wire this into the host's status-transition event:
//!     dispatcher
//!         .on_status_transition(
//!             &PostingStatus::Draft,
//!             &PostingStatus::Scheduled,
//!             &item,
//!             &mut repo,
//!         )
//!         .await;
//! }
//! ```

mod channel;
mod config;
mod dispatch;
mod duplicate;
mod error;
mod notifier;
mod payload;
mod posting;
mod registry;
mod sanitize;
mod schedule;
mod secret;
mod selection;

pub use channel::{
    CHANNEL_COUNT, Channel, ChannelForm, ChannelSettings, SettingsNotice, SettingsOutcome,
    validate_and_encode,
};
pub use config::{DispatchConfig, DispatchConfigBuilder};
pub use dispatch::{Dispatcher, NOTIFIED_AT_KEY};
pub use duplicate::duplicate_as_draft;
pub use error::PostingError;
pub use notifier::{HttpNotifier, Notifier};
pub use payload::{PayloadBuilder, PostingPayload};
pub use posting::{
    ALT_TAG_KEY, ItemKind, MemoryRepository, PostingId, PostingItem, PostingRepository,
    PostingStatus,
};
pub use registry::ChannelRegistry;
pub use sanitize::ContentSanitizer;
pub use schedule::{DEFAULT_LEAD_TIME, format_publish_time, resolve_publish_time};
pub use secret::SecretCodec;
pub use selection::{ChannelSelection, load_selection, save_selection};

/// Result type for posting operations
pub type Result<T> = std::result::Result<T, PostingError>;
