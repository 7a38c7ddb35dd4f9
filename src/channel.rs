//! Channel slots and settings-form validation

use crate::secret::SecretCodec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of configurable webhook channels
pub const CHANNEL_COUNT: usize = 5;

/// One configured webhook destination
///
/// Channels live in five fixed numbered slots. A slot with an empty
/// endpoint is unconfigured; clearing the endpoint clears the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Slot number, 1..=[`CHANNEL_COUNT`]
    pub index: u8,

    /// Editor-facing label; a configured slot without one is reported as a
    /// validation error but persisted anyway
    pub name: String,

    /// Webhook URL in its encoded stored form; empty means unconfigured
    pub endpoint: String,

    /// Whether the editor has switched this channel on
    pub active: bool,
}

impl Channel {
    /// An unconfigured slot
    pub fn empty(index: u8) -> Self {
        Self {
            index,
            name: String::new(),
            endpoint: String::new(),
            active: false,
        }
    }

    /// Whether the slot holds an endpoint
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }
}

/// The persisted channel configuration: all five slots, in order
///
/// This is an explicit value the host loads from its configuration store
/// and passes by reference into the registry and dispatcher; nothing in
/// this crate reads ambient global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSettings {
    /// The five channel slots, index 1 first
    pub channels: Vec<Channel>,
}

impl ChannelSettings {
    /// Settings with all slots unconfigured
    pub fn empty() -> Self {
        Self {
            channels: (1..=CHANNEL_COUNT as u8).map(Channel::empty).collect(),
        }
    }

    /// Look up a slot by its 1-based index
    pub fn channel(&self, index: u8) -> Option<&Channel> {
        self.channels.iter().find(|c| c.index == index)
    }
}

impl Default for ChannelSettings {
    fn default() -> Self {
        Self::empty()
    }
}

/// One slot of the settings form as submitted by the editor
#[derive(Debug, Clone, Default)]
pub struct ChannelForm {
    /// Channel name field
    pub name: String,

    /// Endpoint URL field, in plaintext
    pub endpoint: String,

    /// Active checkbox
    pub active: bool,
}

/// A notice to surface on the settings screen after a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsNotice {
    /// The save completed without validation errors
    Saved,

    /// A configured slot was submitted without a name
    MissingName {
        /// Slot number the error refers to
        index: u8,
    },
}

impl SettingsNotice {
    /// Whether this notice reports a validation error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::MissingName { .. })
    }
}

impl fmt::Display for SettingsNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved => write!(f, "Settings saved."),
            Self::MissingName { index } => {
                write!(f, "Please enter a name for webhook {}.", index)
            }
        }
    }
}

/// Result of validating and encoding a settings-form submission
#[derive(Debug, Clone)]
pub struct SettingsOutcome {
    /// The settings to persist
    pub settings: ChannelSettings,

    /// Notices to display to the editor
    pub notices: Vec<SettingsNotice>,
}

impl SettingsOutcome {
    /// Whether any validation error occurred
    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(SettingsNotice::is_error)
    }
}

/// Validate a settings-form submission and encode it for persistence
///
/// Per slot: a non-empty endpoint is kept (encoded via the codec) with the
/// active flag mirroring the checkbox; a missing name on a configured slot
/// records an error notice but the slot is still persisted. An empty
/// endpoint clears the whole slot regardless of the other fields. Missing
/// trailing form slots are treated as empty.
pub fn validate_and_encode(form: &[ChannelForm], codec: &SecretCodec) -> SettingsOutcome {
    let mut settings = ChannelSettings::empty();
    let mut notices = Vec::new();

    for slot in 0..CHANNEL_COUNT {
        let index = (slot + 1) as u8;
        let Some(field) = form.get(slot) else { continue };

        let endpoint = field.endpoint.trim();
        if endpoint.is_empty() {
            continue;
        }

        let name = field.name.trim();
        if name.is_empty() {
            notices.push(SettingsNotice::MissingName { index });
        }

        settings.channels[slot] = Channel {
            index,
            name: name.to_string(),
            endpoint: codec.encode(endpoint),
            active: field.active,
        };
    }

    if !notices.iter().any(SettingsNotice::is_error) {
        notices.push(SettingsNotice::Saved);
    }

    SettingsOutcome { settings, notices }
}
