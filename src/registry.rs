//! Read-side view over the configured channel slots

use crate::channel::{CHANNEL_COUNT, Channel, ChannelSettings};

/// Registry over the five channel slots
///
/// Built from a [`ChannelSettings`] value at construction time and
/// read-only afterwards; dispatch never mutates channel configuration.
#[derive(Debug, Clone)]
pub struct ChannelRegistry {
    channels: Vec<Channel>,
}

impl ChannelRegistry {
    /// Build a registry from persisted settings
    ///
    /// Normalizes to exactly [`CHANNEL_COUNT`] slots: missing slots are
    /// treated as unconfigured, surplus entries are ignored.
    pub fn new(settings: &ChannelSettings) -> Self {
        let channels = (1..=CHANNEL_COUNT as u8)
            .map(|index| {
                settings
                    .channel(index)
                    .cloned()
                    .unwrap_or_else(|| Channel::empty(index))
            })
            .collect();
        Self { channels }
    }

    /// Look up a slot by its 1-based index
    pub fn channel(&self, index: u8) -> Option<&Channel> {
        if (1..=CHANNEL_COUNT as u8).contains(&index) {
            self.channels.get(index as usize - 1)
        } else {
            None
        }
    }

    /// Whether a slot may receive dispatches: active with a non-empty endpoint
    pub fn dispatchable(&self, index: u8) -> bool {
        self.channel(index)
            .is_some_and(|c| c.active && c.is_configured())
    }

    /// All slots eligible for dispatch, in index order
    pub fn dispatchable_channels(&self) -> impl Iterator<Item = &Channel> {
        self.channels
            .iter()
            .filter(|c| c.active && c.is_configured())
    }

    /// Slots to offer on the per-item edit surface: dispatchable and named
    ///
    /// A configured slot without a name is misconfigured and not shown to
    /// editors.
    pub fn selectable_channels(&self) -> Vec<&Channel> {
        self.dispatchable_channels()
            .filter(|c| !c.name.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with(channels: Vec<Channel>) -> ChannelSettings {
        let mut settings = ChannelSettings::empty();
        for channel in channels {
            let slot = channel.index as usize - 1;
            settings.channels[slot] = channel;
        }
        settings
    }

    fn configured(index: u8, name: &str, active: bool) -> Channel {
        Channel {
            index,
            name: name.to_string(),
            endpoint: "ZW5jb2RlZA==".to_string(),
            active,
        }
    }

    #[test]
    fn test_dispatchable_requires_active_and_endpoint() {
        let settings = settings_with(vec![
            configured(1, "Active", true),
            configured(2, "Inactive", false),
        ]);
        let registry = ChannelRegistry::new(&settings);

        assert!(registry.dispatchable(1));
        assert!(!registry.dispatchable(2));
        // Slot 3 is unconfigured.
        assert!(!registry.dispatchable(3));
    }

    #[test]
    fn test_out_of_range_index() {
        let registry = ChannelRegistry::new(&ChannelSettings::empty());

        assert!(registry.channel(0).is_none());
        assert!(registry.channel(6).is_none());
        assert!(!registry.dispatchable(0));
        assert!(!registry.dispatchable(6));
    }

    #[test]
    fn test_dispatchable_channels_in_index_order() {
        let settings = settings_with(vec![
            configured(4, "Four", true),
            configured(2, "Two", true),
            configured(3, "Three", false),
        ]);
        let registry = ChannelRegistry::new(&settings);

        let indices: Vec<u8> = registry.dispatchable_channels().map(|c| c.index).collect();
        assert_eq!(indices, vec![2, 4]);
    }

    #[test]
    fn test_selectable_excludes_unnamed() {
        let settings = settings_with(vec![
            configured(1, "Named", true),
            configured(2, "", true),
        ]);
        let registry = ChannelRegistry::new(&settings);

        let selectable = registry.selectable_channels();
        assert_eq!(selectable.len(), 1);
        assert_eq!(selectable[0].index, 1);
    }

    #[test]
    fn test_normalizes_missing_slots() {
        let settings = ChannelSettings {
            channels: vec![configured(2, "Only two", true)],
        };
        let registry = ChannelRegistry::new(&settings);

        assert!(registry.dispatchable(2));
        assert!(registry.channel(1).is_some());
        assert!(!registry.dispatchable(1));
        assert!(registry.channel(5).is_some());
    }
}
