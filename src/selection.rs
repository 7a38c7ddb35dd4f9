//! Per-posting channel opt-in flags

use crate::channel::CHANNEL_COUNT;
use crate::posting::{ItemKind, PostingId, PostingItem, PostingRepository};
use tracing::debug;

/// Metadata key holding the opt-in flag for one channel slot
fn selection_key(index: u8) -> String {
    format!("channel_{}", index)
}

/// The set of channel slots a posting is opted into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelSelection {
    flags: [bool; CHANNEL_COUNT],
}

impl ChannelSelection {
    /// An empty selection
    pub fn none() -> Self {
        Self::default()
    }

    /// A selection containing the given slot indices
    pub fn of(indices: &[u8]) -> Self {
        let mut selection = Self::none();
        for &index in indices {
            selection.insert(index);
        }
        selection
    }

    /// Add a slot index; indices outside 1..=[`CHANNEL_COUNT`] are ignored
    pub fn insert(&mut self, index: u8) {
        if (1..=CHANNEL_COUNT as u8).contains(&index) {
            self.flags[index as usize - 1] = true;
        }
    }

    /// Remove a slot index
    pub fn remove(&mut self, index: u8) {
        if (1..=CHANNEL_COUNT as u8).contains(&index) {
            self.flags[index as usize - 1] = false;
        }
    }

    /// Whether the selection contains a slot index
    pub fn contains(&self, index: u8) -> bool {
        (1..=CHANNEL_COUNT as u8).contains(&index) && self.flags[index as usize - 1]
    }

    /// Selected indices in ascending order
    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=CHANNEL_COUNT as u8).filter(|&i| self.contains(i))
    }

    /// Whether no slot is selected
    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|&f| f)
    }
}

/// Load a posting's channel selection from its metadata
pub fn load_selection(repo: &dyn PostingRepository, id: PostingId) -> ChannelSelection {
    let mut selection = ChannelSelection::none();
    for index in 1..=CHANNEL_COUNT as u8 {
        if repo.meta(id, &selection_key(index)).as_deref() == Some("1") {
            selection.insert(index);
        }
    }
    selection
}

/// Persist a posting's channel selection to its metadata
///
/// A selected slot is stored as `1`; a deselected slot's flag is removed
/// entirely (absence and zero are equivalent). Revisions are skipped so
/// autosave snapshots cannot pollute the selection state.
pub fn save_selection(
    repo: &mut dyn PostingRepository,
    item: &PostingItem,
    submitted: &ChannelSelection,
) {
    if item.kind == ItemKind::Revision {
        debug!(id = item.id, "skipping selection save for revision");
        return;
    }

    for index in 1..=CHANNEL_COUNT as u8 {
        let key = selection_key(index);
        if submitted.contains(index) {
            repo.set_meta(item.id, &key, "1");
        } else {
            repo.delete_meta(item.id, &key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posting::MemoryRepository;

    #[test]
    fn test_selection_set_semantics() {
        let mut selection = ChannelSelection::of(&[1, 3]);

        assert!(selection.contains(1));
        assert!(!selection.contains(2));
        assert!(selection.contains(3));
        assert_eq!(selection.indices().collect::<Vec<_>>(), vec![1, 3]);

        selection.remove(1);
        assert!(!selection.contains(1));

        // Out-of-range indices are ignored on both sides.
        selection.insert(0);
        selection.insert(6);
        assert!(!selection.contains(0));
        assert!(!selection.contains(6));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut repo = MemoryRepository::new();
        let item = PostingItem::new(1, "Title", "Body");
        repo.put(item.clone());

        save_selection(&mut repo, &item, &ChannelSelection::of(&[2, 5]));

        assert_eq!(load_selection(&repo, 1), ChannelSelection::of(&[2, 5]));
        assert_eq!(repo.meta(1, "channel_2").as_deref(), Some("1"));
        assert!(repo.meta(1, "channel_1").is_none());
    }

    #[test]
    fn test_deselect_removes_flag() {
        let mut repo = MemoryRepository::new();
        let item = PostingItem::new(1, "Title", "Body");
        repo.put(item.clone());

        save_selection(&mut repo, &item, &ChannelSelection::of(&[2]));
        save_selection(&mut repo, &item, &ChannelSelection::none());

        assert!(repo.meta(1, "channel_2").is_none());
        assert!(load_selection(&repo, 1).is_empty());
    }

    #[test]
    fn test_revision_save_is_skipped() {
        let mut repo = MemoryRepository::new();
        let mut item = PostingItem::new(1, "Title", "Body");
        item.kind = ItemKind::Revision;

        save_selection(&mut repo, &item, &ChannelSelection::of(&[1]));

        assert!(load_selection(&repo, 1).is_empty());
    }

    #[test]
    fn test_load_ignores_non_flag_values() {
        let mut repo = MemoryRepository::new();
        repo.set_meta(1, "channel_1", "0");
        repo.set_meta(1, "channel_2", "yes");
        repo.set_meta(1, "channel_3", "1");

        assert_eq!(load_selection(&repo, 1), ChannelSelection::of(&[3]));
    }
}
