//! Admin action: duplicate a posting as a new draft

use crate::Result;
use crate::dispatch::NOTIFIED_AT_KEY;
use crate::error::PostingError;
use crate::posting::{ItemKind, PostingId, PostingRepository, PostingStatus};
use tracing::info;

/// Copy an existing posting into a new draft
///
/// Carries over the content, featured image, and all per-item metadata —
/// channel selections and alt tag included — so the editor can re-plan the
/// same material. The notified-at marker is not copied: the duplicate has
/// not been dispatched.
pub fn duplicate_as_draft(
    repo: &mut dyn PostingRepository,
    source: PostingId,
) -> Result<PostingId> {
    let mut copy = repo
        .get(source)
        .ok_or(PostingError::ItemNotFound(source))?;
    let meta = repo.meta_entries(source);

    copy.kind = ItemKind::Posting;
    copy.status = PostingStatus::Draft;
    let new_id = repo.insert(copy);

    for (key, value) in meta {
        if key == NOTIFIED_AT_KEY {
            continue;
        }
        repo.set_meta(new_id, &key, &value);
    }

    info!(source, new_id, "duplicated posting as draft");
    Ok(new_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posting::{ALT_TAG_KEY, MemoryRepository, PostingItem};

    #[test]
    fn test_duplicate_copies_content_and_meta() {
        let mut repo = MemoryRepository::new();
        let mut item = PostingItem::new(1, "Original", "<p>Body</p>");
        item.status = PostingStatus::Scheduled;
        item.featured_image_url = Some("https://example.com/full.jpg".to_string());
        repo.put(item);
        repo.set_meta(1, "channel_2", "1");
        repo.set_meta(1, ALT_TAG_KEY, "Alt");

        let new_id = duplicate_as_draft(&mut repo, 1).unwrap();
        assert_ne!(new_id, 1);

        let copy = repo.get(new_id).unwrap();
        assert_eq!(copy.title, "Original");
        assert_eq!(copy.status, PostingStatus::Draft);
        assert_eq!(
            copy.featured_image_url.as_deref(),
            Some("https://example.com/full.jpg")
        );
        assert_eq!(repo.meta(new_id, "channel_2").as_deref(), Some("1"));
        assert_eq!(repo.meta(new_id, ALT_TAG_KEY).as_deref(), Some("Alt"));
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let mut repo = MemoryRepository::new();

        let err = duplicate_as_draft(&mut repo, 42).unwrap_err();
        assert!(matches!(err, PostingError::ItemNotFound(42)));
    }

    #[test]
    fn test_notified_marker_is_not_copied() {
        let mut repo = MemoryRepository::new();
        repo.put(PostingItem::new(1, "Original", ""));
        repo.set_meta(1, NOTIFIED_AT_KEY, "2024-03-10 12:00:00");

        let new_id = duplicate_as_draft(&mut repo, 1).unwrap();
        assert!(repo.meta(new_id, NOTIFIED_AT_KEY).is_none());
    }
}
