//! Outbound payload construction

use crate::Result;
use crate::config::DispatchConfig;
use crate::posting::PostingItem;
use crate::sanitize::ContentSanitizer;
use crate::schedule::{format_publish_time, resolve_publish_time};
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// The JSON document sent to a channel endpoint
///
/// `post_date` is always present; every other field is emitted only when
/// the posting actually carries a value for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingPayload {
    /// Post title, omitted when empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_title: Option<String>,

    /// Sanitized post body, omitted when empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_content: Option<String>,

    /// Effective publish time, `YYYY-MM-DD HH:MM:SS` in the host's zone
    pub post_date: String,

    /// Featured image URL ("full" size), omitted when the posting has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_image: Option<String>,

    /// Alt text for the featured image, omitted when empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_tag: Option<String>,
}

impl PostingPayload {
    /// Serialize to JSON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builds one payload per qualifying transition
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    sanitizer: ContentSanitizer,
    lead_time: TimeDelta,
}

impl PayloadBuilder {
    /// Create a builder using the configured schedule lead time
    pub fn new(config: &DispatchConfig) -> Self {
        Self {
            sanitizer: ContentSanitizer::default(),
            lead_time: TimeDelta::from_std(config.lead_time).unwrap_or_default(),
        }
    }

    /// Replace the body sanitizer
    pub fn with_sanitizer(mut self, sanitizer: ContentSanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    /// Assemble the payload for a posting
    ///
    /// `alt_tag` is the stored alt text for the item's featured image, if
    /// any; `now` is the moment of the triggering transition.
    pub fn build(
        &self,
        item: &PostingItem,
        alt_tag: Option<&str>,
        now: NaiveDateTime,
    ) -> PostingPayload {
        let title = item.title.trim();
        let post_title = (!title.is_empty()).then(|| title.to_string());

        let post_content = if item.body.trim().is_empty() {
            None
        } else {
            Some(self.sanitizer.sanitize(&item.body))
        };

        let post_date = format_publish_time(resolve_publish_time(
            item.scheduled_at,
            now,
            self.lead_time,
        ));

        let post_image = item
            .featured_image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(String::from);

        let alt_tag = alt_tag
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from);

        PostingPayload {
            post_title,
            post_content,
            post_date,
            post_image,
            alt_tag,
        }
    }
}
