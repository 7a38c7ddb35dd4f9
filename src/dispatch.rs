//! Status-transition handling and channel dispatch

use crate::channel::ChannelSettings;
use crate::config::DispatchConfig;
use crate::notifier::{HttpNotifier, Notifier};
use crate::payload::PayloadBuilder;
use crate::posting::{ALT_TAG_KEY, ItemKind, PostingItem, PostingRepository, PostingStatus};
use crate::registry::ChannelRegistry;
use crate::schedule::format_publish_time;
use crate::secret::SecretCodec;
use crate::selection::load_selection;
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};
use url::Url;

/// Metadata key marking a posting whose scheduling transition was handled
///
/// Some hosts fire the transition event more than once for the same logical
/// transition (autosave/revision races); the marker keeps dispatch to at
/// most once per posting.
pub const NOTIFIED_AT_KEY: &str = "notified_at";

/// Reacts to status transitions by delivering payloads to selected channels
///
/// One-shot per event: every guard short-circuits to a no-op, nothing is
/// surfaced to the editor, and the call returns only after delivery has
/// been attempted for every qualifying channel.
pub struct Dispatcher<N: Notifier = HttpNotifier> {
    registry: ChannelRegistry,
    codec: SecretCodec,
    builder: PayloadBuilder,
    notifier: N,
}

impl Dispatcher<HttpNotifier> {
    /// Create a dispatcher that delivers over HTTP
    pub fn new(config: &DispatchConfig, settings: &ChannelSettings, codec: SecretCodec) -> Self {
        let notifier = HttpNotifier::new(config);
        Self::with_notifier(config, settings, codec, notifier)
    }
}

impl<N: Notifier> Dispatcher<N> {
    /// Create a dispatcher with a custom delivery implementation
    pub fn with_notifier(
        config: &DispatchConfig,
        settings: &ChannelSettings,
        codec: SecretCodec,
        notifier: N,
    ) -> Self {
        Self {
            registry: ChannelRegistry::new(settings),
            codec,
            builder: PayloadBuilder::new(config),
            notifier,
        }
    }

    /// The registry this dispatcher consults
    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    /// Host callback: an item's status changed from `old` to `new`
    ///
    /// The host must invoke this synchronously from its transition event,
    /// before the triggering save request completes.
    pub async fn on_status_transition(
        &self,
        old: &PostingStatus,
        new: &PostingStatus,
        item: &PostingItem,
        repo: &mut dyn PostingRepository,
    ) {
        self.dispatch_at(old, new, item, repo, Local::now().naive_local())
            .await
    }

    pub(crate) async fn dispatch_at(
        &self,
        old: &PostingStatus,
        new: &PostingStatus,
        item: &PostingItem,
        repo: &mut dyn PostingRepository,
        now: NaiveDateTime,
    ) {
        if *new != PostingStatus::Scheduled {
            return;
        }
        if item.kind != ItemKind::Posting {
            return;
        }
        if old == new {
            debug!(id = item.id, "no-op transition, skipping dispatch");
            return;
        }
        if *old == PostingStatus::Published {
            debug!(id = item.id, "previously published, skipping re-dispatch");
            return;
        }
        if repo.meta(item.id, NOTIFIED_AT_KEY).is_some() {
            debug!(id = item.id, "transition already handled, skipping dispatch");
            return;
        }

        let alt_tag = repo.meta(item.id, ALT_TAG_KEY);
        let payload = self.builder.build(item, alt_tag.as_deref(), now);
        let body = match payload.to_bytes() {
            Ok(body) => body,
            Err(e) => {
                warn!(id = item.id, "failed to serialize payload: {}", e);
                return;
            }
        };

        let selection = load_selection(&*repo, item.id);
        for channel in self.registry.dispatchable_channels() {
            if !selection.contains(channel.index) {
                continue;
            }

            let endpoint = self.codec.decode(&channel.endpoint);
            if endpoint.is_empty() {
                warn!(channel = channel.index, "endpoint could not be decoded, skipping");
                continue;
            }
            if Url::parse(&endpoint).is_err() {
                warn!(channel = channel.index, "decoded endpoint is not a valid URL, skipping");
                continue;
            }

            info!(id = item.id, channel = channel.index, name = %channel.name, "dispatching posting");
            self.notifier.notify(&endpoint, &body).await;
        }

        // Written whenever the guard chain passes, selected channels or
        // not: the marker records that this transition was handled.
        repo.set_meta(item.id, NOTIFIED_AT_KEY, &format_publish_time(now));
    }
}
