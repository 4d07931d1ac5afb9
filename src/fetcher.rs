//! The channel history fetcher: backward pagination with flood-wait retry.
//!
//! One outstanding request at a time; the only suspensions are the pacing
//! pause between pages and the server-mandated flood wait. Termination is an
//! empty page, never a count heuristic.

use crate::config::FetchOptions;
use crate::progress::make_fetch_spinner;
use crate::record::{normalize, MessageRecord};
use crate::source::{ApiError, ChannelHistory};
use crate::util::init_tracing_once;
use anyhow::{Context, Result};
use std::time::Duration;

/// Blocking-wait primitive used for pacing and flood-wait suspension.
/// Injected so tests can observe waits instead of serving them for real.
pub trait Sleeper {
    fn sleep(&mut self, d: Duration);
}

/// Default sleeper backed by the OS clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, d: Duration) {
        std::thread::sleep(d);
    }
}

/// Loop state: either about to request the page older than `offset_id`, or
/// finished because a page came back empty. Unrecoverable API errors leave
/// the loop through the `Result` channel instead of a third variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FetchState {
    Fetching { offset_id: i64 },
    Done,
}

#[derive(Clone)]
pub struct HistoryFetcher {
    opts: FetchOptions,
}

impl HistoryFetcher {
    pub fn new() -> Self {
        Self { opts: FetchOptions::default() }
    }

    pub fn with_options(opts: FetchOptions) -> Self {
        Self { opts }
    }

    // -------- Builder methods --------
    pub fn page_size(mut self, n: usize) -> Self { self.opts = self.opts.with_page_size(n); self }
    pub fn page_delay(mut self, d: Duration) -> Self { self.opts = self.opts.with_page_delay(d); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }

    /// Fetch the complete backward-paginated history of `channel`.
    ///
    /// Records come back newest-first with strictly decreasing `post_id`,
    /// pages concatenated in fetch order. On any error other than a flood
    /// wait the run is abandoned and nothing is returned; persistence of a
    /// partial accumulator is deliberately not offered here.
    pub fn fetch_all(
        &self,
        source: &mut impl ChannelHistory,
        channel: &str,
    ) -> Result<Vec<MessageRecord>> {
        self.fetch_all_with(source, channel, &mut ThreadSleeper)
    }

    /// Same as `fetch_all` with an explicit suspension primitive.
    pub fn fetch_all_with(
        &self,
        source: &mut impl ChannelHistory,
        channel: &str,
        sleeper: &mut impl Sleeper,
    ) -> Result<Vec<MessageRecord>> {
        init_tracing_once();

        let peer = source
            .resolve(channel)
            .with_context(|| format!("resolving channel '{}'", channel))?;
        tracing::info!("Channel '{}' resolved (ID {})", peer.title, peer.id);

        let pb = if self.opts.progress {
            Some(make_fetch_spinner(self.opts.progress_label.as_deref()))
        } else {
            None
        };

        let mut records: Vec<MessageRecord> = Vec::new();
        let mut state = FetchState::Fetching { offset_id: 0 };
        let mut batch: u64 = 0;

        while let FetchState::Fetching { offset_id } = state {
            let page = match source.history_page(&peer, self.opts.page_size, offset_id) {
                Ok(p) => p,
                Err(ApiError::FloodWait { seconds }) => {
                    tracing::warn!("Rate limit hit, sleeping for {} seconds", seconds);
                    sleeper.sleep(Duration::from_secs(seconds));
                    // Retry the identical request: cursor unchanged.
                    continue;
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("fetching page older than id {} from '{}'", offset_id, channel)
                    });
                }
            };

            if page.is_empty() {
                tracing::info!("No more posts found.");
                state = FetchState::Done;
                continue;
            }

            batch += 1;
            let kept_before = records.len();
            for raw in &page {
                if let Some(rec) = normalize(raw) {
                    records.push(rec);
                }
            }

            // Advance from the page's raw tail, not the last kept record: a
            // page of pure media/service messages must still move the cursor
            // or the same page would be requested forever.
            let next_offset = page[page.len() - 1].id;
            tracing::info!(
                "Batch {}: fetched {}, kept {}, cursor -> {}",
                batch,
                page.len(),
                records.len() - kept_before,
                next_offset
            );
            if let Some(pb) = &pb {
                pb.inc(page.len() as u64);
            }

            state = FetchState::Fetching { offset_id: next_offset };
            sleeper.sleep(self.opts.page_delay);
        }

        if let Some(pb) = &pb {
            pb.finish_with_message(format!("{} posts", records.len()));
        }
        tracing::info!("Fetched {} posts over {} batches", records.len(), batch);
        Ok(records)
    }
}
