//! Seams for the provided collaborators: channel resolution and paginated
//! history queries live behind `ChannelHistory`, so the fetch loop never
//! touches credentials, sessions, or transport details.

use crate::record::RawMessage;
use thiserror::Error;

/// Resolved channel handle. Opaque to the fetch loop beyond logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Peer {
    pub id: i64,
    pub title: String,
}

/// Errors surfaced by a history transport.
///
/// Only `FloodWait` is recoverable: the fetch loop suspends for the carried
/// duration and retries the identical request. Everything else aborts the run.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rate-limit signal; the server requires waiting `seconds` before the
    /// next request.
    #[error("flood wait: retry after {seconds}s")]
    FloodWait { seconds: u64 },
    #[error("unauthorized: credentials rejected")]
    Unauthorized,
    #[error("network failure: {0}")]
    Network(String),
    #[error("api error: {0}")]
    Api(String),
}

/// Paginated channel-history capability.
pub trait ChannelHistory {
    /// Map a configured channel name to an addressable entity.
    fn resolve(&mut self, channel: &str) -> Result<Peer, ApiError>;

    /// One page of history strictly older than `offset_id` (0 means no lower
    /// bound, i.e. start from the most recent message). At most `limit`
    /// messages, newest-first within the page. An empty page means the
    /// channel's history is exhausted.
    fn history_page(
        &mut self,
        peer: &Peer,
        limit: usize,
        offset_id: i64,
    ) -> Result<Vec<RawMessage>, ApiError>;
}
