mod config;
mod record;
mod source;
mod fetcher;
mod csv_out;

mod progress;
mod util;

mod reddit;
mod clean;

pub use crate::config::{ChannelTarget, FetchOptions};
pub use crate::record::{format_timestamp, normalize, MessageRecord, RawMessage};
pub use crate::source::{ApiError, ChannelHistory, Peer};
pub use crate::fetcher::{HistoryFetcher, Sleeper, ThreadSleeper};
pub use crate::csv_out::{write_records, write_records_to, CHANNEL_FIELDS};

// Expose multiprogress and progress helpers.
pub use crate::progress::{make_fetch_spinner, set_global_multiprogress};

// export tracing init so binaries can import from crate root.
pub use crate::util::init_tracing_once;

// export the Reddit listing snapshot helpers
pub use crate::reddit::{
    fetch_listing, parse_listing, write_listing_csv, write_listing_to, RedditPost, LISTING_FIELDS,
};

// export the confess-channel cleaning pass
pub use crate::clean::Cleaner;
