use anyhow::{Context, Result};
use std::time::Duration;

/// User-facing fetch options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct FetchOptions {
    pub page_size: usize,               // messages requested per history page
    pub page_delay: Duration,           // pacing pause after each processed page
    pub progress: bool,                 // show progress spinner
    pub progress_label: Option<String>, // optional label for the spinner
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            // 200 is the page size the channel API tolerates without
            // immediately flood-waiting a cold client.
            page_size: 200,
            page_delay: Duration::from_secs(1),
            progress: true,
            progress_label: None,
        }
    }
}

impl FetchOptions {
    pub fn with_page_size(mut self, n: usize) -> Self {
        self.page_size = n.max(1);
        self
    }
    pub fn with_page_delay(mut self, d: Duration) -> Self {
        self.page_delay = d;
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
}

/// Channel selection read from the environment. Credentials stay with the
/// transport implementation; the fetch core only needs the channel name and
/// optionally a page-size override.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelTarget {
    pub channel: String,
    pub page_size: Option<usize>,
}

impl ChannelTarget {
    /// Reads `TELEGRAM_CHANNEL` (required) and `SMETL_PAGE_SIZE` (optional).
    pub fn from_env() -> Result<Self> {
        let channel = std::env::var("TELEGRAM_CHANNEL")
            .context("TELEGRAM_CHANNEL must be set to the channel name or @handle")?;
        let page_size = match std::env::var("SMETL_PAGE_SIZE") {
            Ok(s) => Some(
                s.trim()
                    .parse::<usize>()
                    .with_context(|| format!("SMETL_PAGE_SIZE is not a number: {}", s))?,
            ),
            Err(_) => None,
        };
        Ok(Self { channel, page_size })
    }

    /// Fetch options honoring the environment's page-size override.
    pub fn options(&self) -> FetchOptions {
        let opts = FetchOptions::default();
        match self.page_size {
            Some(n) => opts.with_page_size(n),
            None => opts,
        }
    }
}
