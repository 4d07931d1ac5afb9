//! Cleaning pass for fetched confess-channel CSVs: topic extraction from the
//! leading hashtag and removal of the promo footer the channel bot appends.

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use std::path::Path;

/// Channel hashtags with a curated topic name. Tags not listed here keep
/// their own text (sans `#`) as the topic.
const TOPIC_TAGS: &[(&str, &str)] = &[
    ("#studies✍🏼", "studies"),
    ("#advice🗣️", "advice"),
    ("#random✨", "random"),
    ("#love❤️", "love"),
    ("#campus🏛", "campus"),
    ("#rant🤬", "rant"),
];

pub struct Cleaner {
    topic_re: Regex,
    footer_re: Regex,
    ws_re: Regex,
}

impl Cleaner {
    pub fn new() -> Self {
        Self {
            topic_re: Regex::new(r"^(#\w+\S*)").unwrap(),
            // e.g. "#A12345678 | SMU Confess Channel ..." trailing promo block
            footer_re: Regex::new(r"#[A-Z]\d{8}\s*\|\s*SMU Confess Channel.*$").unwrap(),
            ws_re: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Split a message body into (topic, cleaned text).
    /// No leading hashtag yields topic "unknown". Cleaned text can come back
    /// empty when the body was nothing but tag and footer.
    pub fn clean_text(&self, text: &str) -> (String, String) {
        let mut topic = "unknown".to_string();
        let mut rest = text;
        if let Some(m) = self.topic_re.find(text) {
            let tag = m.as_str();
            topic = TOPIC_TAGS
                .iter()
                .find(|(t, _)| *t == tag)
                .map(|(_, name)| name.to_string())
                .unwrap_or_else(|| tag.replace('#', ""));
            rest = &text[m.end()..];
        }
        let cleaned = self.footer_re.replace_all(rest, "");
        let cleaned = self.ws_re.replace_all(cleaned.trim(), " ").into_owned();
        (topic, cleaned)
    }

    /// Read a fetched-channel CSV, append `topic` and `cleaned_text` columns,
    /// and drop rows whose cleaned text is empty. Returns rows kept.
    pub fn transform_csv(&self, input: &Path, output: &Path) -> Result<u64> {
        let mut rdr = csv::Reader::from_path(input)
            .with_context(|| format!("open {}", input.display()))?;
        let headers = rdr.headers()?.clone();
        let text_idx = headers
            .iter()
            .position(|h| h == "text")
            .ok_or_else(|| anyhow!("{} has no 'text' column", input.display()))?;

        let mut wtr = csv::Writer::from_path(output)
            .with_context(|| format!("create {}", output.display()))?;
        let mut out_headers = headers.clone();
        out_headers.push_field("topic");
        out_headers.push_field("cleaned_text");
        wtr.write_record(&out_headers)?;

        let mut kept: u64 = 0;
        for rec in rdr.records() {
            let rec = rec.with_context(|| format!("read {}", input.display()))?;
            let (topic, cleaned) = self.clean_text(rec.get(text_idx).unwrap_or(""));
            if cleaned.is_empty() {
                continue;
            }
            let mut out = rec.clone();
            out.push_field(&topic);
            out.push_field(&cleaned);
            wtr.write_record(&out)?;
            kept += 1;
        }
        wtr.flush()?;
        tracing::info!("Cleaned {} rows from {}", kept, input.display());
        Ok(kept)
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}
