//! One-shot Reddit listing snapshot via the old.reddit.com JSON endpoint.

use crate::record::format_timestamp;
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use time::OffsetDateTime;

const USER_AGENT: &str = "Mozilla/5.0 (HPBInsightsBot/1.0)";

/// Column order for listing exports.
pub const LISTING_FIELDS: [&str; 8] = [
    "timestamp", "author", "title", "body", "flair", "score", "num_comments", "url",
];

/// One listing entry, flattened for CSV.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RedditPost {
    pub timestamp: String,
    pub author: String,
    pub title: String,
    pub body: String,
    pub flair: String,
    pub score: i64,
    pub num_comments: i64,
    pub url: String,
}

/// GET the subreddit's front-page listing (one request, no pagination) and
/// shape each post. `limit` is passed through to the endpoint.
pub fn fetch_listing(subreddit: &str, limit: usize) -> Result<Vec<RedditPost>> {
    let url = format!("https://old.reddit.com/r/{}/.json", subreddit);
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("building http client")?;
    let val: Value = client
        .get(&url)
        .query(&[("limit", limit.to_string())])
        .send()
        .with_context(|| format!("GET {}", url))?
        .error_for_status()
        .with_context(|| format!("GET {}", url))?
        .json()
        .context("parsing listing json")?;
    parse_listing(&val)
}

/// Walk `data.children[*].data` of a listing payload.
pub fn parse_listing(val: &Value) -> Result<Vec<RedditPost>> {
    let children = val
        .pointer("/data/children")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("listing payload missing data.children"))?;
    let mut posts = Vec::with_capacity(children.len());
    for child in children {
        if let Some(d) = child.get("data") {
            posts.push(normalize_post(d));
        }
    }
    Ok(posts)
}

fn normalize_post(d: &Value) -> RedditPost {
    // created_utc arrives as a float even though it is a whole epoch second.
    let created = d.get("created_utc").and_then(Value::as_f64).unwrap_or(0.0) as i64;
    let timestamp = OffsetDateTime::from_unix_timestamp(created)
        .map(format_timestamp)
        .unwrap_or_default();
    let permalink = d.get("permalink").and_then(Value::as_str).unwrap_or("");
    RedditPost {
        timestamp,
        author: str_field(d, "author"),
        title: str_field(d, "title"),
        body: str_field(d, "selftext"),
        flair: str_field(d, "link_flair_text"),
        score: d.get("score").and_then(Value::as_i64).unwrap_or(0),
        num_comments: d.get("num_comments").and_then(Value::as_i64).unwrap_or(0),
        url: if permalink.is_empty() {
            String::new()
        } else {
            format!("https://old.reddit.com{}", permalink)
        },
    }
}

fn str_field(d: &Value, key: &str) -> String {
    d.get(key).and_then(Value::as_str).unwrap_or("").to_string()
}

/// Write listing posts to `path`, header first.
pub fn write_listing_csv(path: &Path, posts: &[RedditPost]) -> Result<()> {
    let f = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_listing_to(f, posts).with_context(|| format!("write {}", path.display()))
}

/// Writer-generic variant of `write_listing_csv`.
pub fn write_listing_to<W: Write>(w: W, posts: &[RedditPost]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(LISTING_FIELDS)?;
    for p in posts {
        wtr.write_record([
            p.timestamp.clone(),
            p.author.clone(),
            p.title.clone(),
            p.body.clone(),
            p.flair.clone(),
            p.score.to_string(),
            p.num_comments.to_string(),
            p.url.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
