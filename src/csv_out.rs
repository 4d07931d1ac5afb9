//! CSV sink for fetched channel history.

use crate::record::MessageRecord;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Column order expected by the downstream cleaning and dashboard scripts.
pub const CHANNEL_FIELDS: [&str; 5] =
    ["post_id", "timestamp", "sender_id", "text", "reply_to_msg_id"];

/// Write records to `path` in fetch order, header first.
pub fn write_records(path: &Path, records: &[MessageRecord]) -> Result<()> {
    let f = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_records_to(f, records).with_context(|| format!("write {}", path.display()))
}

/// Writer-generic variant of `write_records`.
/// Absent `sender_id`/`reply_to_msg_id` render as empty fields; `text`
/// carries no embedded newlines by construction, so standard quoting is all
/// the escaping there is.
pub fn write_records_to<W: Write>(w: W, records: &[MessageRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(CHANNEL_FIELDS)?;
    for rec in records {
        wtr.write_record([
            rec.post_id.to_string(),
            rec.timestamp.clone(),
            rec.sender_id.map(|v| v.to_string()).unwrap_or_default(),
            rec.text.clone(),
            rec.reply_to_msg_id.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
