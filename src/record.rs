use serde::Serialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Fixed timestamp shape shared by every CSV this crate emits.
const TIMESTAMP_FMT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// One raw entry as yielded by a history capability.
/// Media-only and service messages carry an empty `text`.
#[derive(Clone, Debug)]
pub struct RawMessage {
    pub id: i64,
    pub date: OffsetDateTime,
    pub sender_id: Option<i64>,
    pub text: String,
    pub reply_to_msg_id: Option<i64>,
}

/// Flat record emitted per text-bearing message. Never mutated after
/// construction; accumulated in memory for the whole run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    pub post_id: i64,
    pub timestamp: String,
    pub sender_id: Option<i64>,
    pub text: String,
    pub reply_to_msg_id: Option<i64>,
}

/// Shape a raw message into a record, or `None` when it has no text payload.
/// Such messages are excluded entirely rather than emitted blank.
pub fn normalize(raw: &RawMessage) -> Option<MessageRecord> {
    if raw.text.is_empty() {
        return None;
    }
    Some(MessageRecord {
        post_id: raw.id,
        timestamp: format_timestamp(raw.date),
        sender_id: raw.sender_id,
        text: flatten_text(&raw.text),
        reply_to_msg_id: raw.reply_to_msg_id,
    })
}

/// UTC-normalized `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(dt: OffsetDateTime) -> String {
    dt.to_offset(UtcOffset::UTC)
        .format(&TIMESTAMP_FMT)
        .unwrap_or_default()
}

/// Replace line breaks with single spaces so the text survives flat CSV rows.
/// A CRLF pair collapses to one space, not two.
fn flatten_text(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
