use smetl::{ApiError, ChannelHistory, Peer, RawMessage, Sleeper};
use std::collections::VecDeque;
use std::time::Duration;
use time::macros::datetime;

/// Build a raw message with a deterministic date derived from its id, so
/// every message in a scripted history has a distinct timestamp.
pub fn raw(id: i64, sender: Option<i64>, text: &str, reply_to: Option<i64>) -> RawMessage {
    RawMessage {
        id,
        date: datetime!(2024-03-01 12:00:00 UTC) + time::Duration::seconds(id),
        sender_id: sender,
        text: text.to_string(),
        reply_to_msg_id: reply_to,
    }
}

/// One scripted reply per incoming history request, consumed in order.
pub enum Step {
    Page(Vec<RawMessage>),
    Flood(u64),
    Fail(ApiError),
}

/// Fake transport that serves a fixed script and records every request it
/// receives, so tests can assert cursors and retry behavior exactly.
pub struct ScriptedSource {
    steps: VecDeque<Step>,
    /// (limit, offset_id) per history_page call, in call order.
    pub requests: Vec<(usize, i64)>,
    pub resolved: Vec<String>,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps: steps.into(), requests: Vec::new(), resolved: Vec::new() }
    }
}

impl ChannelHistory for ScriptedSource {
    fn resolve(&mut self, channel: &str) -> Result<Peer, ApiError> {
        self.resolved.push(channel.to_string());
        Ok(Peer { id: 1001, title: format!("{} (scripted)", channel) })
    }

    fn history_page(
        &mut self,
        _peer: &Peer,
        limit: usize,
        offset_id: i64,
    ) -> Result<Vec<RawMessage>, ApiError> {
        self.requests.push((limit, offset_id));
        match self.steps.pop_front() {
            Some(Step::Page(p)) => Ok(p),
            Some(Step::Flood(seconds)) => Err(ApiError::FloodWait { seconds }),
            Some(Step::Fail(e)) => Err(e),
            // Script exhausted: the channel has no older history.
            None => Ok(Vec::new()),
        }
    }
}

/// Records every suspension instead of actually sleeping.
#[derive(Default)]
pub struct RecordingSleeper {
    pub naps: Vec<Duration>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, d: Duration) {
        self.naps.push(d);
    }
}
