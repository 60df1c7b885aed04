//! Friend id generation.

use chrono::Utc;
use shared::domain::FriendId;

pub trait IdSource {
    fn next_id(&mut self) -> FriendId;
}

/// Millisecond timestamps, bumped forward so two ids issued in the same
/// millisecond still differ.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: i64,
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> FriendId {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last + 1);
        self.last = id;
        FriendId(id)
    }
}

#[derive(Debug)]
pub struct SequentialIds {
    next: i64,
}

impl SequentialIds {
    pub fn starting_at(first: i64) -> Self {
        Self { next: first }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> FriendId {
        let id = self.next;
        self.next += 1;
        FriendId(id)
    }
}
