//! Bounded most-recent-first activity feed

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use super::Ledger;
use crate::models::Activity;

#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<Activity>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend an entry, evicting the oldest once over capacity
    pub fn push(&mut self, message: String, at: DateTime<Local>) {
        self.entries.push_front(Activity {
            message,
            time: at.format("%I:%M %p").to_string(),
            at: at.naive_local(),
        });
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> Vec<Activity> {
        self.entries.iter().cloned().collect()
    }
}

impl Ledger {
    /// Up to `ACTIVITY_LOG_CAPACITY` entries, most recent first
    pub fn recent_activity(&self) -> Vec<Activity> {
        self.activity.entries()
    }
}
