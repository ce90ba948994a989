//! Per-participant check-in ledger.
//!
//! The derived stats are recomputed eagerly after every mutation and tagged
//! with the day they were computed for. Reads for any other day recompute,
//! so a reader never sees a streak that went stale at midnight.

use crate::streak::{ParticipantStats, derive_stats};
use chrono::NaiveDate;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct Participant {
    username: String,
    check_ins: BTreeSet<NaiveDate>,
    cached: ParticipantStats,
    evaluated_on: Option<NaiveDate>,
}

impl Participant {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            check_ins: BTreeSet::new(),
            cached: ParticipantStats::default(),
            evaluated_on: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check-in dates in ascending order.
    pub fn check_ins(&self) -> &BTreeSet<NaiveDate> {
        &self.check_ins
    }

    pub fn has_checked_in(&self, date: NaiveDate) -> bool {
        self.check_ins.contains(&date)
    }

    /// Records a check-in. Returns false when the date was already present.
    pub fn add_check_in(&mut self, date: NaiveDate, today: NaiveDate) -> bool {
        let inserted = self.check_ins.insert(date);
        self.refresh(today);
        inserted
    }

    /// Undoes a check-in. Returns false when the date was absent.
    pub fn remove_check_in(&mut self, date: NaiveDate, today: NaiveDate) -> bool {
        let removed = self.check_ins.remove(&date);
        self.refresh(today);
        removed
    }

    pub fn stats(&self, today: NaiveDate) -> ParticipantStats {
        if self.evaluated_on == Some(today) {
            self.cached
        } else {
            derive_stats(&self.check_ins, today)
        }
    }

    fn refresh(&mut self, today: NaiveDate) {
        self.cached = derive_stats(&self.check_ins, today);
        self.evaluated_on = Some(today);
    }
}
