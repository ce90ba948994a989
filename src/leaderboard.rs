use crate::challenge::Challenge;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub total_check_ins: u32,
    pub current_streak: u32,
}

/// Ranks participants by total check-ins, then current streak (both
/// descending), then username ascending. The challenge is left untouched.
pub fn ranked_participants(challenge: &Challenge, today: NaiveDate) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = challenge
        .participants()
        .iter()
        .map(|participant| {
            let stats = participant.stats(today);
            LeaderboardEntry {
                rank: 0,
                username: participant.username().to_string(),
                total_check_ins: stats.total_check_ins,
                current_streak: stats.current_streak,
            }
        })
        .collect();

    entries.sort_by(compare_entries);
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = u32::try_from(position + 1).unwrap_or(u32::MAX);
    }
    entries
}

pub fn compare_entries(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.total_check_ins
        .cmp(&a.total_check_ins)
        .then_with(|| b.current_streak.cmp(&a.current_streak))
        .then_with(|| a.username.cmp(&b.username))
}
