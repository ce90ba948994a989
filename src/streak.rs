use crate::calendar::yesterday;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Derived statistics for one participant, valid for a single "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ParticipantStats {
    pub total_check_ins: u32,
    pub current_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakBadge {
    Star,
    Fire,
    Trophy,
}

impl StreakBadge {
    pub fn for_streak(streak: u32) -> Option<Self> {
        match streak {
            30.. => Some(Self::Trophy),
            7.. => Some(Self::Fire),
            3.. => Some(Self::Star),
            _ => None,
        }
    }

    /// Glyph shown next to the streak counter.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Star => "⭐",
            Self::Fire => "🔥",
            Self::Trophy => "🏆",
        }
    }
}

pub fn derive_stats(check_ins: &BTreeSet<NaiveDate>, today: NaiveDate) -> ParticipantStats {
    ParticipantStats {
        total_check_ins: u32::try_from(check_ins.len()).unwrap_or(u32::MAX),
        current_streak: current_streak(check_ins, today),
    }
}

/// Length of the consecutive-day run ending at the latest check-in, or 0
/// when that check-in is neither today nor yesterday.
pub fn current_streak(check_ins: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(&last) = check_ins.last() else {
        return 0;
    };
    if last != today && Some(last) != yesterday(today) {
        return 0;
    }

    let mut streak = 1;
    let mut cursor = last;
    while let Some(previous) = cursor.pred_opt() {
        if !check_ins.contains(&previous) {
            break;
        }
        streak += 1;
        cursor = previous;
    }
    streak
}
