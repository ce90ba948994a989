use chrono::{Duration, NaiveDate};
use habit_ledger::calendar::{format_iso, yesterday};
use habit_ledger::leaderboard::{LeaderboardEntry, compare_entries};
use habit_ledger::ledger::Participant;
use habit_ledger::streak::current_streak;
use habit_ledger::HabitStore;
use proptest::prelude::*;
use std::cmp::Ordering;

fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
}

/// Dates expressed as day offsets before the base day.
fn offsets() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..60, 0..40)
}

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Remove(u8),
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![(0u8..30).prop_map(Op::Add), (0u8..30).prop_map(Op::Remove)],
        0..60,
    )
}

fn entry() -> impl Strategy<Value = LeaderboardEntry> {
    ("[a-cA-C]{1,3}", 0u32..4, 0u32..4).prop_map(|(username, total_check_ins, current_streak)| {
        LeaderboardEntry {
            rank: 0,
            username,
            total_check_ins,
            current_streak,
        }
    })
}

proptest! {
    #[test]
    fn stale_latest_date_means_no_streak(days in offsets(), today_shift in 2i64..30) {
        let check_ins = days
            .iter()
            .map(|offset| base_day() - Duration::days(i64::from(*offset)))
            .collect();
        let today = base_day() + Duration::days(today_shift);
        prop_assert_eq!(current_streak(&check_ins, today), 0);
    }

    #[test]
    fn total_tracks_set_size_under_any_sequence(ops in ops()) {
        let today = base_day();
        let mut participant = Participant::new("ana");
        for op in &ops {
            match op {
                Op::Add(offset) => {
                    participant.add_check_in(today - Duration::days(i64::from(*offset)), today);
                }
                Op::Remove(offset) => {
                    participant.remove_check_in(today - Duration::days(i64::from(*offset)), today);
                }
            }
            let stats = participant.stats(today);
            prop_assert_eq!(stats.total_check_ins as usize, participant.check_ins().len());
            prop_assert_eq!(stats.current_streak, current_streak(participant.check_ins(), today));
        }
    }

    #[test]
    fn adding_twice_matches_adding_once(days in offsets(), extra in 0u8..60) {
        let today = base_day();
        let mut once = Participant::new("ana");
        let mut twice = Participant::new("ana");
        for offset in &days {
            let date = today - Duration::days(i64::from(*offset));
            once.add_check_in(date, today);
            twice.add_check_in(date, today);
        }
        let date = today - Duration::days(i64::from(extra));
        once.add_check_in(date, today);
        twice.add_check_in(date, today);
        twice.add_check_in(date, today);

        prop_assert_eq!(once.check_ins(), twice.check_ins());
        prop_assert_eq!(once.stats(today), twice.stats(today));
    }

    #[test]
    fn streak_never_exceeds_total(days in offsets()) {
        let mut participant = Participant::new("ana");
        for offset in &days {
            participant.add_check_in(base_day() - Duration::days(i64::from(*offset)), base_day());
        }
        let stats = participant.stats(base_day());
        prop_assert!(stats.current_streak <= stats.total_check_ins);
    }

    #[test]
    fn ranking_is_a_total_order(a in entry(), b in entry()) {
        let forward = compare_entries(&a, &b);
        let backward = compare_entries(&b, &a);
        prop_assert_eq!(forward, backward.reverse());
        if forward == Ordering::Equal {
            prop_assert_eq!(&a.username, &b.username);
        }
    }
}

#[test]
fn undo_today_restores_pre_add_stats() {
    let today = base_day();
    let mut store = HabitStore::new();
    let id = store
        .create_challenge("ana", "Walk", "", today - Duration::days(10))
        .unwrap()
        .id()
        .to_string();
    store
        .add_check_in(&id, "ana", &format_iso(yesterday(today).unwrap()), today)
        .unwrap();
    let before = store.participant_summary(&id, "ana", today).unwrap();

    store.add_check_in(&id, "ana", &format_iso(today), today).unwrap();
    let after = store.remove_check_in(&id, "ana", &format_iso(today), today).unwrap();

    assert_eq!(after.total_check_ins, before.total_check_ins);
    assert_eq!(after.current_streak, before.current_streak);
}
