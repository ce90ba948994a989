//! Session-owned repository of challenges.
//!
//! One `HabitStore` is built per session and passed by reference to every
//! operation. Each operation validates all of its input before mutating, so a
//! failed call leaves the store exactly as it was.

use crate::calendar::{parse_iso, yesterday};
use crate::calendar_view::{CalendarMonth, participant_calendar};
use crate::challenge::{Challenge, ChallengeId};
use crate::errors::LedgerError;
use crate::leaderboard::{LeaderboardEntry, ranked_participants};
use crate::ledger::Participant;
use crate::streak::{ParticipantStats, StreakBadge};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize)]
pub struct ParticipantSummary {
    pub username: String,
    pub total_check_ins: u32,
    pub current_streak: u32,
    pub badge: Option<StreakBadge>,
    pub badge_emoji: Option<&'static str>,
    pub checked_in_today: bool,
    pub checked_in_yesterday: bool,
    pub check_ins: Vec<NaiveDate>,
}

#[derive(Debug, Default)]
pub struct HabitStore {
    challenges: Vec<Challenge>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a challenge dated `today` with its creator as first participant.
    pub fn create_challenge(
        &mut self,
        creator: &str,
        name: &str,
        description: &str,
        today: NaiveDate,
    ) -> Result<&Challenge, LedgerError> {
        let creator = required("creator", creator)?;
        let name = required("name", name)?;

        let mut challenge = Challenge::new(
            ChallengeId::generate(),
            name,
            description.trim(),
            creator,
            today,
        );
        challenge.join(creator);
        info!(challenge = %challenge.id(), creator, name, "challenge created");

        self.challenges.push(challenge);
        let index = self.challenges.len() - 1;
        Ok(&self.challenges[index])
    }

    /// All challenges in creation order.
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn challenge(&self, id: &str) -> Result<&Challenge, LedgerError> {
        self.challenges
            .iter()
            .find(|challenge| challenge.id().as_str() == id)
            .ok_or_else(|| LedgerError::ChallengeNotFound(id.to_string()))
    }

    fn challenge_mut(&mut self, id: &str) -> Result<&mut Challenge, LedgerError> {
        self.challenges
            .iter_mut()
            .find(|challenge| challenge.id().as_str() == id)
            .ok_or_else(|| LedgerError::ChallengeNotFound(id.to_string()))
    }

    pub fn join_challenge(&mut self, id: &str, username: &str) -> Result<&Participant, LedgerError> {
        let username = required("username", username)?;
        let challenge = self.challenge_mut(id)?;
        if challenge.is_participant(username) {
            debug!(challenge = id, username, "already a participant");
        } else {
            info!(challenge = id, username, "participant joined");
        }
        Ok(challenge.join(username))
    }

    pub fn add_check_in(
        &mut self,
        id: &str,
        username: &str,
        date: &str,
        today: NaiveDate,
    ) -> Result<ParticipantStats, LedgerError> {
        let date = parse_iso(date)?;
        let username = required("username", username)?;
        let participant = self.challenge_mut(id)?.participant_mut(username)?;
        if participant.add_check_in(date, today) {
            debug!(challenge = id, username, %date, "check-in recorded");
        } else {
            debug!(challenge = id, username, %date, "check-in already recorded");
        }
        Ok(participant.stats(today))
    }

    pub fn remove_check_in(
        &mut self,
        id: &str,
        username: &str,
        date: &str,
        today: NaiveDate,
    ) -> Result<ParticipantStats, LedgerError> {
        let date = parse_iso(date)?;
        let username = required("username", username)?;
        let participant = self.challenge_mut(id)?.participant_mut(username)?;
        if participant.remove_check_in(date, today) {
            debug!(challenge = id, username, %date, "check-in undone");
        } else {
            debug!(challenge = id, username, %date, "no check-in to undo");
        }
        Ok(participant.stats(today))
    }

    pub fn ranked_participants(
        &self,
        id: &str,
        today: NaiveDate,
    ) -> Result<Vec<LeaderboardEntry>, LedgerError> {
        Ok(ranked_participants(self.challenge(id)?, today))
    }

    pub fn participant_calendar(
        &self,
        id: &str,
        username: &str,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> Result<CalendarMonth, LedgerError> {
        let username = required("username", username)?;
        let challenge = self.challenge(id)?;
        let participant = challenge.participant(username)?;
        participant_calendar(participant, challenge.created_date(), year, month, today)
    }

    pub fn participant_summary(
        &self,
        id: &str,
        username: &str,
        today: NaiveDate,
    ) -> Result<ParticipantSummary, LedgerError> {
        let username = required("username", username)?;
        let participant = self.challenge(id)?.participant(username)?;
        let stats = participant.stats(today);
        let badge = StreakBadge::for_streak(stats.current_streak);
        Ok(ParticipantSummary {
            username: participant.username().to_string(),
            total_check_ins: stats.total_check_ins,
            current_streak: stats.current_streak,
            badge,
            badge_emoji: badge.map(StreakBadge::emoji),
            checked_in_today: participant.has_checked_in(today),
            checked_in_yesterday: yesterday(today)
                .is_some_and(|date| participant.has_checked_in(date)),
            check_ins: participant.check_ins().iter().copied().collect(),
        })
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, LedgerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}
