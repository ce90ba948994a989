use crate::challenge::Challenge;
use crate::streak::ParticipantStats;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateChallengeRequest {
    pub creator: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    pub username: String,
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewerQuery {
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub today: NaiveDate,
    pub yesterday: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ChallengeSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub creator: String,
    pub created_date: NaiveDate,
    pub participants: Vec<String>,
    pub participant_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_participant: Option<bool>,
}

impl ChallengeSummary {
    pub fn from_challenge(challenge: &Challenge, viewer: Option<&str>) -> Self {
        let participants: Vec<String> = challenge
            .participants()
            .iter()
            .map(|participant| participant.username().to_string())
            .collect();
        Self {
            id: challenge.id().to_string(),
            name: challenge.name().to_string(),
            description: challenge.description().to_string(),
            creator: challenge.creator().to_string(),
            created_date: challenge.created_date(),
            participant_count: participants.len(),
            participants,
            is_participant: viewer.map(|username| challenge.is_participant(username)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub username: String,
    pub date: Option<NaiveDate>,
    pub total_check_ins: u32,
    pub current_streak: u32,
}

impl StatsResponse {
    pub fn new(username: String, date: Option<NaiveDate>, stats: ParticipantStats) -> Self {
        Self {
            username,
            date,
            total_check_ins: stats.total_check_ins,
            current_streak: stats.current_streak,
        }
    }
}
