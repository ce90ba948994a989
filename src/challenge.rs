use crate::errors::LedgerError;
use crate::ledger::Participant;
use chrono::NaiveDate;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChallengeId(String);

impl ChallengeId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChallengeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A shared habit challenge and the ledgers of everyone who joined it.
#[derive(Debug, Clone)]
pub struct Challenge {
    id: ChallengeId,
    name: String,
    description: String,
    creator: String,
    created_date: NaiveDate,
    participants: Vec<Participant>,
}

impl Challenge {
    pub fn new(
        id: ChallengeId,
        name: impl Into<String>,
        description: impl Into<String>,
        creator: impl Into<String>,
        created_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            creator: creator.into(),
            created_date,
            participants: Vec::new(),
        }
    }

    pub fn id(&self) -> &ChallengeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn created_date(&self) -> NaiveDate {
        self.created_date
    }

    /// Participants in join order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn is_participant(&self, username: &str) -> bool {
        self.position(username).is_some()
    }

    /// Admits `username` once. Joining again returns the existing participant.
    pub fn join(&mut self, username: &str) -> &Participant {
        let index = match self.position(username) {
            Some(index) => index,
            None => {
                self.participants.push(Participant::new(username));
                self.participants.len() - 1
            }
        };
        &self.participants[index]
    }

    pub fn participant(&self, username: &str) -> Result<&Participant, LedgerError> {
        self.participants
            .iter()
            .find(|participant| participant.username() == username)
            .ok_or_else(|| self.not_a_participant(username))
    }

    pub fn participant_mut(&mut self, username: &str) -> Result<&mut Participant, LedgerError> {
        match self.position(username) {
            Some(index) => Ok(&mut self.participants[index]),
            None => Err(self.not_a_participant(username)),
        }
    }

    fn position(&self, username: &str) -> Option<usize> {
        self.participants
            .iter()
            .position(|participant| participant.username() == username)
    }

    fn not_a_participant(&self, username: &str) -> LedgerError {
        LedgerError::ParticipantNotFound {
            challenge: self.id.to_string(),
            username: username.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge() -> Challenge {
        Challenge::new(
            ChallengeId::from("c1"),
            "Read daily",
            "Twenty pages a day",
            "ana",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn join_appends_in_order() {
        let mut challenge = challenge();
        challenge.join("ana");
        challenge.join("ben");
        challenge.join("cy");

        let names: Vec<_> = challenge.participants().iter().map(|p| p.username()).collect();
        assert_eq!(names, vec!["ana", "ben", "cy"]);
    }

    #[test]
    fn join_twice_keeps_existing_ledger() {
        let mut challenge = challenge();
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        challenge.join("ana");
        challenge
            .participant_mut("ana")
            .unwrap()
            .add_check_in(today, today);

        let again = challenge.join("ana");
        assert_eq!(again.stats(today).total_check_ins, 1);
        assert_eq!(challenge.participants().len(), 1);
    }

    #[test]
    fn unknown_participant_is_not_found() {
        let challenge = challenge();
        let err = challenge.participant("zoe").unwrap_err();
        assert!(err.is_not_found());
        assert!(!challenge.is_participant("zoe"));
    }

    #[test]
    fn usernames_are_case_sensitive() {
        let mut challenge = challenge();
        challenge.join("ana");
        challenge.join("Ana");
        assert_eq!(challenge.participants().len(), 2);
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ChallengeId::generate(), ChallengeId::generate());
    }
}
