use serde::Deserialize;

use crate::error::VoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Support,
    Against,
}

/// Aggregate counters as stored in the vote document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct VoteTally {
    #[serde(default)]
    pub support: u64,
    #[serde(default)]
    pub against: u64,
}

impl VoteTally {
    /// Decode the vote document, e.g. `{"support": 12, "against": 3}`.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn record(&mut self, vote: Vote) {
        match vote {
            Vote::Support => self.support += 1,
            Vote::Against => self.against += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.support + self.against
    }
}

/// One visitor's view of the tally: they may vote once.
#[derive(Debug, Clone, Default)]
pub struct Ballot {
    tally: VoteTally,
    has_voted: bool,
}

impl Ballot {
    pub fn new(tally: VoteTally) -> Self {
        Ballot {
            tally,
            has_voted: false,
        }
    }

    pub fn cast(&mut self, vote: Vote) -> Result<VoteTally, VoteError> {
        if self.has_voted {
            return Err(VoteError::AlreadyVoted);
        }
        self.tally.record(vote);
        self.has_voted = true;
        log::debug!("Vote cast: {vote:?}, tally now {:?}", self.tally);
        Ok(self.tally)
    }

    pub fn tally(&self) -> VoteTally {
        self.tally
    }

    pub fn has_voted(&self) -> bool {
        self.has_voted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_vote_per_ballot() {
        let mut ballot = Ballot::new(VoteTally { support: 2, against: 5 });
        let tally = ballot.cast(Vote::Support).unwrap();
        assert_eq!(tally, VoteTally { support: 3, against: 5 });
        assert!(ballot.has_voted());
        assert_eq!(ballot.cast(Vote::Against), Err(VoteError::AlreadyVoted));
        assert_eq!(ballot.tally().total(), 8);
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let tally = VoteTally::from_json(r#"{"against":4}"#).unwrap();
        assert_eq!(tally, VoteTally { support: 0, against: 4 });
    }

    #[test]
    fn decoded_tally_seeds_the_ballot() {
        let tally = VoteTally::from_json(r#"{"support":12,"against":3}"#).unwrap();
        let mut ballot = Ballot::new(tally);
        assert_eq!(ballot.tally().total(), 15);
        assert!(!ballot.has_voted());
        assert_eq!(
            ballot.cast(Vote::Against).unwrap(),
            VoteTally { support: 12, against: 4 }
        );
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!(VoteTally::from_json(r#"{"support":"many"}"#).is_err());
        assert!(VoteTally::from_json("[]").is_err());
    }
}
