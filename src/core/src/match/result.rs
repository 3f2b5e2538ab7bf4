use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchScore {
    pub home: u8,
    pub away: u8,
}

impl MatchScore {
    pub fn new(home: u8, away: u8) -> Self {
        MatchScore { home, away }
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.home.cmp(&self.away) {
            Ordering::Greater => MatchOutcome::HomeWin,
            Ordering::Less => MatchOutcome::AwayWin,
            Ordering::Equal => MatchOutcome::Tie,
        }
    }
}

impl Display for MatchScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}:{}", self.home, self.away)
    }
}

/// Outcome of one played fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub fixture_id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub score: MatchScore,
}

impl MatchResult {
    pub fn new(fixture_id: u32, home_team_id: u32, away_team_id: u32, score: MatchScore) -> Self {
        MatchResult {
            fixture_id,
            home_team_id,
            away_team_id,
            score,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        self.score.outcome()
    }

    pub fn winner(&self) -> Option<u32> {
        match self.outcome() {
            MatchOutcome::HomeWin => Some(self.home_team_id),
            MatchOutcome::AwayWin => Some(self.away_team_id),
            MatchOutcome::Tie => None,
        }
    }
}
