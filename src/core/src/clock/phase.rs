use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonPhase {
    PreSeason,
    RegularSeason,
    PostSeason,
    OffSeason,
}

impl SeasonPhase {
    pub fn from_month(month: u32) -> Self {
        match month {
            5 => SeasonPhase::PostSeason,
            6 => SeasonPhase::OffSeason,
            7 => SeasonPhase::PreSeason,
            _ => SeasonPhase::RegularSeason,
        }
    }
}

impl Display for SeasonPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            SeasonPhase::PreSeason => "pre-season",
            SeasonPhase::RegularSeason => "regular season",
            SeasonPhase::PostSeason => "post-season",
            SeasonPhase::OffSeason => "off-season",
        };
        write!(f, "{}", name)
    }
}
