use crate::clock::GameDate;
use crate::league::SkippedFixture;
use crate::r#match::{MatchOutcome, MatchResult};

#[derive(Debug, Clone, PartialEq)]
pub enum WeekReport {
    Played(WeekSummary),
    SeasonEnded(SeasonSummary),
}

impl WeekReport {
    pub fn date(&self) -> GameDate {
        match self {
            WeekReport::Played(week) => week.date,
            WeekReport::SeasonEnded(season) => season.date,
        }
    }

    pub fn has_match_results(&self) -> bool {
        matches!(self, WeekReport::Played(week) if !week.results.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub season: u16,
    pub week_index: usize,
    pub date: GameDate,
    pub results: Vec<MatchResult>,
    pub skipped: Vec<SkippedFixture>,
    pub wages_paid: u64,
}

impl WeekSummary {
    pub fn new(season: u16, week_index: usize, date: GameDate) -> Self {
        WeekSummary {
            season,
            week_index,
            date,
            results: Vec::new(),
            skipped: Vec::new(),
            wages_paid: 0,
        }
    }

    /// (home wins, away wins, ties)
    pub fn outcome_counts(&self) -> (usize, usize, usize) {
        self.results
            .iter()
            .fold((0, 0, 0), |(h, a, t), result| match result.outcome() {
                MatchOutcome::HomeWin => (h + 1, a, t),
                MatchOutcome::AwayWin => (h, a + 1, t),
                MatchOutcome::Tie => (h, a, t + 1),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonSummary {
    pub finished_season: u16,
    pub date: GameDate,
    /// League id and its table leader when the season closed.
    pub champions: Vec<(u32, Option<u32>)>,
    pub renewed: Vec<u32>,
    pub released: Vec<u32>,
    pub retired: Vec<u32>,
    /// Free agents signed to fill short squads.
    pub signed: Vec<u32>,
}
