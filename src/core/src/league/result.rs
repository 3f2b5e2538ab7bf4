use crate::error::{ReferenceError, SimulationError};
use crate::r#match::MatchResult;
use crate::simulator::{SimulationContext, SimulatorData, WeekSummary};
use log::warn;
use std::sync::Arc;

/// Fixture left unplayed because one of its teams could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFixture {
    pub league_id: u32,
    pub fixture_id: u32,
    pub reason: ReferenceError,
}

pub struct LeagueResult {
    pub league_id: u32,
    pub week_index: usize,
    pub match_results: Vec<MatchResult>,
    pub skipped: Vec<SkippedFixture>,
}

impl LeagueResult {
    pub fn new(league_id: u32, week_index: usize) -> Self {
        LeagueResult {
            league_id,
            week_index,
            match_results: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn has_match_results(&self) -> bool {
        !self.match_results.is_empty()
    }

    /// Records scores on the calendar, books points and runs one training
    /// session for both rosters of every played fixture.
    pub fn process(
        self,
        data: &mut SimulatorData,
        ctx: &mut SimulationContext,
        summary: &mut WeekSummary,
    ) -> Result<(), SimulationError> {
        let config = Arc::clone(&ctx.config);
        let lifecycle = ctx.lifecycle();

        for match_result in self.match_results {
            let league = data
                .league_mut(self.league_id)
                .ok_or(ReferenceError::UnknownLeague(self.league_id))?;

            let recorded = league
                .calendar
                .fixture_mut(match_result.fixture_id)
                .map(|fixture| fixture.record_result(match_result.score))
                .unwrap_or(false);

            if !recorded {
                warn!(
                    "league {}: fixture {} already played or missing, result dropped",
                    self.league_id, match_result.fixture_id
                );
                continue;
            }

            league.table.award(&match_result);

            for team_id in [match_result.home_team_id, match_result.away_team_id] {
                let Some(team) = data.team_mut(team_id) else {
                    continue;
                };

                for player in team.players.iter_mut() {
                    let focus = config.focus_stats(player.role)?;
                    lifecycle.train(player, focus, ctx.rng());
                }
            }

            summary.results.push(match_result);
        }

        summary.skipped.extend(self.skipped);

        Ok(())
    }
}
