use crate::clock::GameDate;
use crate::club::Team;
use crate::error::{ConfigError, ReferenceError};
use crate::league::{
    Calendar, FixtureScheduler, LeagueResult, LeagueTable, RoundRobinMode, SkippedFixture,
};
use crate::r#match::TeamSheet;
use crate::simulator::SimulationContext;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub team_ids: Vec<u32>,
    pub mode: RoundRobinMode,
    pub calendar: Calendar,
    pub table: LeagueTable,
}

impl League {
    pub fn new(id: u32, name: String, team_ids: Vec<u32>, mode: RoundRobinMode) -> Self {
        let table = LeagueTable::new(&team_ids);

        League {
            id,
            name,
            team_ids,
            mode,
            calendar: Calendar::default(),
            table,
        }
    }

    pub fn contains_team(&self, team_id: u32) -> bool {
        self.team_ids.contains(&team_id)
    }

    /// Replaces the calendar with a fresh round robin for `season`.
    pub fn schedule(&mut self, season: u16, start: GameDate) {
        self.calendar =
            FixtureScheduler::calendar(season, self.id, &self.team_ids, self.mode, start);

        info!(
            "league {}: season {} scheduled, {} weeks from {}",
            self.name,
            season,
            self.calendar.len(),
            start
        );
    }

    pub fn reset_table(&mut self) {
        self.table.reset(&self.team_ids);
    }

    pub fn weeks_count(&self) -> usize {
        self.calendar.len()
    }

    /// Plays every unplayed fixture of the week against the current rosters.
    /// Nothing is written here; the returned result is processed afterwards.
    pub fn simulate_week(
        &self,
        week_index: usize,
        teams: &BTreeMap<u32, Team>,
        ctx: &mut SimulationContext,
    ) -> Result<LeagueResult, ConfigError> {
        let mut result = LeagueResult::new(self.id, week_index);

        let Some(week) = self.calendar.week(week_index) else {
            debug!("league {}: no fixtures in week {}", self.name, week_index);
            return Ok(result);
        };

        let config = Arc::clone(&ctx.config);
        let lineup_size = ctx.settings.lineup_size;
        let simulator = ctx.match_simulator();

        for fixture in week.fixtures.iter().filter(|f| !f.is_played()) {
            let (home, away) = match (
                teams.get(&fixture.home_team_id),
                teams.get(&fixture.away_team_id),
            ) {
                (Some(home), Some(away)) => (home, away),
                (home, _) => {
                    let missing = if home.is_none() {
                        fixture.home_team_id
                    } else {
                        fixture.away_team_id
                    };
                    let reason = ReferenceError::UnknownTeam(missing);

                    warn!("league {}: fixture {} skipped, {}", self.name, fixture.id, reason);

                    result.skipped.push(SkippedFixture {
                        league_id: self.id,
                        fixture_id: fixture.id,
                        reason,
                    });
                    continue;
                }
            };

            let home_sheet = TeamSheet::new(home.id, home.lineup_players(&config, lineup_size)?);
            let away_sheet = TeamSheet::new(away.id, away.lineup_players(&config, lineup_size)?);

            let match_result =
                simulator.simulate(fixture.id, &home_sheet, &away_sheet, &config, ctx.rng())?;

            debug!(
                "{}: {} {} {}",
                fixture.date, home.name, match_result.score, away.name
            );

            result.match_results.push(match_result);
        }

        Ok(result)
    }
}
