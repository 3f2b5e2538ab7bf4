use crate::clock::{GameDate, SeasonPhase};
use crate::club::FREE_AGENTS_TEAM_ID;
use crate::config::{SimulationSettings, StatsConfig};
use crate::error::{DataError, ReferenceError, SimulationError, StorageError};
use crate::league::LeagueTableRow;
use crate::simulator::{SeasonSummary, SimulationContext, SimulatorData, WeekReport, WeekSummary};
use crate::storage::{GameState, GameStorage};
use crate::utils::Logging;
use log::{debug, error, info, warn};
use std::sync::Arc;

pub const FIRST_SEASON: u16 = 1;

/// Drives the simulated world one week at a time.
pub struct SeasonOrchestrator {
    context: SimulationContext,
    data: SimulatorData,
    storage: Option<Box<dyn GameStorage>>,
}

impl SeasonOrchestrator {
    /// Validates the world and schedules every league without a calendar,
    /// first round one week after `start`.
    pub fn new(
        data: SimulatorData,
        config: Arc<StatsConfig>,
        settings: SimulationSettings,
        start: GameDate,
    ) -> Result<Self, SimulationError> {
        let context = SimulationContext::new(start, FIRST_SEASON, config, settings);

        let mut orchestrator = SeasonOrchestrator {
            context,
            data,
            storage: None,
        };

        orchestrator.validate()?;
        orchestrator.data.free_agents_mut();

        let season = orchestrator.context.season;
        let first_round = start.add_week();

        for league in orchestrator
            .data
            .leagues
            .values_mut()
            .filter(|league| league.calendar.is_empty())
        {
            league.schedule(season, first_round);
        }

        info!(
            "simulation started on {}: {} leagues, {} teams, seed {}",
            start,
            orchestrator.data.leagues.len(),
            orchestrator.data.teams.len(),
            orchestrator.context.seed()
        );

        Ok(orchestrator)
    }

    /// Rebuilds a session from the last committed state in `storage`.
    pub fn restore(
        storage: Box<dyn GameStorage>,
        config: Arc<StatsConfig>,
        settings: SimulationSettings,
    ) -> Result<Self, SimulationError> {
        let state = storage.load_game_state()?.ok_or(StorageError::NoSavedGame)?;

        let mut leagues = storage.load_leagues()?;
        for league in leagues.iter_mut() {
            if let Some(calendar) = storage.load_calendar(state.season, league.id)? {
                league.calendar = calendar;
            }
        }

        let data = SimulatorData::new(leagues, storage.load_teams()?)?;

        let settings = settings.with_seed(state.seed);
        let mut context = SimulationContext::new(state.date, state.season, config, settings);
        context.week_index = state.week_index;
        context.managed_team_id = state.managed_team_id;
        context.reseed_for_progress();

        let orchestrator = SeasonOrchestrator {
            context,
            data,
            storage: Some(storage),
        };

        orchestrator.validate()?;

        info!(
            "simulation restored at {}, season {} week {}",
            state.date, state.season, state.week_index
        );

        Ok(orchestrator)
    }

    pub fn with_storage(mut self, storage: Box<dyn GameStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn storage(&self) -> Option<&dyn GameStorage> {
        self.storage.as_deref()
    }

    pub fn into_storage(self) -> Option<Box<dyn GameStorage>> {
        self.storage
    }

    /// Every rostered role must be rateable and trainable, every league
    /// member must exist, and every player must carry its roster's team id.
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.context
            .config
            .ensure_roles(self.data.players().map(|player| player.role))?;

        for league in self.data.leagues.values() {
            let missing = league.team_ids.iter().find(|id| self.data.team(**id).is_none());
            if let Some(missing) = missing {
                return Err(ReferenceError::UnknownTeam(*missing).into());
            }
        }

        for team in self.data.teams.values() {
            if let Some(player) = team.players.iter().find(|p| p.team_id != team.id) {
                return Err(DataError::Invalid(format!(
                    "player {} is on team {} but carries team id {}",
                    player.id, team.id, player.team_id
                ))
                .into());
            }
        }

        Ok(())
    }

    pub fn date(&self) -> GameDate {
        self.context.date
    }

    pub fn season(&self) -> u16 {
        self.context.season
    }

    pub fn week_index(&self) -> usize {
        self.context.week_index
    }

    pub fn phase(&self) -> SeasonPhase {
        self.context.phase()
    }

    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    pub fn data(&self) -> &SimulatorData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut SimulatorData {
        &mut self.data
    }

    pub fn leaderboard(&self, league_id: u32) -> Result<Vec<(u32, u16)>, ReferenceError> {
        self.data
            .league(league_id)
            .map(|league| league.table.leaderboard())
            .ok_or(ReferenceError::UnknownLeague(league_id))
    }

    pub fn standings(&self, league_id: u32) -> Result<Vec<&LeagueTableRow>, ReferenceError> {
        self.data
            .league(league_id)
            .map(|league| league.table.rows())
            .ok_or(ReferenceError::UnknownLeague(league_id))
    }

    pub fn managed_team_id(&self) -> Option<u32> {
        self.context.managed_team_id
    }

    pub fn set_managed_team(&mut self, team_id: u32) -> Result<(), ReferenceError> {
        if team_id == FREE_AGENTS_TEAM_ID || self.data.team(team_id).is_none() {
            return Err(ReferenceError::UnknownTeam(team_id));
        }

        self.context.managed_team_id = Some(team_id);
        Ok(())
    }

    pub fn set_lineup(&mut self, team_id: u32, player_ids: Vec<u32>) -> Result<(), ReferenceError> {
        let team = self
            .data
            .team_mut(team_id)
            .ok_or(ReferenceError::UnknownTeam(team_id))?;

        if let Some(unknown) = player_ids.iter().find(|id| !team.players.contains(**id)) {
            return Err(ReferenceError::UnknownPlayer(*unknown));
        }

        team.set_lineup(player_ids);
        Ok(())
    }

    /// Moves a player out of the Free Agents pool. Refused outside a
    /// transfer window.
    pub fn sign_free_agent(
        &mut self,
        team_id: u32,
        player_id: u32,
    ) -> Result<bool, SimulationError> {
        if !self.context.date.is_transfer_window_open() {
            debug!(
                "{}: transfer window closed, player {} not signed",
                self.context.date, player_id
            );
            return Ok(false);
        }

        if team_id == FREE_AGENTS_TEAM_ID || self.data.team(team_id).is_none() {
            return Err(ReferenceError::UnknownTeam(team_id).into());
        }

        let mut player = self
            .data
            .free_agents_mut()
            .release(player_id)
            .ok_or(ReferenceError::UnknownPlayer(player_id))?;

        player.contract_years = player.contract_years.max(1);

        let team = self
            .data
            .team_mut(team_id)
            .ok_or(ReferenceError::UnknownTeam(team_id))?;

        info!("{} signed {}", team.name, player);
        team.sign(player);

        Ok(true)
    }

    /// Moves the clock one week. Plays the week's fixtures, or closes the
    /// season once every calendar is exhausted. The clock only moves when the
    /// week itself succeeds; a failed save leaves the week applied in memory.
    pub fn advance_week(&mut self) -> Result<WeekReport, SimulationError> {
        let date = self.context.date.add_week();

        let report = if self.context.week_index >= self.data.season_length() {
            WeekReport::SeasonEnded(self.end_season(date)?)
        } else {
            WeekReport::Played(self.play_week(date)?)
        };

        self.context.date = date;
        self.persist(&report)?;

        Ok(report)
    }

    fn play_week(&mut self, date: GameDate) -> Result<WeekSummary, SimulationError> {
        let week_index = self.context.week_index;
        let mut summary = WeekSummary::new(self.context.season, week_index, date);

        let league_ids: Vec<u32> = self.data.leagues.keys().copied().collect();

        for league_id in league_ids {
            let league = self
                .data
                .league(league_id)
                .ok_or(ReferenceError::UnknownLeague(league_id))?;

            let teams = &self.data.teams;
            let context = &mut self.context;

            let result = Logging::estimate_result(
                || league.simulate_week(week_index, teams, context),
                "league week simulated",
            )?;

            result.process(&mut self.data, &mut self.context, &mut summary)?;
        }

        summary.wages_paid = self.pay_wages();
        self.context.week_index += 1;

        let (home_wins, away_wins, ties) = summary.outcome_counts();

        info!(
            "{} season {} week {}: {} matches ({} home, {} away, {} tied), {} skipped",
            summary.date,
            summary.season,
            week_index + 1,
            summary.results.len(),
            home_wins,
            away_wins,
            ties,
            summary.skipped.len()
        );

        Ok(summary)
    }

    fn pay_wages(&mut self) -> u64 {
        self.data
            .teams
            .values_mut()
            .filter(|team| team.league_id.is_some())
            .map(|team| team.pay_week_salary() as u64)
            .sum()
    }

    fn end_season(&mut self, date: GameDate) -> Result<SeasonSummary, SimulationError> {
        let finished_season = self.context.season;

        let champions: Vec<(u32, Option<u32>)> = self
            .data
            .leagues
            .values()
            .map(|league| (league.id, league.table.leader()))
            .collect();

        for (league_id, leader) in &champions {
            if let (Some(league), Some(team)) =
                (self.data.league(*league_id), leader.and_then(|id| self.data.team(id)))
            {
                info!("season {}: {} won {}", finished_season, team.name, league.name);
            }
        }

        let (renewed, released) = self.expire_contracts()?;
        let retired = self.retire_players();
        let signed = self.fill_squads()?;

        self.context.season += 1;
        self.context.week_index = 0;

        let season = self.context.season;
        let first_round = date.add_week();

        for league in self.data.leagues.values_mut() {
            league.reset_table();
            league.schedule(season, first_round);
        }

        info!(
            "season {} closed on {}: {} renewed, {} released, {} retired, {} signed",
            finished_season,
            date,
            renewed.len(),
            released.len(),
            retired.len(),
            signed.len()
        );

        Ok(SeasonSummary {
            finished_season,
            date,
            champions,
            renewed,
            released,
            retired,
            signed,
        })
    }

    /// Counts down every club contract. A run-out contract is renewed when
    /// the player is among the club's best `lineup_size`, otherwise the
    /// player goes to Free Agents.
    fn expire_contracts(&mut self) -> Result<(Vec<u32>, Vec<u32>), SimulationError> {
        let lifecycle = self.context.lifecycle();
        let config = Arc::clone(&self.context.config);
        let squad_size = self.context.settings.lineup_size;
        let rng = self.context.rng();

        let mut renewed = Vec::new();
        let mut expired = Vec::new();

        for team in self.data.teams.values_mut().filter(|team| !team.is_free_agents()) {
            let core: Vec<u32> = team
                .best_players(&config, squad_size)?
                .iter()
                .map(|player| player.id)
                .collect();

            let mut leaving = Vec::new();

            for player in team.players.iter_mut() {
                if !lifecycle.expire_contract(player) {
                    continue;
                }

                if core.contains(&player.id) {
                    let years = lifecycle.renew_contract(player, rng);
                    debug!("{} renewed {} for {} years", team.name, player, years);
                    renewed.push(player.id);
                } else {
                    leaving.push(player.id);
                }
            }

            expired.extend(leaving.into_iter().filter_map(|id| team.release(id)));
        }

        let released: Vec<u32> = expired.iter().map(|player| player.id).collect();

        let free_agents = self.data.free_agents_mut();
        for player in expired {
            debug!("{} released to {}", player, free_agents.name);
            free_agents.sign(player);
        }

        Ok((renewed, released))
    }

    /// Ages every player and removes the ones who retire.
    fn retire_players(&mut self) -> Vec<u32> {
        let lifecycle = self.context.lifecycle();
        let rng = self.context.rng();
        let mut retired = Vec::new();

        for team in self.data.teams.values_mut() {
            for player in team.players.iter_mut() {
                lifecycle.age_player(player);
            }

            let retiring = team
                .players
                .drain_where(|player| lifecycle.check_retirement(player, rng));

            if let Some(lineup) = team.lineup.as_mut() {
                lineup.retain(|id| !retiring.iter().any(|player| player.id == *id));
            }

            for player in retiring {
                info!("{} retired from {} at {}", player.name, team.name, player.age);
                retired.push(player.id);
            }
        }

        retired
    }

    /// Tops up every league squad short of `lineup_size` with the best
    /// rated free agents, in team id order.
    fn fill_squads(&mut self) -> Result<Vec<u32>, SimulationError> {
        let lifecycle = self.context.lifecycle();
        let config = Arc::clone(&self.context.config);
        let squad_size = self.context.settings.lineup_size;

        let short: Vec<(u32, usize)> = self
            .data
            .teams
            .values()
            .filter(|team| team.league_id.is_some() && team.players.len() < squad_size)
            .map(|team| (team.id, squad_size - team.players.len()))
            .collect();

        let mut signed = Vec::new();

        for (team_id, missing) in short {
            let picks: Vec<u32> = self
                .data
                .free_agents_mut()
                .best_players(&config, missing)?
                .iter()
                .map(|player| player.id)
                .collect();

            if picks.len() < missing {
                warn!(
                    "team {}: only {} of {} missing players available as free agents",
                    team_id,
                    picks.len(),
                    missing
                );
            }

            for player_id in picks {
                let Some(mut player) = self.data.free_agents_mut().release(player_id) else {
                    continue;
                };

                lifecycle.renew_contract(&mut player, self.context.rng());

                let team = self
                    .data
                    .team_mut(team_id)
                    .ok_or(ReferenceError::UnknownTeam(team_id))?;

                debug!("{} signed free agent {}", team.name, player);
                team.sign(player);
                signed.push(player_id);
            }
        }

        Ok(signed)
    }

    fn game_state(context: &SimulationContext) -> GameState {
        GameState {
            date: context.date,
            season: context.season,
            week_index: context.week_index,
            managed_team_id: context.managed_team_id,
            seed: context.seed(),
        }
    }

    /// Writes the week as one unit of work, rolled back on the first failure.
    fn persist(&mut self, report: &WeekReport) -> Result<(), SimulationError> {
        let Some(storage) = self.storage.as_mut() else {
            return Ok(());
        };

        storage.begin()?;

        match Self::write_week(storage.as_mut(), &self.data, &self.context, report) {
            Ok(()) => {
                storage.commit()?;
                Ok(())
            }
            Err(err) => {
                if let Err(rollback_err) = storage.rollback() {
                    error!("storage rollback failed: {}", rollback_err);
                }

                Err(err.into())
            }
        }
    }

    fn write_week(
        storage: &mut dyn GameStorage,
        data: &SimulatorData,
        context: &SimulationContext,
        report: &WeekReport,
    ) -> Result<(), StorageError> {
        for team in data.teams.values() {
            storage.save_team(team)?;
        }

        for league in data.leagues.values() {
            storage.save_league(league)?;
            storage.save_calendar(&league.calendar)?;
        }

        if let WeekReport::SeasonEnded(summary) = report {
            for player_id in &summary.retired {
                storage.delete_player(*player_id)?;
            }

            for league_id in data.leagues.keys() {
                storage.reset_league_points(*league_id)?;
            }
        }

        storage.save_game_state(&Self::game_state(context))
    }
}
