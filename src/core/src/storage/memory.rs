use crate::club::{Player, Team};
use crate::error::{ReferenceError, StorageError};
use crate::league::{Calendar, League};
use crate::storage::{GameState, GameStorage};
use log::debug;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
struct MemoryTables {
    teams: BTreeMap<u32, Team>,
    leagues: BTreeMap<u32, League>,
    calendars: BTreeMap<(u16, u32), Calendar>,
    state: Option<GameState>,
}

/// In-process storage. A transaction is a snapshot of the tables taken at
/// `begin` and restored by `rollback`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tables: MemoryTables,
    snapshot: Option<MemoryTables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    pub fn in_transaction(&self) -> bool {
        self.snapshot.is_some()
    }

    fn missing_team(team_id: u32) -> StorageError {
        StorageError::Backend(ReferenceError::UnknownTeam(team_id).to_string())
    }
}

impl GameStorage for MemoryStorage {
    fn load_teams(&self) -> Result<Vec<Team>, StorageError> {
        Ok(self.tables.teams.values().cloned().collect())
    }

    fn save_team(&mut self, team: &Team) -> Result<(), StorageError> {
        self.tables.teams.insert(team.id, team.clone());
        Ok(())
    }

    fn load_players(&self, team_id: u32) -> Result<Vec<Player>, StorageError> {
        self.tables
            .teams
            .get(&team_id)
            .map(|team| team.players.players().to_vec())
            .ok_or_else(|| Self::missing_team(team_id))
    }

    /// Writes the player into the roster named by its team id, removing it
    /// from any roster it was stored in before.
    fn update_player(&mut self, player: &Player) -> Result<(), StorageError> {
        if !self.tables.teams.contains_key(&player.team_id) {
            return Err(Self::missing_team(player.team_id));
        }

        for team in self.tables.teams.values_mut() {
            if team.id != player.team_id {
                team.players.take(player.id);
            }
        }

        if let Some(team) = self.tables.teams.get_mut(&player.team_id) {
            team.players.add(player.clone());
        }

        Ok(())
    }

    fn delete_player(&mut self, player_id: u32) -> Result<(), StorageError> {
        let removed = self
            .tables
            .teams
            .values_mut()
            .filter_map(|team| team.release(player_id))
            .count();

        debug!("storage: player {} deleted from {} rosters", player_id, removed);

        Ok(())
    }

    fn load_leagues(&self) -> Result<Vec<League>, StorageError> {
        Ok(self.tables.leagues.values().cloned().collect())
    }

    fn save_league(&mut self, league: &League) -> Result<(), StorageError> {
        self.tables.leagues.insert(league.id, league.clone());
        Ok(())
    }

    fn reset_league_points(&mut self, league_id: u32) -> Result<(), StorageError> {
        let league = self.tables.leagues.get_mut(&league_id).ok_or_else(|| {
            StorageError::Backend(ReferenceError::UnknownLeague(league_id).to_string())
        })?;

        league.reset_table();
        Ok(())
    }

    fn load_calendar(&self, season: u16, league_id: u32) -> Result<Option<Calendar>, StorageError> {
        Ok(self.tables.calendars.get(&(season, league_id)).cloned())
    }

    fn save_calendar(&mut self, calendar: &Calendar) -> Result<(), StorageError> {
        self.tables
            .calendars
            .insert((calendar.season, calendar.league_id), calendar.clone());
        Ok(())
    }

    fn load_game_state(&self) -> Result<Option<GameState>, StorageError> {
        Ok(self.tables.state.clone())
    }

    fn save_game_state(&mut self, state: &GameState) -> Result<(), StorageError> {
        self.tables.state = Some(state.clone());
        Ok(())
    }

    fn begin(&mut self) -> Result<(), StorageError> {
        if self.snapshot.is_some() {
            return Err(StorageError::TransactionInProgress);
        }

        self.snapshot = Some(self.tables.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StorageError> {
        self.snapshot.take().ok_or(StorageError::NoTransaction)?;
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), StorageError> {
        self.tables = self.snapshot.take().ok_or(StorageError::NoTransaction)?;
        Ok(())
    }
}
