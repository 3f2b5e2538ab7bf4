use crate::clock::GameDate;
use crate::club::{Player, Team};
use crate::error::StorageError;
use crate::league::{Calendar, League};
use serde::{Deserialize, Serialize};

/// Session progress saved next to the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub date: GameDate,
    pub season: u16,
    pub week_index: usize,
    pub managed_team_id: Option<u32>,
    pub seed: u64,
}

/// Persistence collaborator of the orchestrator. Writes between `begin` and
/// `commit` form one unit of work; `rollback` discards them.
pub trait GameStorage {
    fn load_teams(&self) -> Result<Vec<Team>, StorageError>;
    fn save_team(&mut self, team: &Team) -> Result<(), StorageError>;

    fn load_players(&self, team_id: u32) -> Result<Vec<Player>, StorageError>;
    fn update_player(&mut self, player: &Player) -> Result<(), StorageError>;
    fn delete_player(&mut self, player_id: u32) -> Result<(), StorageError>;

    fn load_leagues(&self) -> Result<Vec<League>, StorageError>;
    fn save_league(&mut self, league: &League) -> Result<(), StorageError>;
    fn reset_league_points(&mut self, league_id: u32) -> Result<(), StorageError>;

    fn load_calendar(&self, season: u16, league_id: u32) -> Result<Option<Calendar>, StorageError>;
    fn save_calendar(&mut self, calendar: &Calendar) -> Result<(), StorageError>;

    fn load_game_state(&self) -> Result<Option<GameState>, StorageError>;
    fn save_game_state(&mut self, state: &GameState) -> Result<(), StorageError>;

    fn begin(&mut self) -> Result<(), StorageError>;
    fn commit(&mut self) -> Result<(), StorageError>;
    fn rollback(&mut self) -> Result<(), StorageError>;
}
