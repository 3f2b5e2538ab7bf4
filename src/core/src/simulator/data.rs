use crate::club::{Player, Team, FREE_AGENTS_TEAM_ID};
use crate::error::DataError;
use crate::league::League;
use std::collections::{BTreeMap, HashSet};

/// Id-indexed arena of the simulated world. Iteration order is the id order,
/// which keeps a seeded run reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulatorData {
    pub leagues: BTreeMap<u32, League>,
    pub teams: BTreeMap<u32, Team>,
}

impl SimulatorData {
    pub fn new(leagues: Vec<League>, teams: Vec<Team>) -> Result<Self, DataError> {
        let mut data = SimulatorData::default();

        for league in leagues {
            if data.leagues.contains_key(&league.id) {
                return Err(DataError::DuplicateId { kind: "league", id: league.id });
            }
            data.leagues.insert(league.id, league);
        }

        for team in teams {
            if data.teams.contains_key(&team.id) {
                return Err(DataError::DuplicateId { kind: "team", id: team.id });
            }
            data.teams.insert(team.id, team);
        }

        let mut player_ids = HashSet::new();
        for player in data.teams.values().flat_map(|t| t.players.iter()) {
            if !player_ids.insert(player.id) {
                return Err(DataError::DuplicateId { kind: "player", id: player.id });
            }
        }

        Ok(data)
    }

    pub fn league(&self, id: u32) -> Option<&League> {
        self.leagues.get(&id)
    }

    pub fn league_mut(&mut self, id: u32) -> Option<&mut League> {
        self.leagues.get_mut(&id)
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        self.teams.get(&id)
    }

    pub fn team_mut(&mut self, id: u32) -> Option<&mut Team> {
        self.teams.get_mut(&id)
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.teams.values().find_map(|t| t.players.get(id))
    }

    pub fn player_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.teams.values_mut().find_map(|t| t.players.get_mut(id))
    }

    /// The Free Agents pool, created on first use.
    pub fn free_agents_mut(&mut self) -> &mut Team {
        self.teams
            .entry(FREE_AGENTS_TEAM_ID)
            .or_insert_with(Team::free_agents)
    }

    pub fn league_teams(&self, league_id: u32) -> Vec<&Team> {
        self.league(league_id)
            .map(|league| league.team_ids.iter().filter_map(|id| self.team(*id)).collect())
            .unwrap_or_default()
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.teams.values().flat_map(|t| t.players.iter())
    }

    /// Longest calendar among the leagues.
    pub fn season_length(&self) -> usize {
        self.leagues.values().map(League::weeks_count).max().unwrap_or(0)
    }
}
