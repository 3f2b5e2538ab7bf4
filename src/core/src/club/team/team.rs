use crate::club::TeamBuilder;
use crate::club::{Player, PlayerCollection};
use crate::config::StatsConfig;
use crate::error::ConfigError;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

/// Pool of players without a club. Never part of a league.
pub const FREE_AGENTS_TEAM_ID: u32 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub league_id: Option<u32>,
    pub name: String,
    pub balance: i64,

    pub players: PlayerCollection,
    pub lineup: Option<Vec<u32>>,
}

impl Team {
    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn free_agents() -> Self {
        Team {
            id: FREE_AGENTS_TEAM_ID,
            league_id: None,
            name: String::from("Free Agents"),
            balance: 0,
            players: PlayerCollection::default(),
            lineup: None,
        }
    }

    pub fn is_free_agents(&self) -> bool {
        self.id == FREE_AGENTS_TEAM_ID
    }

    /// Moves the player into this roster, rewriting its team id.
    pub fn sign(&mut self, mut player: Player) {
        player.team_id = self.id;
        self.players.add(player);
    }

    pub fn release(&mut self, player_id: u32) -> Option<Player> {
        if let Some(lineup) = self.lineup.as_mut() {
            lineup.retain(|id| *id != player_id);
        }

        self.players.take(player_id)
    }

    pub fn set_lineup(&mut self, player_ids: Vec<u32>) {
        self.lineup = Some(player_ids);
    }

    /// Players fielded in a match: the manager's pick when there is one,
    /// otherwise the `size` best rated players (ties go to the lower id).
    pub fn lineup_players(
        &self,
        config: &StatsConfig,
        size: usize,
    ) -> Result<Vec<&Player>, ConfigError> {
        if let Some(lineup) = &self.lineup {
            let picked: Vec<&Player> = lineup
                .iter()
                .filter_map(|id| self.players.get(*id))
                .unique_by(|p| p.id)
                .collect();

            if !picked.is_empty() {
                return Ok(picked);
            }

            debug!("team {}: lineup has no roster players, selecting automatically", self.name);
        }

        self.best_players(config, size)
    }

    /// The `size` best rated players, ties going to the lower id.
    pub fn best_players(
        &self,
        config: &StatsConfig,
        size: usize,
    ) -> Result<Vec<&Player>, ConfigError> {
        let rated: Vec<(f32, &Player)> = self
            .players
            .iter()
            .map(|p| p.overall_rating(config).map(|rating| (rating, p)))
            .collect::<Result<_, _>>()?;

        Ok(rated
            .into_iter()
            .sorted_by(|(ra, a), (rb, b)| rb.total_cmp(ra).then(a.id.cmp(&b.id)))
            .take(size)
            .map(|(_, p)| p)
            .collect())
    }

    pub fn get_week_salary(&self) -> u32 {
        self.players.iter().map(Player::week_wage).sum()
    }

    /// Deducts one week of wages and returns the amount paid.
    pub fn pay_week_salary(&mut self) -> u32 {
        let salary = self.get_week_salary();
        self.balance -= salary as i64;

        debug!("team: {}, paid salary {}, balance {}", self.name, salary, self.balance);

        salary
    }
}
