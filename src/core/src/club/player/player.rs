use crate::club::PlayerBuilder;
use crate::club::PlayerStats;
use crate::config::{PlayerRole, StatsConfig};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPreferredFoot {
    Left,
    Right,
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub team_id: u32,

    pub name: String,
    pub nationality: String,
    pub preferred_foot: PlayerPreferredFoot,

    pub age: u8,
    pub contract_years: u8,
    pub wage: u32,
    pub height: u16,

    pub role: PlayerRole,
    pub stats: PlayerStats,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    /// Role-weighted sum of the player's stats. Stats the player lacks add nothing.
    pub fn overall_rating(&self, config: &StatsConfig) -> std::result::Result<f32, ConfigError> {
        let weights = config.role(self.role)?;

        Ok(weights
            .iter()
            .map(|(stat, weight)| weight * self.stats.value_or_zero(stat))
            .sum())
    }

    pub fn week_wage(&self) -> u32 {
        self.wage / 52
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.name, self.role, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StatsConfig {
        StatsConfig::from_json_str(
            r#"{
                "possible_stats": ["Speed", "Shooting", "Heading"],
                "roles": {
                    "Striker": {
                        "stats": ["Speed", "Shooting", "Heading"],
                        "weights": [0.5, 1.0, 0.25]
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn overall_rating_is_weighted_sum() {
        let player = Player::builder()
            .id(1)
            .name("Test Striker".to_string())
            .role(PlayerRole::Striker)
            .stats([("Speed", 60.0), ("Shooting", 80.0), ("Heading", 40.0)].into_iter().collect())
            .build()
            .unwrap();

        let rating = player.overall_rating(&config()).unwrap();

        assert_eq!(rating, 0.5 * 60.0 + 80.0 + 0.25 * 40.0);
    }

    #[test]
    fn missing_stat_contributes_nothing() {
        let player = Player::builder()
            .id(1)
            .name("Test Striker".to_string())
            .role(PlayerRole::Striker)
            .stats([("Shooting", 80.0)].into_iter().collect())
            .build()
            .unwrap();

        assert_eq!(player.overall_rating(&config()).unwrap(), 80.0);
    }

    #[test]
    fn unconfigured_role_fails_rating() {
        let player = Player::builder()
            .id(1)
            .name("Test Keeper".to_string())
            .role(PlayerRole::Goalkeeper)
            .build()
            .unwrap();

        assert!(matches!(
            player.overall_rating(&config()),
            Err(ConfigError::MissingRole(PlayerRole::Goalkeeper))
        ));
    }

    #[test]
    fn week_wage_divides_annual_wage() {
        let player = Player::builder()
            .id(1)
            .name("Test".to_string())
            .role(PlayerRole::Winger)
            .wage(52_000)
            .build()
            .unwrap();

        assert_eq!(player.week_wage(), 1_000);
    }
}
