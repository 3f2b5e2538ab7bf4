use crate::club::Player;
use crate::config::{MatchSettings, RoleBucket, StatsConfig};
use crate::error::ConfigError;

/// Summed overall ratings of a lineup, split by pitch line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TeamStrength {
    pub attack: f32,
    pub midfield: f32,
    pub defense: f32,
}

impl TeamStrength {
    pub fn from_lineup(players: &[&Player], config: &StatsConfig) -> Result<Self, ConfigError> {
        let mut strength = TeamStrength::default();

        for player in players {
            let rating = player.overall_rating(config)?;

            match player.role.bucket() {
                RoleBucket::Attack => strength.attack += rating,
                RoleBucket::Midfield => strength.midfield += rating,
                RoleBucket::Defense => strength.defense += rating,
            }
        }

        Ok(strength)
    }

    pub fn total(&self, settings: &MatchSettings) -> f32 {
        self.attack * settings.attack_weight
            + self.midfield * settings.midfield_weight
            + self.defense * settings.defense_weight
    }
}

/// Share of chances that fall to the home side.
pub fn home_chance(home_strength: f32, away_strength: f32) -> f32 {
    let total = home_strength + away_strength;

    if total <= 0.0 {
        return 0.5;
    }

    home_strength / total
}
