use crate::club::Player;
use crate::config::{MatchSettings, StatsConfig};
use crate::error::ConfigError;
use crate::r#match::{home_chance, MatchResult, MatchScore, TeamStrength};
use log::debug;
use rand::{Rng, RngExt};

/// One side of a fixture: the team and the players it fields.
#[derive(Debug, Clone)]
pub struct TeamSheet<'p> {
    pub team_id: u32,
    pub players: Vec<&'p Player>,
}

impl<'p> TeamSheet<'p> {
    pub fn new(team_id: u32, players: Vec<&'p Player>) -> Self {
        TeamSheet { team_id, players }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSimulator {
    settings: MatchSettings,
}

impl MatchSimulator {
    pub fn new(settings: MatchSettings) -> Self {
        MatchSimulator { settings }
    }

    /// Scores a fixture from the two lineups. Each chance goes to the home
    /// side when a fresh draw falls under its share of the combined strength.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        fixture_id: u32,
        home: &TeamSheet<'_>,
        away: &TeamSheet<'_>,
        config: &StatsConfig,
        rng: &mut R,
    ) -> Result<MatchResult, ConfigError> {
        let home_strength = TeamStrength::from_lineup(&home.players, config)?.total(&self.settings);
        let away_strength = TeamStrength::from_lineup(&away.players, config)?.total(&self.settings);

        let home_chance = home_chance(home_strength, away_strength);

        let chances = rng.random_range(self.settings.chances());

        let mut score = MatchScore::default();
        for _ in 0..chances {
            if rng.random::<f32>() < home_chance {
                score.home += 1;
            } else {
                score.away += 1;
            }
        }

        debug!(
            "fixture {}: {} vs {} strength {:.1} vs {:.1}, {} chances, score {}",
            fixture_id, home.team_id, away.team_id, home_strength, away_strength, chances, score
        );

        Ok(MatchResult::new(fixture_id, home.team_id, away.team_id, score))
    }
}
