use crate::clock::{GameDate, SeasonPhase};
use crate::club::PlayerLifecycle;
use crate::config::{SimulationSettings, StatsConfig};
use crate::r#match::MatchSimulator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Everything one session needs besides the world itself.
pub struct SimulationContext {
    pub date: GameDate,
    pub season: u16,
    pub week_index: usize,
    pub managed_team_id: Option<u32>,

    pub config: Arc<StatsConfig>,
    pub settings: SimulationSettings,

    seed: u64,
    rng: StdRng,
}

impl SimulationContext {
    /// Seeds from `settings.seed`, or from entropy when it is unset.
    pub fn new(
        date: GameDate,
        season: u16,
        config: Arc<StatsConfig>,
        settings: SimulationSettings,
    ) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);

        SimulationContext {
            date,
            season,
            week_index: 0,
            managed_team_id: None,
            config,
            settings,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Re-seeds the generator for a game resumed at the current season and week.
    pub fn reseed_for_progress(&mut self) {
        let progress = ((self.season as u64) << 32) | self.week_index as u64;
        self.rng = StdRng::seed_from_u64(self.seed ^ progress);
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn phase(&self) -> SeasonPhase {
        self.date.season_phase()
    }

    pub fn lifecycle(&self) -> PlayerLifecycle {
        PlayerLifecycle::new(self.settings.lifecycle.clone())
    }

    pub fn match_simulator(&self) -> MatchSimulator {
        MatchSimulator::new(self.settings.match_settings.clone())
    }
}
