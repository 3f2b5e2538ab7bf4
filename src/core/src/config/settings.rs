use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const DEFAULT_LINEUP_SIZE: usize = 11;

/// Tunables of one session. Every field has a default so a partial JSON
/// document is enough to override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub match_settings: MatchSettings,
    pub lifecycle: LifecycleSettings,
    pub lineup_size: usize,
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            match_settings: MatchSettings::default(),
            lifecycle: LifecycleSettings::default(),
            lineup_size: DEFAULT_LINEUP_SIZE,
            seed: None,
        }
    }
}

impl SimulationSettings {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub attack_weight: f32,
    pub midfield_weight: f32,
    pub defense_weight: f32,
    pub min_chances: u8,
    pub max_chances: u8,
}

impl Default for MatchSettings {
    fn default() -> Self {
        MatchSettings {
            attack_weight: 1.5,
            midfield_weight: 1.0,
            defense_weight: 0.8,
            min_chances: 0,
            max_chances: 5,
        }
    }
}

impl MatchSettings {
    pub fn chances(&self) -> RangeInclusive<u8> {
        let max = self.max_chances.max(self.min_chances);
        self.min_chances..=max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleSettings {
    pub decline_age: u8,
    pub decay_rate: f32,
    pub stat_increase_base: f32,
    pub retirement_age_threshold: u8,
    pub base_retirement_chance: f32,
    pub retirement_chance_increase_per_year: f32,
    pub max_contract_years: u8,
}

impl Default for LifecycleSettings {
    fn default() -> Self {
        LifecycleSettings {
            decline_age: 30,
            decay_rate: 0.05,
            stat_increase_base: 1.0,
            retirement_age_threshold: 33,
            base_retirement_chance: 0.1,
            retirement_chance_increase_per_year: 0.15,
            max_contract_years: 5,
        }
    }
}
