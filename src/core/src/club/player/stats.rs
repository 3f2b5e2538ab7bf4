use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MIN_STAT: f32 = 1.0;
pub const MAX_STAT: f32 = 100.0;

/// Stat name to value. Every write clamps into `[MIN_STAT, MAX_STAT]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f32>", into = "BTreeMap<String, f32>")]
pub struct PlayerStats {
    values: BTreeMap<String, f32>,
}

impl PlayerStats {
    pub fn new() -> Self {
        PlayerStats::default()
    }

    pub fn get(&self, stat: &str) -> Option<f32> {
        self.values.get(stat).copied()
    }

    /// Missing stats rate as zero.
    pub fn value_or_zero(&self, stat: &str) -> f32 {
        self.get(stat).unwrap_or(0.0)
    }

    pub fn set(&mut self, stat: &str, value: f32) -> f32 {
        let clamped = clamp_stat(value);

        match self.values.get_mut(stat) {
            Some(current) => *current = clamped,
            None => {
                self.values.insert(stat.to_string(), clamped);
            }
        }

        clamped
    }

    /// Applies `delta` to an existing stat and returns the new value.
    pub fn adjust(&mut self, stat: &str, delta: f32) -> Option<f32> {
        let current = self.values.get_mut(stat)?;
        *current = clamp_stat(*current + delta);
        Some(*current)
    }

    pub fn names(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<BTreeMap<String, f32>> for PlayerStats {
    fn from(values: BTreeMap<String, f32>) -> Self {
        let values = values
            .into_iter()
            .map(|(name, value)| (name, clamp_stat(value)))
            .collect();

        PlayerStats { values }
    }
}

impl From<PlayerStats> for BTreeMap<String, f32> {
    fn from(stats: PlayerStats) -> Self {
        stats.values
    }
}

impl<S: Into<String>> FromIterator<(S, f32)> for PlayerStats {
    fn from_iter<I: IntoIterator<Item = (S, f32)>>(iter: I) -> Self {
        let values: BTreeMap<String, f32> = iter
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();

        PlayerStats::from(values)
    }
}

fn clamp_stat(value: f32) -> f32 {
    if value.is_nan() {
        return MIN_STAT;
    }

    value.clamp(MIN_STAT, MAX_STAT)
}
