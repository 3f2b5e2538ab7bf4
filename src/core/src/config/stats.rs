use crate::config::PlayerRole;
use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct StatsConfigEntity {
    possible_stats: Vec<String>,
    roles: BTreeMap<String, RoleWeightsEntity>,
}

#[derive(Debug, Deserialize)]
struct RoleWeightsEntity {
    stats: Vec<String>,
    weights: Vec<f32>,
    #[serde(default)]
    focus: Option<Vec<String>>,
}

/// Ordered stat names of one role with their parallel weights.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleWeights {
    stats: Vec<String>,
    weights: Vec<f32>,
    focus: Vec<String>,
}

impl RoleWeights {
    pub fn stats(&self) -> &[String] {
        &self.stats
    }

    /// Stats the role trains. Same as `stats` unless the config overrides it.
    pub fn focus(&self) -> &[String] {
        &self.focus
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.stats
            .iter()
            .map(String::as_str)
            .zip(self.weights.iter().copied())
    }
}

/// Role to stat-weight table. Parsed and validated once, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsConfig {
    possible_stats: Vec<String>,
    roles: BTreeMap<PlayerRole, RoleWeights>,
}

impl StatsConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let entity: StatsConfigEntity = serde_json::from_str(json)?;
        Self::from_entity(entity)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&contents)
    }

    fn from_entity(entity: StatsConfigEntity) -> Result<Self, ConfigError> {
        let possible: HashSet<&str> = entity.possible_stats.iter().map(String::as_str).collect();

        let mut roles = BTreeMap::new();

        for (name, raw) in &entity.roles {
            let role: PlayerRole = name
                .parse()
                .map_err(|_| ConfigError::UnknownRole(name.clone()))?;

            if raw.stats.len() != raw.weights.len() {
                return Err(ConfigError::WeightMismatch {
                    role,
                    stats: raw.stats.len(),
                    weights: raw.weights.len(),
                });
            }

            let mut seen = HashSet::new();
            for stat in &raw.stats {
                if !possible.contains(stat.as_str()) {
                    return Err(ConfigError::UnknownStat {
                        role,
                        stat: stat.clone(),
                    });
                }
                if !seen.insert(stat.as_str()) {
                    return Err(ConfigError::DuplicateStat {
                        role,
                        stat: stat.clone(),
                    });
                }
            }

            let focus = raw.focus.clone().unwrap_or_else(|| raw.stats.clone());
            if let Some(stat) = focus.iter().find(|s| !possible.contains(s.as_str())) {
                return Err(ConfigError::UnknownStat {
                    role,
                    stat: stat.clone(),
                });
            }

            roles.insert(
                role,
                RoleWeights {
                    stats: raw.stats.clone(),
                    weights: raw.weights.clone(),
                    focus,
                },
            );
        }

        Ok(StatsConfig {
            possible_stats: entity.possible_stats,
            roles,
        })
    }

    pub fn possible_stats(&self) -> &[String] {
        &self.possible_stats
    }

    pub fn role(&self, role: PlayerRole) -> Result<&RoleWeights, ConfigError> {
        self.roles.get(&role).ok_or(ConfigError::MissingRole(role))
    }

    pub fn focus_stats(&self, role: PlayerRole) -> Result<&[String], ConfigError> {
        self.role(role).map(RoleWeights::focus)
    }

    /// Fails on the first role that cannot be rated or trained.
    pub fn ensure_roles<I>(&self, roles: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = PlayerRole>,
    {
        let distinct: BTreeSet<PlayerRole> = roles.into_iter().collect();

        for role in distinct {
            if self.role(role)?.focus.is_empty() {
                return Err(ConfigError::EmptyFocus(role));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "possible_stats": ["Speed", "Shooting", "Passing", "Tackling", "Reflexes"],
        "roles": {
            "Striker": { "stats": ["Speed", "Shooting"], "weights": [0.4, 0.6] },
            "Goalkeeper": {
                "stats": ["Reflexes"],
                "weights": [1.0],
                "focus": ["Reflexes", "Passing"]
            }
        }
    }"#;

    #[test]
    fn parses_roles_with_parallel_weights() {
        let config = StatsConfig::from_json_str(CONFIG).unwrap();

        let striker = config.role(PlayerRole::Striker).unwrap();
        let pairs: Vec<(&str, f32)> = striker.iter().collect();

        assert_eq!(pairs, vec![("Speed", 0.4), ("Shooting", 0.6)]);
        assert_eq!(striker.focus(), striker.stats());
        assert_eq!(config.possible_stats().len(), 5);
    }

    #[test]
    fn explicit_focus_overrides_stats() {
        let config = StatsConfig::from_json_str(CONFIG).unwrap();

        let focus = config.focus_stats(PlayerRole::Goalkeeper).unwrap();

        assert_eq!(focus, ["Reflexes".to_string(), "Passing".to_string()]);
    }

    #[test]
    fn missing_role_is_config_error() {
        let config = StatsConfig::from_json_str(CONFIG).unwrap();

        let result = config.role(PlayerRole::Winger);

        assert!(matches!(result, Err(ConfigError::MissingRole(PlayerRole::Winger))));
        assert!(config.ensure_roles([PlayerRole::Striker, PlayerRole::Winger]).is_err());
        assert!(config.ensure_roles([PlayerRole::Striker, PlayerRole::Goalkeeper]).is_ok());
    }

    #[test]
    fn weight_count_must_match() {
        let json = r#"{
            "possible_stats": ["Speed"],
            "roles": { "Winger": { "stats": ["Speed"], "weights": [0.5, 0.5] } }
        }"#;

        let result = StatsConfig::from_json_str(json);

        assert!(matches!(
            result,
            Err(ConfigError::WeightMismatch { stats: 1, weights: 2, .. })
        ));
    }

    #[test]
    fn stats_must_be_possible() {
        let json = r#"{
            "possible_stats": ["Speed"],
            "roles": { "Winger": { "stats": ["Crossing"], "weights": [1.0] } }
        }"#;

        let result = StatsConfig::from_json_str(json);

        assert!(matches!(result, Err(ConfigError::UnknownStat { .. })));
    }

    #[test]
    fn unknown_role_name_is_rejected() {
        let json = r#"{
            "possible_stats": ["Speed"],
            "roles": { "Sweeper": { "stats": ["Speed"], "weights": [1.0] } }
        }"#;

        let result = StatsConfig::from_json_str(json);

        assert!(matches!(result, Err(ConfigError::UnknownRole(name)) if name == "Sweeper"));
    }

    #[test]
    fn empty_focus_fails_role_check() {
        let json = r#"{
            "possible_stats": ["Speed"],
            "roles": { "Winger": { "stats": ["Speed"], "weights": [1.0], "focus": [] } }
        }"#;

        let config = StatsConfig::from_json_str(json).unwrap();

        assert!(matches!(
            config.ensure_roles([PlayerRole::Winger]),
            Err(ConfigError::EmptyFocus(PlayerRole::Winger))
        ));
    }
}
