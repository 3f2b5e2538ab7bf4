use crate::loaders::{NamesEntity, WorldEntity};
use include_dir::{include_dir, Dir};
use log::info;
use manager_core::config::StatsConfig;
use manager_core::error::{DataError, SimulationError};
use serde::de::DeserializeOwned;
use std::env;
use std::path::{Path, PathBuf};

static DATA_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/data");

const STATS_FILE: &str = "stats.json";
const NAMES_FILE: &str = "names.json";
const WORLD_FILE: &str = "world.json";

/// Path of a stats config that replaces the embedded one.
pub const STATS_CONFIG_ENV: &str = "STATS_CONFIG";

pub struct DatabaseEntity {
    pub stats_config: StatsConfig,
    pub names: Vec<NamesEntity>,
    pub world: WorldEntity,
}

impl DatabaseEntity {
    pub fn names_for(&self, nationality: &str) -> Option<&NamesEntity> {
        self.names.iter().find(|n| n.nationality == nationality)
    }
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, SimulationError> {
        let stats_override = env::var(STATS_CONFIG_ENV).ok().map(PathBuf::from);

        Self::load_with(stats_override.as_deref())
    }

    pub fn load_with(stats_path: Option<&Path>) -> Result<DatabaseEntity, SimulationError> {
        let stats_config = match stats_path {
            Some(path) => {
                info!("loading stats config from {}", path.display());
                StatsConfig::from_file(path)?
            }
            None => StatsConfig::from_json_str(Self::embedded(STATS_FILE)?)?,
        };

        Ok(DatabaseEntity {
            stats_config,
            names: Self::parse(NAMES_FILE, Self::embedded(NAMES_FILE)?)?,
            world: Self::parse(WORLD_FILE, Self::embedded(WORLD_FILE)?)?,
        })
    }

    pub fn parse<T: DeserializeOwned>(name: &str, json: &str) -> Result<T, DataError> {
        serde_json::from_str(json).map_err(|source| DataError::Parse {
            name: name.to_string(),
            source,
        })
    }

    fn embedded(name: &str) -> Result<&'static str, DataError> {
        DATA_DIR
            .get_file(name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| DataError::MissingFile(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manager_core::config::PlayerRole;
    use manager_core::error::ConfigError;

    #[test]
    fn embedded_data_loads() {
        let database = DatabaseLoader::load_with(None).unwrap();

        assert!(database.stats_config.ensure_roles(PlayerRole::ALL).is_ok());
        assert!(database.names_for("England").is_some());
        assert!(!database.world.leagues.is_empty());
    }

    #[test]
    fn missing_override_is_a_read_error() {
        let result = DatabaseLoader::load_with(Some(Path::new("/nonexistent/stats.json")));

        assert!(matches!(
            result,
            Err(SimulationError::Config(ConfigError::Read { .. }))
        ));
    }

    #[test]
    fn malformed_json_names_the_file() {
        let result: Result<Vec<NamesEntity>, DataError> = DatabaseLoader::parse("names.json", "[{");

        match result {
            Err(DataError::Parse { name, .. }) => assert_eq!(name, "names.json"),
            _ => panic!("expected a parse error"),
        }
    }
}
