use crate::config::PlayerRole;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse stats config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read stats config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unknown role '{0}' in stats config")]
    UnknownRole(String),
    #[error("role {0} is not configured")]
    MissingRole(PlayerRole),
    #[error("role {role} uses stat {stat} which is not a possible stat")]
    UnknownStat { role: PlayerRole, stat: String },
    #[error("role {role} lists {stats} stats but {weights} weights")]
    WeightMismatch {
        role: PlayerRole,
        stats: usize,
        weights: usize,
    },
    #[error("role {role} lists stat {stat} twice")]
    DuplicateStat { role: PlayerRole, stat: String },
    #[error("role {0} has no focus stats to train")]
    EmptyFocus(PlayerRole),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("team {0} not found")]
    UnknownTeam(u32),
    #[error("league {0} not found")]
    UnknownLeague(u32),
    #[error("player {0} not found")]
    UnknownPlayer(u32),
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("data file {0} is missing")]
    MissingFile(String),
    #[error("{0} list is empty")]
    EmptyList(String),
    #[error("no names for nationality {0}")]
    MissingNames(String),
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
    #[error("invalid seed data: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend failure: {0}")]
    Backend(String),
    #[error("no transaction in progress")]
    NoTransaction,
    #[error("transaction already in progress")]
    TransactionInProgress,
    #[error("no saved game found")]
    NoSavedGame,
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
