pub mod simulator;
pub use simulator::*;

pub mod clock;
pub mod club;
pub mod config;
pub mod error;
pub mod league;
pub mod r#match;
pub mod storage;

pub mod utils;

pub use clock::{GameDate, SeasonPhase};

pub use club::{
    Player, PlayerBuilder, PlayerCollection, PlayerLifecycle, PlayerPreferredFoot, PlayerStats,
    Team, TeamBuilder, TrainingOutcome, FREE_AGENTS_TEAM_ID, MAX_STAT, MIN_STAT,
};

pub use config::{
    LifecycleSettings, MatchSettings, PlayerRole, RoleBucket, RoleWeights, SimulationSettings,
    StatsConfig,
};

pub use error::{ConfigError, DataError, ReferenceError, SimulationError, StorageError};

pub use league::{
    Calendar, Fixture, FixtureScheduler, FixtureType, League, LeagueTable, LeagueTableRow,
    RoundRobinMode, Week,
};

pub use r#match::{MatchOutcome, MatchResult, MatchScore, MatchSimulator, TeamSheet};

pub use storage::{GameState, GameStorage, MemoryStorage};
