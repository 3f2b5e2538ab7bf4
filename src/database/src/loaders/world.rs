use chrono::NaiveDate;
use manager_core::league::RoundRobinMode;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WorldEntity {
    pub start_date: NaiveDate,
    #[serde(default)]
    pub free_agents: usize,
    #[serde(default)]
    pub free_agents_nationality: Option<String>,
    pub leagues: Vec<LeagueEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueEntity {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub mode: RoundRobinMode,
    pub teams: Vec<TeamEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    pub nationality: String,
    #[serde(default)]
    pub balance: i64,
    pub reputation: u16,
}
