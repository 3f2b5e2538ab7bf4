use crate::generators::{PlayerGenerator, SQUAD_TEMPLATE};
use crate::loaders::{LeagueEntity, TeamEntity};
use crate::DatabaseEntity;
use log::info;
use manager_core::clock::GameDate;
use manager_core::club::Team;
use manager_core::error::DataError;
use manager_core::league::League;
use manager_core::simulator::SimulatorData;
use rand::Rng;

/// Reputation used for generated free agents.
const FREE_AGENT_REPUTATION: u16 = 2500;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn start_date(data: &DatabaseEntity) -> GameDate {
        GameDate::from_date(data.world.start_date)
    }

    pub fn generate<R: Rng + ?Sized>(
        data: &DatabaseEntity,
        rng: &mut R,
    ) -> Result<SimulatorData, DataError> {
        if data.names.is_empty() {
            return Err(DataError::EmptyList(String::from("names")));
        }
        if data.world.leagues.is_empty() {
            return Err(DataError::EmptyList(String::from("leagues")));
        }

        let mut next_player_id = 1;
        let mut leagues = Vec::with_capacity(data.world.leagues.len());
        let mut teams = Vec::new();

        for league in &data.world.leagues {
            if league.teams.is_empty() {
                return Err(DataError::EmptyList(format!("league {} teams", league.id)));
            }

            for team in &league.teams {
                teams.push(Self::generate_team(league, team, data, &mut next_player_id, rng)?);
            }

            leagues.push(League::new(
                league.id,
                league.name.clone(),
                league.teams.iter().map(|t| t.id).collect(),
                league.mode,
            ));
        }

        teams.push(Self::generate_free_agents(data, &mut next_player_id, rng)?);

        let simulator_data = SimulatorData::new(leagues, teams)?;

        info!(
            "world generated: {} leagues, {} teams, {} players",
            simulator_data.leagues.len(),
            simulator_data.teams.len(),
            simulator_data.players().count()
        );

        Ok(simulator_data)
    }

    fn generate_team<R: Rng + ?Sized>(
        league: &LeagueEntity,
        team: &TeamEntity,
        data: &DatabaseEntity,
        next_player_id: &mut u32,
        rng: &mut R,
    ) -> Result<Team, DataError> {
        let names = data
            .names_for(&team.nationality)
            .ok_or_else(|| DataError::MissingNames(team.nationality.clone()))?;

        let mut generator = PlayerGenerator::with_people_names(names, *next_player_id)?;

        let mut players = Vec::new();
        for (role, count) in SQUAD_TEMPLATE {
            for _ in 0..count {
                players.push(generator.generate(
                    team.id,
                    role,
                    team.reputation,
                    &data.stats_config,
                    rng,
                )?);
            }
        }

        *next_player_id = generator.next_id();

        Team::builder()
            .id(team.id)
            .league_id(league.id)
            .name(team.name.clone())
            .balance(team.balance)
            .players(players)
            .build()
            .map_err(DataError::Invalid)
    }

    fn generate_free_agents<R: Rng + ?Sized>(
        data: &DatabaseEntity,
        next_player_id: &mut u32,
        rng: &mut R,
    ) -> Result<Team, DataError> {
        let mut free_agents = Team::free_agents();

        if data.world.free_agents == 0 {
            return Ok(free_agents);
        }

        let names = match &data.world.free_agents_nationality {
            Some(nationality) => data
                .names_for(nationality)
                .ok_or_else(|| DataError::MissingNames(nationality.clone()))?,
            None => &data.names[0],
        };

        let mut generator = PlayerGenerator::with_people_names(names, *next_player_id)?;

        for (role, _) in SQUAD_TEMPLATE.iter().cycle().take(data.world.free_agents) {
            let mut player = generator.generate(
                free_agents.id,
                *role,
                FREE_AGENT_REPUTATION,
                &data.stats_config,
                rng,
            )?;
            player.contract_years = 0;

            free_agents.sign(player);
        }

        *next_player_id = generator.next_id();

        Ok(free_agents)
    }
}
