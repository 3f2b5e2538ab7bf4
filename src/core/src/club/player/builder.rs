use crate::club::{Player, PlayerPreferredFoot, PlayerStats};
use crate::config::PlayerRole;

#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    team_id: Option<u32>,
    name: Option<String>,
    nationality: Option<String>,
    preferred_foot: Option<PlayerPreferredFoot>,
    age: Option<u8>,
    contract_years: Option<u8>,
    wage: Option<u32>,
    height: Option<u16>,
    role: Option<PlayerRole>,
    stats: Option<PlayerStats>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn team_id(mut self, team_id: u32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn nationality(mut self, nationality: String) -> Self {
        self.nationality = Some(nationality);
        self
    }

    pub fn preferred_foot(mut self, preferred_foot: PlayerPreferredFoot) -> Self {
        self.preferred_foot = Some(preferred_foot);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn contract_years(mut self, contract_years: u8) -> Self {
        self.contract_years = Some(contract_years);
        self
    }

    pub fn wage(mut self, wage: u32) -> Self {
        self.wage = Some(wage);
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    pub fn role(mut self, role: PlayerRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn stats(mut self, stats: PlayerStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        Ok(Player {
            id: self.id.ok_or("id is required")?,
            team_id: self.team_id.unwrap_or_default(),
            name: self.name.ok_or("name is required")?,
            nationality: self.nationality.unwrap_or_default(),
            preferred_foot: self.preferred_foot.unwrap_or(PlayerPreferredFoot::Right),
            age: self.age.unwrap_or(18),
            contract_years: self.contract_years.unwrap_or(1),
            wage: self.wage.unwrap_or_default(),
            height: self.height.unwrap_or(180),
            role: self.role.ok_or("role is required")?,
            stats: self.stats.unwrap_or_default(),
        })
    }
}
