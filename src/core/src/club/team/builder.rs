use crate::club::{Player, PlayerCollection, Team};

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<u32>,
    league_id: Option<u32>,
    name: Option<String>,
    balance: Option<i64>,
    players: Option<Vec<Player>>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn league_id(mut self, league_id: u32) -> Self {
        self.league_id = Some(league_id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = Some(players);
        self
    }

    pub fn build(self) -> Result<Team, String> {
        let id = self.id.ok_or("id is required")?;

        let players = self
            .players
            .unwrap_or_default()
            .into_iter()
            .map(|mut player| {
                player.team_id = id;
                player
            })
            .collect();

        Ok(Team {
            id,
            league_id: self.league_id,
            name: self.name.ok_or("name is required")?,
            balance: self.balance.unwrap_or_default(),
            players: PlayerCollection::new(players),
            lineup: None,
        })
    }
}
