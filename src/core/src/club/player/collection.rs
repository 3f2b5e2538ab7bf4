use crate::club::Player;
use serde::{Deserialize, Serialize};

/// Roster of a team. Player ids are unique inside a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerCollection {
    players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        let mut collection = PlayerCollection {
            players: Vec::with_capacity(players.len()),
        };

        for player in players {
            collection.add(player);
        }

        collection
    }

    /// Adds or replaces the player with the same id.
    pub fn add(&mut self, player: Player) {
        match self.players.iter_mut().find(|p| p.id == player.id) {
            Some(existing) => *existing = player,
            None => self.players.push(player),
        }
    }

    pub fn take(&mut self, player_id: u32) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == player_id)?;
        Some(self.players.remove(index))
    }

    pub fn get(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn get_mut(&mut self, player_id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.get(player_id).is_some()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Player> {
        self.players.iter_mut()
    }

    /// Removes and returns every player matching `predicate`, keeping roster order.
    pub fn drain_where<F>(&mut self, mut predicate: F) -> Vec<Player>
    where
        F: FnMut(&Player) -> bool,
    {
        let (removed, kept): (Vec<Player>, Vec<Player>) =
            self.players.drain(..).partition(|p| predicate(p));

        self.players = kept;

        removed
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
