use crate::loaders::NamesEntity;
use manager_core::club::{Player, PlayerPreferredFoot, PlayerStats, MAX_STAT};
use manager_core::config::{PlayerRole, StatsConfig};
use manager_core::error::DataError;
use rand::{Rng, RngExt};

/// Roles of a generated senior squad, in roster order.
pub const SQUAD_TEMPLATE: [(PlayerRole, usize); 8] = [
    (PlayerRole::Goalkeeper, 2),
    (PlayerRole::CentreBack, 4),
    (PlayerRole::FullBack, 4),
    (PlayerRole::DefensiveMidfielder, 2),
    (PlayerRole::CentralMidfielder, 3),
    (PlayerRole::AttackingMidfielder, 2),
    (PlayerRole::Winger, 3),
    (PlayerRole::Striker, 3),
];

pub struct PlayerGenerator<'n> {
    names: &'n NamesEntity,
    next_id: u32,
}

impl<'n> PlayerGenerator<'n> {
    pub fn with_people_names(names: &'n NamesEntity, first_id: u32) -> Result<Self, DataError> {
        if names.first_names.is_empty() {
            return Err(DataError::EmptyList(format!("{} first names", names.nationality)));
        }
        if names.last_names.is_empty() {
            return Err(DataError::EmptyList(format!("{} last names", names.nationality)));
        }

        Ok(PlayerGenerator {
            names,
            next_id: first_id,
        })
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        team_id: u32,
        role: PlayerRole,
        team_reputation: u16,
        config: &StatsConfig,
        rng: &mut R,
    ) -> Result<Player, DataError> {
        let rep_factor = (team_reputation as f32 / 10000.0).clamp(0.0, 1.0);

        let salary_min = (2000.0 + rep_factor * 30000.0) as u32;
        let salary_max = (10000.0 + rep_factor * 190000.0) as u32;

        let id = self.next_id;
        self.next_id += 1;

        let name = format!("{} {}", self.first_name(rng), self.last_name(rng));

        Player::builder()
            .id(id)
            .team_id(team_id)
            .name(name)
            .nationality(self.names.nationality.clone())
            .preferred_foot(Self::preferred_foot(rng))
            .age(rng.random_range(17..=34))
            .contract_years(rng.random_range(1..=5))
            .wage(rng.random_range(salary_min..=salary_max))
            .height(Self::height(role, rng))
            .role(role)
            .stats(Self::generate_stats(config, rep_factor, rng))
            .build()
            .map_err(DataError::Invalid)
    }

    fn generate_stats<R: Rng + ?Sized>(
        config: &StatsConfig,
        rep_factor: f32,
        rng: &mut R,
    ) -> PlayerStats {
        let stat_min = 20.0 + rep_factor * 30.0;
        let stat_max = (45.0 + rep_factor * 45.0).min(MAX_STAT);

        config
            .possible_stats()
            .iter()
            .map(|stat| (stat.clone(), rng.random_range(stat_min..=stat_max)))
            .collect()
    }

    fn preferred_foot<R: Rng + ?Sized>(rng: &mut R) -> PlayerPreferredFoot {
        match rng.random_range(0..10) {
            0..=6 => PlayerPreferredFoot::Right,
            7 | 8 => PlayerPreferredFoot::Left,
            _ => PlayerPreferredFoot::Both,
        }
    }

    fn height<R: Rng + ?Sized>(role: PlayerRole, rng: &mut R) -> u16 {
        match role {
            PlayerRole::Goalkeeper | PlayerRole::CentreBack => rng.random_range(183..=200),
            PlayerRole::Winger | PlayerRole::AttackingMidfielder => rng.random_range(165..=185),
            _ => rng.random_range(172..=192),
        }
    }

    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let idx = rng.random_range(0..self.names.first_names.len());
        &self.names.first_names[idx]
    }

    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let idx = rng.random_range(0..self.names.last_names.len());
        &self.names.last_names[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manager_core::club::MIN_STAT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn names() -> NamesEntity {
        NamesEntity {
            nationality: String::from("England"),
            first_names: vec![String::from("Jack"), String::from("Harry")],
            last_names: vec![String::from("Smith")],
        }
    }

    fn config() -> StatsConfig {
        StatsConfig::from_json_str(
            r#"{
                "possible_stats": ["Pace", "Finishing"],
                "roles": { "Striker": { "stats": ["Finishing"], "weights": [1.0] } }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn generates_sequential_ids_with_all_stats() {
        let names = names();
        let mut generator = PlayerGenerator::with_people_names(&names, 40).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let first = generator.generate(3, PlayerRole::Striker, 9000, &config(), &mut rng).unwrap();
        let second = generator.generate(3, PlayerRole::Striker, 1000, &config(), &mut rng).unwrap();

        assert_eq!((first.id, second.id), (40, 41));
        assert_eq!(generator.next_id(), 42);
        assert_eq!(first.team_id, 3);
        assert!(first.name.ends_with("Smith"));
        assert_eq!(first.stats.len(), 2);

        for (_, value) in first.stats.iter().chain(second.stats.iter()) {
            assert!((MIN_STAT..=MAX_STAT).contains(&value));
        }

        assert!((17..=34).contains(&first.age));
        assert!((1..=5).contains(&first.contract_years));
    }

    #[test]
    fn empty_name_list_is_rejected() {
        let mut empty = names();
        empty.last_names.clear();

        assert!(matches!(
            PlayerGenerator::with_people_names(&empty, 1),
            Err(DataError::EmptyList(_))
        ));
    }

    #[test]
    fn squad_template_fields_a_full_team() {
        let total: usize = SQUAD_TEMPLATE.iter().map(|(_, count)| count).sum();

        assert!(total >= 11);
    }
}
