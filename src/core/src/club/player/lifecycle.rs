use crate::club::Player;
use crate::config::LifecycleSettings;
use log::debug;
use rand::{Rng, RngExt};

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingOutcome {
    pub player_id: u32,
    pub stat: String,
    pub before: f32,
    pub after: f32,
}

impl TrainingOutcome {
    pub fn change(&self) -> f32 {
        self.after - self.before
    }
}

/// Training, aging and retirement rules applied to a single player.
/// The caller decides when each rule runs.
#[derive(Debug, Clone)]
pub struct PlayerLifecycle {
    settings: LifecycleSettings,
}

impl Default for PlayerLifecycle {
    fn default() -> Self {
        Self::new(LifecycleSettings::default())
    }
}

impl PlayerLifecycle {
    pub fn new(settings: LifecycleSettings) -> Self {
        PlayerLifecycle { settings }
    }

    /// Trains one stat picked uniformly from `focus_stats`. Past the decline
    /// age the age factor is negative, so a session can lower the stat.
    pub fn train<R: Rng + ?Sized>(
        &self,
        player: &mut Player,
        focus_stats: &[String],
        rng: &mut R,
    ) -> Option<TrainingOutcome> {
        if focus_stats.is_empty() {
            return None;
        }

        let stat = &focus_stats[rng.random_range(0..focus_stats.len())];

        let age_factor =
            (self.settings.decline_age as f32 - player.age as f32) * self.settings.decay_rate;
        let random_factor: f32 = rng.random();
        let increment = self.settings.stat_increase_base * random_factor * age_factor;

        let before = player.stats.value_or_zero(stat);
        let after = player.stats.set(stat, before + increment);

        Some(TrainingOutcome {
            player_id: player.id,
            stat: stat.clone(),
            before,
            after,
        })
    }

    /// Adds a year and, from the decline age on, wears down every stat.
    pub fn age_player(&self, player: &mut Player) {
        player.age = player.age.saturating_add(1);

        let decline_age = self.settings.decline_age;
        if player.age < decline_age {
            return;
        }

        let years_past = (player.age - decline_age) as f32 + 1.0;
        let age_factor = 1.0 - years_past * self.settings.decay_rate;
        let decay = self.settings.stat_increase_base * (1.0 - age_factor.max(0.0));

        for stat in player.stats.names() {
            player.stats.adjust(&stat, -decay);
        }

        debug!(
            "player {} aged to {}, stats decayed by {:.2}",
            player.id, player.age, decay
        );
    }

    /// Below the threshold this never draws from `rng`.
    pub fn check_retirement<R: Rng + ?Sized>(&self, player: &Player, rng: &mut R) -> bool {
        let threshold = self.settings.retirement_age_threshold;
        if player.age < threshold {
            return false;
        }

        let chance = self.settings.base_retirement_chance
            + (player.age - threshold) as f32 * self.settings.retirement_chance_increase_per_year;

        rng.random::<f32>() < chance
    }

    /// Counts down one contract year. Returns true once the contract has run out.
    pub fn expire_contract(&self, player: &mut Player) -> bool {
        player.contract_years = player.contract_years.saturating_sub(1);
        player.contract_years == 0
    }

    /// Signs a new contract of one to `max_contract_years` years.
    pub fn renew_contract<R: Rng + ?Sized>(&self, player: &mut Player, rng: &mut R) -> u8 {
        player.contract_years = rng.random_range(1..=self.settings.max_contract_years.max(1));
        player.contract_years
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{MAX_STAT, MIN_STAT};
    use crate::config::PlayerRole;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn player(age: u8, stats: &[(&str, f32)]) -> Player {
        Player::builder()
            .id(7)
            .name("Test Player".to_string())
            .role(PlayerRole::Winger)
            .age(age)
            .stats(stats.iter().map(|(n, v)| (*n, *v)).collect())
            .build()
            .unwrap()
    }

    fn focus(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn aging_past_decline_lowers_stats() {
        let lifecycle = PlayerLifecycle::default();
        let mut player = player(34, &[("Speed", 80.0)]);

        lifecycle.age_player(&mut player);

        assert_eq!(player.age, 35);
        let speed = player.stats.get("Speed").unwrap();
        assert!(speed < 80.0);
        assert!((speed - 79.7).abs() < 1e-4);
    }

    #[test]
    fn aging_young_player_keeps_stats() {
        let lifecycle = PlayerLifecycle::default();
        let mut player = player(21, &[("Speed", 80.0)]);

        lifecycle.age_player(&mut player);

        assert_eq!(player.age, 22);
        assert_eq!(player.stats.get("Speed"), Some(80.0));
    }

    #[test]
    fn aging_keeps_stats_in_range() {
        let lifecycle = PlayerLifecycle::new(LifecycleSettings {
            stat_increase_base: 50.0,
            ..LifecycleSettings::default()
        });
        let mut player = player(44, &[("Speed", 2.0), ("Passing", 100.0)]);

        for year in 0..10 {
            lifecycle.age_player(&mut player);
            assert_eq!(player.age, 45 + year);

            for (_, value) in player.stats.iter() {
                assert!((MIN_STAT..=MAX_STAT).contains(&value));
            }
        }

        assert_eq!(player.stats.get("Speed"), Some(MIN_STAT));
    }

    #[test]
    fn training_is_reproducible_with_seed() {
        let lifecycle = PlayerLifecycle::default();
        let focus = focus(&["Speed", "Passing", "Crossing"]);

        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut p = player(20, &[("Speed", 50.0), ("Passing", 50.0), ("Crossing", 50.0)]);
            let outcomes: Vec<TrainingOutcome> = (0..20)
                .filter_map(|_| lifecycle.train(&mut p, &focus, &mut rng))
                .collect();
            (p, outcomes)
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn young_player_training_never_lowers_stat() {
        let lifecycle = PlayerLifecycle::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = player(19, &[("Speed", 50.0)]);

        for _ in 0..50 {
            let outcome = lifecycle.train(&mut p, &focus(&["Speed"]), &mut rng).unwrap();
            assert!(outcome.change() >= 0.0);
        }

        assert!(p.stats.get("Speed").unwrap() > 50.0);
    }

    #[test]
    fn veteran_training_can_lower_stat() {
        let lifecycle = PlayerLifecycle::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = player(36, &[("Speed", 50.0)]);

        for _ in 0..50 {
            let outcome = lifecycle.train(&mut p, &focus(&["Speed"]), &mut rng).unwrap();
            assert!(outcome.change() <= 0.0);
        }

        assert!(p.stats.get("Speed").unwrap() < 50.0);
    }

    #[test]
    fn training_clamps_to_max_stat() {
        let lifecycle = PlayerLifecycle::new(LifecycleSettings {
            stat_increase_base: 1000.0,
            ..LifecycleSettings::default()
        });
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = player(17, &[("Speed", 99.0)]);

        for _ in 0..10 {
            lifecycle.train(&mut p, &focus(&["Speed"]), &mut rng);
        }

        assert!(p.stats.get("Speed").unwrap() <= MAX_STAT);
    }

    #[test]
    fn training_with_empty_focus_does_nothing() {
        let lifecycle = PlayerLifecycle::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = player(20, &[("Speed", 50.0)]);

        assert!(lifecycle.train(&mut p, &[], &mut rng).is_none());
        assert_eq!(p.stats.get("Speed"), Some(50.0));
    }

    #[test]
    fn no_retirement_below_threshold_for_any_seed() {
        let lifecycle = PlayerLifecycle::default();
        let p = player(32, &[]);

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(!lifecycle.check_retirement(&p, &mut rng));
        }
    }

    #[test]
    fn very_old_player_always_retires() {
        let lifecycle = PlayerLifecycle::default();
        let p = player(40, &[]);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(lifecycle.check_retirement(&p, &mut rng));
        }
    }

    #[test]
    fn contract_expires_after_last_year() {
        let lifecycle = PlayerLifecycle::default();
        let mut p = player(25, &[]);
        p.contract_years = 2;

        assert!(!lifecycle.expire_contract(&mut p));
        assert!(lifecycle.expire_contract(&mut p));
        assert!(lifecycle.expire_contract(&mut p));
        assert_eq!(p.contract_years, 0);
    }

    #[test]
    fn renewal_stays_within_max_contract_length() {
        let lifecycle = PlayerLifecycle::new(LifecycleSettings {
            max_contract_years: 3,
            ..LifecycleSettings::default()
        });
        let mut p = player(25, &[]);
        p.contract_years = 0;

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let years = lifecycle.renew_contract(&mut p, &mut rng);

            assert_eq!(years, p.contract_years);
            assert!((1..=3).contains(&years));
        }
    }
}
