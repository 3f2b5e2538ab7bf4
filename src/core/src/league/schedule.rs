use crate::clock::GameDate;
use crate::league::{Calendar, Fixture, FixtureType, Week};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundRobinMode {
    #[default]
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing {
    pub home: u32,
    pub away: u32,
}

impl Pairing {
    pub fn new(home: u32, away: u32) -> Self {
        Pairing { home, away }
    }

    pub fn reversed(&self) -> Self {
        Pairing::new(self.away, self.home)
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home == team_id || self.away == team_id
    }
}

pub type Round = Vec<Pairing>;

/// Position in the rotation. The bye is its own variant so it can never be
/// confused with a real team id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Team(u32),
    Bye,
}

pub struct FixtureScheduler;

impl FixtureScheduler {
    /// Circle-method round robin. Repeated ids are scheduled once; fewer than
    /// two distinct teams give an empty schedule.
    pub fn generate(team_ids: &[u32], mode: RoundRobinMode) -> Vec<Round> {
        let mut slots: Vec<Slot> = team_ids.iter().copied().unique().map(Slot::Team).collect();

        if slots.len() < 2 {
            return Vec::new();
        }

        if slots.len() % 2 == 1 {
            slots.push(Slot::Bye);
        }

        let slot_count = slots.len();
        let round_count = slot_count - 1;

        let mut rounds: Vec<Round> = Vec::with_capacity(match mode {
            RoundRobinMode::Single => round_count,
            RoundRobinMode::Double => round_count * 2,
        });

        for round in 0..round_count {
            let pairings = (0..slot_count / 2)
                .filter_map(|i| match (slots[i], slots[slot_count - 1 - i]) {
                    (Slot::Team(first), Slot::Team(second)) if round % 2 == 0 => {
                        Some(Pairing::new(first, second))
                    }
                    (Slot::Team(first), Slot::Team(second)) => Some(Pairing::new(second, first)),
                    _ => None,
                })
                .collect();

            rounds.push(pairings);

            // keep index 0 fixed, last slot moves to index 1
            if let Some(last) = slots.pop() {
                slots.insert(1, last);
            }
        }

        if mode == RoundRobinMode::Double {
            let mirrored: Vec<Round> = rounds
                .iter()
                .map(|round| round.iter().map(Pairing::reversed).collect())
                .collect();

            rounds.extend(mirrored);
        }

        rounds
    }

    /// Dates round `k` at `start + k` weeks and numbers fixtures from 1.
    pub fn calendar(
        season: u16,
        league_id: u32,
        team_ids: &[u32],
        mode: RoundRobinMode,
        start: GameDate,
    ) -> Calendar {
        let mut fixture_id = 0;
        let mut date = start;

        let weeks = Self::generate(team_ids, mode)
            .into_iter()
            .enumerate()
            .map(|(index, round)| {
                let fixtures = round
                    .into_iter()
                    .map(|pairing| {
                        fixture_id += 1;
                        let (home, away) = (pairing.home, pairing.away);
                        Fixture::new(fixture_id, home, away, date, FixtureType::League)
                    })
                    .collect();

                let week = Week {
                    index,
                    date,
                    fixtures,
                };

                date = date.add_week();

                week
            })
            .collect();

        Calendar::new(season, league_id, weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn teams(count: u32) -> Vec<u32> {
        (1..=count).collect()
    }

    fn unordered(pairing: &Pairing) -> (u32, u32) {
        (pairing.home.min(pairing.away), pairing.home.max(pairing.away))
    }

    #[test]
    fn four_teams_single_round_robin() {
        let rounds = FixtureScheduler::generate(&[1, 2, 3, 4], RoundRobinMode::Single);

        assert_eq!(rounds.len(), 3);
        assert!(rounds.iter().all(|round| round.len() == 2));

        let pairs: HashSet<(u32, u32)> = rounds.iter().flatten().map(unordered).collect();
        assert_eq!(pairs.len(), 6);
    }

    #[test]
    fn every_pair_meets_once_per_single_pass() {
        for count in 2..=13 {
            let rounds = FixtureScheduler::generate(&teams(count), RoundRobinMode::Single);

            let expected_weeks = if count % 2 == 0 { count - 1 } else { count };
            assert_eq!(rounds.len(), expected_weeks as usize, "{} teams", count);

            let mut meetings: HashMap<(u32, u32), usize> = HashMap::new();
            for pairing in rounds.iter().flatten() {
                *meetings.entry(unordered(pairing)).or_default() += 1;
            }

            assert_eq!(meetings.len() as u32, count * (count - 1) / 2);
            assert!(meetings.values().all(|&times| times == 1));
        }
    }

    #[test]
    fn no_team_plays_itself_or_twice_in_a_week() {
        for count in 2..=13 {
            for round in FixtureScheduler::generate(&teams(count), RoundRobinMode::Double) {
                let mut seen = HashSet::new();

                for pairing in &round {
                    assert_ne!(pairing.home, pairing.away);
                    assert!(seen.insert(pairing.home));
                    assert!(seen.insert(pairing.away));
                }
            }
        }
    }

    #[test]
    fn odd_count_gives_each_team_one_bye_per_pass() {
        for count in [3u32, 5, 7, 9] {
            let rounds = FixtureScheduler::generate(&teams(count), RoundRobinMode::Single);

            let mut byes: HashMap<u32, usize> = HashMap::new();
            for round in &rounds {
                assert_eq!(round.len() as u32, (count - 1) / 2);

                for team in teams(count) {
                    if !round.iter().any(|p| p.involves(team)) {
                        *byes.entry(team).or_default() += 1;
                    }
                }
            }

            assert_eq!(byes.len() as u32, count);
            assert!(byes.values().all(|&times| times == 1));
        }
    }

    #[test]
    fn double_round_robin_has_every_ordered_pair_once() {
        for count in 2..=10 {
            let rounds = FixtureScheduler::generate(&teams(count), RoundRobinMode::Double);

            let single_weeks = if count % 2 == 0 { count - 1 } else { count };
            assert_eq!(rounds.len() as u32, single_weeks * 2);

            let mut ordered: HashMap<Pairing, usize> = HashMap::new();
            for pairing in rounds.iter().flatten() {
                *ordered.entry(*pairing).or_default() += 1;
            }

            assert_eq!(ordered.len() as u32, count * (count - 1));
            assert!(ordered.values().all(|&times| times == 1));
        }
    }

    #[test]
    fn home_side_alternates_with_round_parity() {
        let rounds = FixtureScheduler::generate(&[1, 2, 3, 4], RoundRobinMode::Single);

        assert_eq!(
            rounds,
            vec![
                vec![Pairing::new(1, 4), Pairing::new(2, 3)],
                vec![Pairing::new(3, 1), Pairing::new(2, 4)],
                vec![Pairing::new(1, 2), Pairing::new(3, 4)],
            ]
        );
    }

    #[test]
    fn pivot_team_hosts_even_rounds_only() {
        let rounds = FixtureScheduler::generate(&[10, 20, 30, 40, 50, 60], RoundRobinMode::Single);

        assert_eq!(rounds.len(), 5);

        for (index, round) in rounds.iter().enumerate() {
            let pivot = round.iter().find(|pairing| pairing.involves(10)).unwrap();

            if index % 2 == 0 {
                assert_eq!(pivot.home, 10, "round {}", index);
            } else {
                assert_eq!(pivot.away, 10, "round {}", index);
            }
        }
    }

    #[test]
    fn fewer_than_two_teams_is_empty() {
        assert!(FixtureScheduler::generate(&[], RoundRobinMode::Single).is_empty());
        assert!(FixtureScheduler::generate(&[7], RoundRobinMode::Double).is_empty());
        assert!(FixtureScheduler::generate(&[7, 7, 7], RoundRobinMode::Single).is_empty());
    }

    #[test]
    fn zero_is_a_regular_team_id() {
        let rounds = FixtureScheduler::generate(&[0, 1, 2], RoundRobinMode::Single);

        let pairs: HashSet<(u32, u32)> = rounds.iter().flatten().map(unordered).collect();

        assert_eq!(pairs, HashSet::from([(0, 1), (0, 2), (1, 2)]));
    }

    #[test]
    fn calendar_dates_weeks_and_numbers_fixtures() {
        let start = GameDate::new(2024, 8, 10).unwrap();

        let calendar = FixtureScheduler::calendar(1, 5, &teams(4), RoundRobinMode::Single, start);

        assert_eq!(calendar.season, 1);
        assert_eq!(calendar.league_id, 5);
        assert_eq!(calendar.len(), 3);

        for (index, week) in calendar.weeks.iter().enumerate() {
            assert_eq!(week.index, index);
            assert_eq!(week.date, start.add_days(7 * index as u64));
            assert!(week.fixtures.iter().all(|f| f.date == week.date));
            assert!(week.fixtures.iter().all(|f| f.fixture_type == FixtureType::League));
        }

        let ids: Vec<u32> = calendar.fixtures().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
