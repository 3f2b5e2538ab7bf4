use crate::clock::GameDate;
use crate::r#match::MatchScore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixtureType {
    League,
    Friendly,
    Cup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub date: GameDate,
    pub fixture_type: FixtureType,
    result: Option<MatchScore>,
}

impl Fixture {
    pub fn new(
        id: u32,
        home_team_id: u32,
        away_team_id: u32,
        date: GameDate,
        fixture_type: FixtureType,
    ) -> Self {
        Fixture {
            id,
            home_team_id,
            away_team_id,
            date,
            fixture_type,
            result: None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<MatchScore> {
        self.result
    }

    /// A fixture is played once. Returns false if a score is already recorded.
    pub fn record_result(&mut self, score: MatchScore) -> bool {
        if self.result.is_some() {
            return false;
        }

        self.result = Some(score);
        true
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    pub index: usize,
    pub date: GameDate,
    pub fixtures: Vec<Fixture>,
}

impl Week {
    pub fn is_played(&self) -> bool {
        self.fixtures.iter().all(Fixture::is_played)
    }
}

/// Date-ordered weeks of one league season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    pub season: u16,
    pub league_id: u32,
    pub weeks: Vec<Week>,
}

impl Calendar {
    pub fn new(season: u16, league_id: u32, weeks: Vec<Week>) -> Self {
        Calendar {
            season,
            league_id,
            weeks,
        }
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn week(&self, index: usize) -> Option<&Week> {
        self.weeks.get(index)
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.weeks.iter().flat_map(|w| &w.fixtures)
    }

    pub fn fixture_mut(&mut self, fixture_id: u32) -> Option<&mut Fixture> {
        self.weeks
            .iter_mut()
            .flat_map(|w| &mut w.fixtures)
            .find(|f| f.id == fixture_id)
    }

    pub fn team_fixtures(&self, team_id: u32) -> Vec<&Fixture> {
        self.fixtures().filter(|f| f.involves(team_id)).collect()
    }

    pub fn remaining_fixtures(&self) -> usize {
        self.fixtures().filter(|f| !f.is_played()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> GameDate {
        GameDate::new(2024, 8, 10).unwrap()
    }

    #[test]
    fn result_is_recorded_once() {
        let mut fixture = Fixture::new(1, 10, 20, date(), FixtureType::League);

        assert!(!fixture.is_played());
        assert!(fixture.record_result(MatchScore::new(2, 0)));
        assert!(!fixture.record_result(MatchScore::new(0, 5)));
        assert_eq!(fixture.result(), Some(MatchScore::new(2, 0)));
    }

    #[test]
    fn calendar_finds_team_fixtures() {
        let calendar = Calendar::new(
            1,
            3,
            vec![
                Week {
                    index: 0,
                    date: date(),
                    fixtures: vec![
                        Fixture::new(1, 10, 20, date(), FixtureType::League),
                        Fixture::new(2, 30, 40, date(), FixtureType::League),
                    ],
                },
                Week {
                    index: 1,
                    date: date().add_week(),
                    fixtures: vec![Fixture::new(3, 20, 30, date().add_week(), FixtureType::League)],
                },
            ],
        );

        let ids: Vec<u32> = calendar.team_fixtures(20).iter().map(|f| f.id).collect();

        assert_eq!(ids, vec![1, 3]);
        assert_eq!(calendar.remaining_fixtures(), 3);
        assert_eq!(calendar.len(), 2);
    }
}
