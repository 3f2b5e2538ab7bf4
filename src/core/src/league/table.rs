use crate::r#match::MatchResult;
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

pub const POINTS_FOR_WIN: u16 = 3;
pub const POINTS_FOR_DRAW: u16 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTableRow {
    pub team_id: u32,
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: u16,
    pub goals_against: u16,
    pub points: u16,
}

impl LeagueTableRow {
    pub fn new(team_id: u32) -> Self {
        LeagueTableRow {
            team_id,
            ..Default::default()
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    fn record(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += scored as u16;
        self.goals_against += conceded as u16;

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.won += 1;
                self.points += POINTS_FOR_WIN;
            }
            Ordering::Equal => {
                self.drawn += 1;
                self.points += POINTS_FOR_DRAW;
            }
            Ordering::Less => self.lost += 1,
        }
    }

    /// Points desc, goal difference desc, goals for desc, then team id asc.
    fn standing_cmp(&self, other: &Self) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| other.goal_difference().cmp(&self.goal_difference()))
            .then_with(|| other.goals_for.cmp(&self.goals_for))
            .then_with(|| self.team_id.cmp(&other.team_id))
    }
}

/// Point ledger of one league season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueTable {
    rows: BTreeMap<u32, LeagueTableRow>,
    awarded: HashSet<u32>,
}

impl LeagueTable {
    pub fn new(team_ids: &[u32]) -> Self {
        let mut table = LeagueTable::default();
        table.reset(team_ids);
        table
    }

    /// Books a result. A fixture already booked is refused, so points for one
    /// fixture are never counted twice.
    pub fn award(&mut self, result: &MatchResult) -> bool {
        if !self.awarded.insert(result.fixture_id) {
            warn!(
                "fixture {} ({} vs {}) already awarded, ignoring",
                result.fixture_id, result.home_team_id, result.away_team_id
            );
            return false;
        }

        let score = result.score;

        self.rows
            .entry(result.home_team_id)
            .or_insert_with(|| LeagueTableRow::new(result.home_team_id))
            .record(score.home, score.away);

        self.rows
            .entry(result.away_team_id)
            .or_insert_with(|| LeagueTableRow::new(result.away_team_id))
            .record(score.away, score.home);

        true
    }

    /// Zeroes every tracked team plus the given members, and forgets awarded fixtures.
    pub fn reset(&mut self, team_ids: &[u32]) {
        for row in self.rows.values_mut() {
            *row = LeagueTableRow::new(row.team_id);
        }

        for &team_id in team_ids {
            self.rows
                .entry(team_id)
                .or_insert_with(|| LeagueTableRow::new(team_id));
        }

        self.awarded.clear();
    }

    pub fn is_awarded(&self, fixture_id: u32) -> bool {
        self.awarded.contains(&fixture_id)
    }

    pub fn points(&self, team_id: u32) -> u16 {
        self.rows.get(&team_id).map(|r| r.points).unwrap_or(0)
    }

    pub fn row(&self, team_id: u32) -> Option<&LeagueTableRow> {
        self.rows.get(&team_id)
    }

    pub fn rows(&self) -> Vec<&LeagueTableRow> {
        self.rows
            .values()
            .sorted_by(|a, b| a.standing_cmp(b))
            .collect()
    }

    pub fn leaderboard(&self) -> Vec<(u32, u16)> {
        self.rows()
            .into_iter()
            .map(|row| (row.team_id, row.points))
            .collect()
    }

    pub fn leader(&self) -> Option<u32> {
        self.rows().first().map(|row| row.team_id)
    }

    pub fn total_points(&self) -> u32 {
        self.rows.values().map(|row| row.points as u32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::MatchScore;

    fn result(
        fixture_id: u32,
        home: u32,
        away: u32,
        home_goals: u8,
        away_goals: u8,
    ) -> MatchResult {
        MatchResult::new(fixture_id, home, away, MatchScore::new(home_goals, away_goals))
    }

    #[test]
    fn home_win_gives_three_points_to_home() {
        let mut table = LeagueTable::new(&[1, 2]);

        assert!(table.award(&result(1, 1, 2, 2, 0)));

        assert_eq!(table.points(1), 3);
        assert_eq!(table.points(2), 0);
    }

    #[test]
    fn tie_gives_one_point_each() {
        let mut table = LeagueTable::new(&[1, 2]);

        table.award(&result(1, 1, 2, 1, 1));

        assert_eq!(table.points(1), 1);
        assert_eq!(table.points(2), 1);
    }

    #[test]
    fn away_win_gives_three_points_to_away() {
        let mut table = LeagueTable::new(&[1, 2]);

        table.award(&result(1, 1, 2, 0, 1));

        assert_eq!(table.leaderboard(), vec![(2, 3), (1, 0)]);
    }

    #[test]
    fn same_fixture_is_not_awarded_twice() {
        let mut table = LeagueTable::new(&[1, 2]);

        assert!(table.award(&result(5, 1, 2, 3, 0)));
        assert!(!table.award(&result(5, 1, 2, 3, 0)));

        assert_eq!(table.points(1), 3);
        assert_eq!(table.row(1).unwrap().played, 1);
    }

    #[test]
    fn week_points_never_exceed_three_per_match() {
        let mut table = LeagueTable::new(&[1, 2, 3, 4]);
        let week = vec![result(1, 1, 2, 2, 1), result(2, 3, 4, 0, 0)];

        for r in &week {
            table.award(r);
            table.award(r);
        }

        assert!(table.total_points() <= POINTS_FOR_WIN as u32 * week.len() as u32);
        assert_eq!(table.total_points(), 5);
    }

    #[test]
    fn tie_break_is_goal_difference_then_goals_then_id() {
        let mut table = LeagueTable::new(&[1, 2, 3, 4]);

        table.award(&result(1, 1, 3, 1, 0));
        table.award(&result(2, 2, 4, 3, 0));
        table.award(&result(3, 4, 3, 2, 2));

        let order: Vec<u32> = table.rows().iter().map(|r| r.team_id).collect();
        assert_eq!(order, vec![2, 1, 3, 4]);

        let mut level = LeagueTable::new(&[9, 8]);
        level.award(&result(1, 9, 8, 1, 1));
        assert_eq!(level.leaderboard(), vec![(8, 1), (9, 1)]);
    }

    #[test]
    fn reset_zeroes_rows_and_forgets_fixtures() {
        let mut table = LeagueTable::new(&[1, 2]);
        table.award(&result(1, 1, 2, 1, 0));

        table.reset(&[1, 2, 3]);

        assert_eq!(table.leaderboard(), vec![(1, 0), (2, 0), (3, 0)]);
        assert!(!table.is_awarded(1));
        assert!(table.award(&result(1, 1, 2, 1, 0)));
    }
}
