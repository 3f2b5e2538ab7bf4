use crate::clock::SeasonPhase;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const DAYS_IN_WEEK: u64 = 7;

/// Calendar date of the running game. Only the orchestrator moves it forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameDate {
    date: NaiveDate,
}

impl GameDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from_date)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        GameDate { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Saturates at the last representable date instead of overflowing.
    pub fn add_days(&self, days: u64) -> Self {
        let date = self
            .date
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX);

        GameDate { date }
    }

    pub fn add_week(&self) -> Self {
        self.add_days(DAYS_IN_WEEK)
    }

    pub fn season_phase(&self) -> SeasonPhase {
        SeasonPhase::from_month(self.month())
    }

    pub fn is_transfer_window_open(&self) -> bool {
        let year = self.year();

        let summer = (
            NaiveDate::from_ymd_opt(year, 6, 1),
            NaiveDate::from_ymd_opt(year, 8, 31),
        );
        let winter = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 1, 31),
        );

        self.is_in_window(summer) || self.is_in_window(winter)
    }

    fn is_in_window(&self, window: (Option<NaiveDate>, Option<NaiveDate>)) -> bool {
        match window {
            (Some(from), Some(to)) => self.date >= from && self.date <= to,
            _ => false,
        }
    }
}

impl Display for GameDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_week_crosses_month_and_year() {
        let date = GameDate::new(2024, 12, 28).unwrap();

        let next = date.add_week();

        assert_eq!(next, GameDate::new(2025, 1, 4).unwrap());
    }

    #[test]
    fn add_days_handles_leap_year() {
        let date = GameDate::new(2024, 2, 27).unwrap();

        assert_eq!(date.add_days(2), GameDate::new(2024, 2, 29).unwrap());
        assert_eq!(date.add_days(3), GameDate::new(2024, 3, 1).unwrap());
    }

    #[test]
    fn season_phase_is_derived_from_month() {
        assert_eq!(GameDate::new(2024, 8, 10).unwrap().season_phase(), SeasonPhase::RegularSeason);
        assert_eq!(GameDate::new(2025, 3, 1).unwrap().season_phase(), SeasonPhase::RegularSeason);
        assert_eq!(GameDate::new(2025, 5, 20).unwrap().season_phase(), SeasonPhase::PostSeason);
        assert_eq!(GameDate::new(2025, 6, 20).unwrap().season_phase(), SeasonPhase::OffSeason);
        assert_eq!(GameDate::new(2025, 7, 2).unwrap().season_phase(), SeasonPhase::PreSeason);
    }

    #[test]
    fn transfer_window_follows_summer_and_january() {
        assert!(GameDate::new(2024, 6, 1).unwrap().is_transfer_window_open());
        assert!(GameDate::new(2024, 8, 31).unwrap().is_transfer_window_open());
        assert!(GameDate::new(2025, 1, 15).unwrap().is_transfer_window_open());
        assert!(!GameDate::new(2024, 9, 1).unwrap().is_transfer_window_open());
        assert!(!GameDate::new(2025, 2, 1).unwrap().is_transfer_window_open());
    }

    #[test]
    fn invalid_date_is_rejected() {
        assert!(GameDate::new(2025, 2, 29).is_none());
    }
}
