//! Calendar month values and pt-BR calendar labels.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Month names shown in the calendar header.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Weekday column headers, Sunday first.
pub const WEEKDAYS_SHORT: [&str; 7] = ["D", "S", "T", "Q", "Q", "S", "S"];

/// Full weekday name, used in the schedule header ("Segunda-feira").
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Domingo",
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
    }
}

/// A calendar month, backed by its first day so every value is a month
/// chrono can represent.
///
/// Ordering is chronological, so `a < b` means `a` comes before `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    first: NaiveDate,
}

impl Month {
    /// `month` is 1-based. `None` when the month is out of range or its year
    /// lies outside the supported calendar.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Month { first })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Month {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// The following month, `None` past the end of the supported calendar.
    pub fn next(&self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Month { first })
    }

    pub fn prev(&self) -> Option<Self> {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Month { first })
    }

    /// The date `(year, month, day)`, or `None` when `day` does not exist in this month.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        self.dates().count() as u32
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    /// Iterate over every date of the month.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let first = self.first;
        (1..=31).filter_map(move |d| first.with_day(d))
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.first.month0() as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}

impl FromStr for Month {
    type Err = String;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid month '{s}'. Expected YYYY-MM");

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Month::new(year, month).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> Month {
        Month::new(year, month).unwrap()
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert!(Month::new(2020, 0).is_none());
        assert!(Month::new(2020, 13).is_none());
    }

    #[test]
    fn navigation_wraps_years() {
        assert_eq!(month(2020, 12).next(), Some(month(2021, 1)));
        assert_eq!(month(2021, 1).prev(), Some(month(2020, 12)));
        assert_eq!(month(2020, 6).next().and_then(|m| m.prev()), Some(month(2020, 6)));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(month(2020, 2).days_in_month(), 29);
        assert_eq!(month(2021, 2).days_in_month(), 28);
        assert_eq!(month(2021, 4).days_in_month(), 30);
        assert_eq!(month(2021, 12).days_in_month(), 31);
        assert_eq!(month(2021, 2).dates().count(), 28);
    }

    #[test]
    fn day_out_of_range_is_none() {
        assert!(month(2021, 4).day(31).is_none());
        assert!(month(2021, 4).day(0).is_none());
        assert_eq!(
            month(2021, 4).day(30),
            NaiveDate::from_ymd_opt(2021, 4, 30)
        );
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(month(2020, 12) < month(2021, 1));
        assert!(month(2021, 3) > month(2021, 2));
    }

    #[test]
    fn parses_and_displays() {
        let m: Month = "2020-03".parse().unwrap();
        assert_eq!(m, month(2020, 3));
        assert_eq!(m.to_string(), "Março 2020");
        assert!("2020-13".parse::<Month>().is_err());
        assert!("march".parse::<Month>().is_err());
    }

    #[test]
    fn weekday_labels() {
        assert_eq!(weekday_name(Weekday::Mon), "Segunda-feira");
        assert_eq!(WEEKDAYS_SHORT[Weekday::Sun.num_days_from_sunday() as usize], "D");
    }

    #[test]
    fn rejects_years_outside_the_calendar() {
        assert!(Month::new(300_000, 1).is_none());
        assert!(Month::new(i32::MAX, 12).is_none());
        assert!("300000-01".parse::<Month>().is_err());
        assert!("2147483647-12".parse::<Month>().is_err());
    }

    #[test]
    fn edges_of_the_calendar_have_no_neighbour() {
        let last = Month::of(NaiveDate::MAX);
        assert_eq!(last.next(), None);
        assert_eq!(last.days_in_month(), 31);
        assert!(last.contains(last.first_day()));

        let first = Month::of(NaiveDate::MIN);
        assert_eq!(first.prev(), None);
        assert_eq!(first.first_day(), NaiveDate::MIN);
    }

    #[test]
    fn month_of_any_day_starts_on_the_first() {
        let date = NaiveDate::from_ymd_opt(2020, 7, 31).unwrap();
        assert_eq!(Month::of(date), month(2020, 7));
        assert_eq!(Month::of(date).first_day().day(), 1);
    }
}
