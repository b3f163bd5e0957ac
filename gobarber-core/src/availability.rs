//! Month availability and the disabled-day filter.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::month::Month;

/// Availability of one day of a provider's month, as returned by
/// `GET /providers/:id/month-availability`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAvailabilityItem {
    pub day: u32,
    pub available: bool,
}

/// A day to render as disabled in the calendar.
///
/// The API is trusted for the day number; a day that does not exist in the
/// month is kept as `Invalid` rather than dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledDay {
    Date(NaiveDate),
    Invalid { day: u32 },
}

impl DisabledDay {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DisabledDay::Date(date) => Some(*date),
            DisabledDay::Invalid { .. } => None,
        }
    }
}

impl fmt::Display for DisabledDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisabledDay::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DisabledDay::Invalid { day } => write!(f, "invalid day {day}"),
        }
    }
}

/// One entry per unavailable item, in input order, dated within `month`.
pub fn disabled_days(month: Month, items: &[MonthAvailabilityItem]) -> Vec<DisabledDay> {
    items
        .iter()
        .filter(|item| !item.available)
        .map(|item| match month.day(item.day) {
            Some(date) => DisabledDay::Date(date),
            None => DisabledDay::Invalid { day: item.day },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn item(day: u32, available: bool) -> MonthAvailabilityItem {
        MonthAvailabilityItem { day, available }
    }

    #[test]
    fn keeps_only_unavailable_days_in_order() {
        let month = Month::new(2020, 6).unwrap();
        let items = [item(3, false), item(1, true), item(2, false), item(4, true)];

        let disabled = disabled_days(month, &items);

        assert_eq!(
            disabled,
            vec![
                DisabledDay::Date(NaiveDate::from_ymd_opt(2020, 6, 3).unwrap()),
                DisabledDay::Date(NaiveDate::from_ymd_opt(2020, 6, 2).unwrap()),
            ]
        );
    }

    #[test]
    fn one_entry_per_unavailable_item_within_month() {
        for (year, m) in [(2020, 2), (2021, 2), (2021, 4), (2021, 12)] {
            let month = Month::new(year, m).unwrap();
            let items: Vec<_> = (1..=month.days_in_month())
                .map(|d| item(d, d % 3 != 0))
                .collect();

            let disabled = disabled_days(month, &items);
            let expected = items.iter().filter(|i| !i.available).count();

            assert_eq!(disabled.len(), expected);
            for day in disabled {
                let date = day.date().unwrap();
                assert!(month.contains(date));
                assert_eq!(date.day() % 3, 0);
            }
        }
    }

    #[test]
    fn out_of_range_day_is_kept_as_invalid() {
        let month = Month::new(2021, 2).unwrap();
        let disabled = disabled_days(month, &[item(30, false), item(31, true)]);

        assert_eq!(disabled, vec![DisabledDay::Invalid { day: 30 }]);
        assert_eq!(disabled[0].date(), None);
    }

    #[test]
    fn empty_list_disables_nothing() {
        let month = Month::new(2021, 2).unwrap();
        assert!(disabled_days(month, &[]).is_empty());
    }

    #[test]
    fn deserializes_api_payload() {
        let json = r#"[{"day":1,"available":false},{"day":2,"available":true}]"#;
        let items: Vec<MonthAvailabilityItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items, vec![item(1, false), item(2, true)]);
    }
}
