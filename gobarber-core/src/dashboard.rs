//! Provider dashboard state: displayed month, selected date and the
//! availability / schedule data fetched for them.
//!
//! Fetches are not driven from here. Each state change hands back a request
//! value describing what to fetch; the caller performs it and feeds the
//! response back tagged with that request. Responses whose tag no longer
//! matches the displayed month (or selected day) are dropped, so a slow
//! response for an old month can never overwrite a newer one.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use tracing::debug;

use crate::availability::{DisabledDay, MonthAvailabilityItem, disabled_days};
use crate::month::Month;
use crate::schedule::{Appointment, Schedule};

/// A month-availability fetch to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRequest {
    pub provider_id: String,
    pub month: Month,
}

/// An appointment-list fetch to issue for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRequest {
    pub date: NaiveDate,
}

/// How a single calendar day should be rendered and whether it can be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayModifiers {
    pub available: bool,
    pub disabled: bool,
    pub selected: bool,
    pub today: bool,
}

pub struct Dashboard {
    provider_id: String,
    today: NaiveDate,
    selected_date: NaiveDate,
    current_month: Month,
    availability: Vec<MonthAvailabilityItem>,
    disabled: Vec<DisabledDay>,
    schedule: Schedule,
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

impl Dashboard {
    /// A dashboard for `provider_id` whose selected date and month start at `today`.
    pub fn new(provider_id: impl Into<String>, today: NaiveDate) -> Self {
        Dashboard {
            provider_id: provider_id.into(),
            today,
            selected_date: today,
            current_month: Month::of(today),
            availability: Vec::new(),
            disabled: Vec::new(),
            schedule: Schedule::default(),
        }
    }

    pub fn for_today(provider_id: impl Into<String>) -> Self {
        Self::new(provider_id, Local::now().date_naive())
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn current_month(&self) -> Month {
        self.current_month
    }

    pub fn availability(&self) -> &[MonthAvailabilityItem] {
        &self.availability
    }

    pub fn disabled_days(&self) -> &[DisabledDay] {
        &self.disabled
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Earliest month the calendar may show.
    pub fn first_month(&self) -> Month {
        Month::of(self.today)
    }

    /// Request for the currently displayed month.
    pub fn refresh(&self) -> MonthRequest {
        MonthRequest {
            provider_id: self.provider_id.clone(),
            month: self.current_month,
        }
    }

    /// Navigate to `month`. Returns the fetch to issue, or `None` when the
    /// month lies before the current one.
    ///
    /// Any in-flight fetch for the previous month is left alone; its
    /// response will be rejected by [`Dashboard::apply_availability`].
    pub fn change_month(&mut self, month: Month) -> Option<MonthRequest> {
        if month < self.first_month() {
            debug!(%month, "Refusing to navigate before the current month");
            return None;
        }

        self.current_month = month;
        self.availability.clear();
        self.recompute_disabled();

        Some(self.refresh())
    }

    /// Store an availability response. Returns `false` when the response was
    /// for a month (or provider) that is no longer displayed.
    pub fn apply_availability(
        &mut self,
        request: &MonthRequest,
        items: Vec<MonthAvailabilityItem>,
    ) -> bool {
        if request.month != self.current_month || request.provider_id != self.provider_id {
            debug!(
                requested = %request.month,
                displayed = %self.current_month,
                "Discarding stale month availability"
            );
            return false;
        }

        self.availability = items;
        self.recompute_disabled();
        true
    }

    fn recompute_disabled(&mut self) {
        self.disabled = disabled_days(self.current_month, &self.availability);
    }

    fn is_disabled(&self, date: NaiveDate) -> bool {
        is_weekend(date) || self.disabled.iter().any(|d| d.date() == Some(date))
    }

    pub fn modifiers(&self, date: NaiveDate) -> DayModifiers {
        let disabled = self.is_disabled(date);

        DayModifiers {
            available: !disabled && self.current_month.contains(date),
            disabled,
            selected: date == self.selected_date,
            today: date == self.today,
        }
    }

    /// Select `date` if it is available. Returns `false` and leaves the
    /// selection alone otherwise.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if !self.modifiers(date).available {
            debug!(%date, "Ignoring selection of unavailable day");
            return false;
        }

        if self.selected_date != date {
            self.schedule = Schedule::default();
        }
        self.selected_date = date;
        true
    }

    /// Request for the selected day's appointments.
    pub fn schedule_request(&self) -> DayRequest {
        DayRequest {
            date: self.selected_date,
        }
    }

    /// Store the appointment list for a day. Returns `false` when the
    /// selection moved on since the request was issued.
    pub fn apply_appointments(&mut self, request: DayRequest, appointments: Vec<Appointment>) -> bool {
        if request.date != self.selected_date {
            debug!(
                requested = %request.date,
                selected = %self.selected_date,
                "Discarding stale appointment list"
            );
            return false;
        }

        self.schedule = Schedule::from_appointments(appointments);
        true
    }
}
