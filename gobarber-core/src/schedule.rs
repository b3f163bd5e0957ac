//! The selected day's appointments, split the way the dashboard lists them.

use std::fmt;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::month::weekday_name;
use crate::user::User;

/// Appointments starting at or after this hour are listed under "Tarde".
const AFTERNOON_STARTS_AT: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub date: DateTime<Utc>,
    pub user: User,
}

/// An appointment with its start time in the display time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledAppointment {
    pub time: NaiveTime,
    pub appointment: Appointment,
}

impl ScheduledAppointment {
    pub fn hour_formatted(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub morning: Vec<ScheduledAppointment>,
    pub afternoon: Vec<ScheduledAppointment>,
}

impl Schedule {
    pub fn from_appointments(appointments: Vec<Appointment>) -> Self {
        Self::from_appointments_in(appointments, &Local)
    }

    /// Split appointments into morning and afternoon by their local start time in `tz`.
    pub fn from_appointments_in<Tz: TimeZone>(mut appointments: Vec<Appointment>, tz: &Tz) -> Self {
        appointments.sort_by_key(|a| a.date);

        let mut schedule = Schedule::default();
        for appointment in appointments {
            let time = appointment.date.with_timezone(tz).time();
            let entry = ScheduledAppointment { time, appointment };

            if time.hour() < AFTERNOON_STARTS_AT {
                schedule.morning.push(entry);
            } else {
                schedule.afternoon.push(entry);
            }
        }

        schedule
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty()
    }

    pub fn len(&self) -> usize {
        self.morning.len() + self.afternoon.len()
    }

    /// First appointment starting at or after `now`.
    pub fn next_appointment(&self, now: DateTime<Utc>) -> Option<&ScheduledAppointment> {
        self.morning
            .iter()
            .chain(self.afternoon.iter())
            .find(|entry| entry.appointment.date >= now)
    }
}

/// Header above the appointment list: "Hoje | Dia 06 | Segunda-feira".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHeader {
    pub is_today: bool,
    pub day: String,
    pub weekday: &'static str,
}

impl DayHeader {
    pub fn new(selected: NaiveDate, today: NaiveDate) -> Self {
        DayHeader {
            is_today: selected == today,
            day: format!("Dia {:02}", selected.day()),
            weekday: weekday_name(selected.weekday()),
        }
    }
}

impl fmt::Display for DayHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_today {
            write!(f, "Hoje | ")?;
        }
        write!(f, "{} | {}", self.day, self.weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(id: &str, hour: u32) -> Appointment {
        Appointment {
            id: id.to_string(),
            date: Utc.with_ymd_and_hms(2020, 7, 6, hour, 0, 0).unwrap(),
            user: User {
                id: format!("user-{id}"),
                name: "Cliente".to_string(),
                email: "cliente@example.com".to_string(),
                avatar_url: None,
            },
        }
    }

    #[test]
    fn splits_morning_and_afternoon_sorted() {
        let schedule = Schedule::from_appointments_in(
            vec![
                appointment("c", 15),
                appointment("a", 8),
                appointment("d", 12),
                appointment("b", 9),
            ],
            &Utc,
        );

        let morning: Vec<_> = schedule.morning.iter().map(|e| e.hour_formatted()).collect();
        let afternoon: Vec<_> = schedule.afternoon.iter().map(|e| e.hour_formatted()).collect();

        assert_eq!(morning, vec!["08:00", "09:00"]);
        assert_eq!(afternoon, vec!["12:00", "15:00"]);
        assert_eq!(schedule.len(), 4);
    }

    #[test]
    fn next_appointment_skips_past_ones() {
        let schedule =
            Schedule::from_appointments_in(vec![appointment("a", 8), appointment("b", 14)], &Utc);

        let now = Utc.with_ymd_and_hms(2020, 7, 6, 10, 30, 0).unwrap();
        assert_eq!(schedule.next_appointment(now).unwrap().appointment.id, "b");

        let late = Utc.with_ymd_and_hms(2020, 7, 6, 18, 0, 0).unwrap();
        assert!(schedule.next_appointment(late).is_none());
    }

    #[test]
    fn day_header_labels() {
        let monday = NaiveDate::from_ymd_opt(2020, 7, 6).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2020, 7, 7).unwrap();

        assert_eq!(DayHeader::new(monday, monday).to_string(), "Hoje | Dia 06 | Segunda-feira");
        assert_eq!(DayHeader::new(tuesday, monday).to_string(), "Dia 07 | Terça-feira");
    }

    #[test]
    fn deserializes_api_payload() {
        let json = r#"{
            "id": "a1",
            "date": "2020-07-06T11:00:00.000Z",
            "user": {"id": "u1", "name": "Ana", "email": "ana@example.com", "avatar_url": null}
        }"#;
        let parsed: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.date.hour(), 11);
        assert_eq!(parsed.user.avatar_url, None);
    }
}
