//! Terminal rendering for gobarber-core types.
//!
//! Extension traits and helpers that add colored output using owo_colors.

use chrono::{DateTime, Datelike, Utc};
use gobarber_core::dashboard::Dashboard;
use gobarber_core::month::WEEKDAYS_SHORT;
use gobarber_core::schedule::{Schedule, ScheduledAppointment};
use gobarber_core::toast::{Toast, ToastKind};
use gobarber_core::validation::FieldErrors;
use owo_colors::OwoColorize;

/// Width of one day cell in the month grid.
const CELL_WIDTH: usize = 4;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Toast {
    fn render(&self) -> String {
        let title = match self.kind {
            ToastKind::Info => format!("ℹ {}", self.title).blue().to_string(),
            ToastKind::Success => format!("✔ {}", self.title).green().to_string(),
            ToastKind::Error => format!("✘ {}", self.title).red().to_string(),
        };

        match &self.description {
            Some(description) => format!("  {}\n    {}", title, description.dimmed()),
            None => format!("  {}", title),
        }
    }
}

impl Render for FieldErrors {
    fn render(&self) -> String {
        self.iter()
            .map(|(field, message)| format!("  {}: {}", field.dimmed(), message.red()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Render for ScheduledAppointment {
    fn render(&self) -> String {
        format!(
            "  {}  {}",
            self.hour_formatted().dimmed(),
            self.appointment.user.name
        )
    }
}

/// Month grid, Sunday first. Disabled days are dimmed, today is underlined
/// and the selected day is highlighted.
pub fn render_calendar(dashboard: &Dashboard) -> String {
    let month = dashboard.current_month();
    let grid_width = CELL_WIDTH * 7;

    let mut lines = vec![
        format!("{:^grid_width$}", month.to_string()).bold().to_string(),
        WEEKDAYS_SHORT
            .iter()
            .map(|d| format!("{d:>CELL_WIDTH$}"))
            .collect::<String>()
            .dimmed()
            .to_string(),
    ];

    let offset = month.first_day().weekday().num_days_from_sunday() as usize;
    let mut line = " ".repeat(offset * CELL_WIDTH);

    for date in month.dates() {
        let modifiers = dashboard.modifiers(date);
        let cell = format!("{:>CELL_WIDTH$}", date.day());

        let styled = if modifiers.selected {
            cell.black().on_green().to_string()
        } else if modifiers.disabled {
            cell.dimmed().to_string()
        } else if modifiers.today {
            cell.underline().to_string()
        } else {
            cell
        };
        line.push_str(&styled);

        if date.weekday().num_days_from_sunday() == 6 {
            lines.push(std::mem::take(&mut line));
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

fn render_period(label: &str, entries: &[ScheduledAppointment], lines: &mut Vec<String>) {
    lines.push(label.bold().to_string());

    if entries.is_empty() {
        lines.push(format!("  {}", "Nenhum agendamento neste período".dimmed()));
    } else {
        lines.extend(entries.iter().map(Render::render));
    }
}

/// The selected day's appointments: the next one, then morning and afternoon.
pub fn render_schedule(schedule: &Schedule, now: DateTime<Utc>) -> String {
    let mut lines = Vec::new();

    if let Some(next) = schedule.next_appointment(now) {
        lines.push("Atendimento a seguir".bold().to_string());
        lines.push(next.render());
        lines.push(String::new());
    }

    render_period("Manhã", &schedule.morning, &mut lines);
    lines.push(String::new());
    render_period("Tarde", &schedule.afternoon, &mut lines);

    lines.join("\n")
}
