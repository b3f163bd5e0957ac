use anyhow::Result;
use chrono::{NaiveDate, Utc};
use gobarber_core::App;
use gobarber_core::month::Month;
use gobarber_core::schedule::DayHeader;
use gobarber_core::toast::ToastKind;
use owo_colors::OwoColorize;

use super::print_toasts;
use crate::render::{render_calendar, render_schedule};
use crate::utils::tui::create_spinner;

pub async fn run(app: &mut App, month: Option<Month>, select: Option<NaiveDate>) -> Result<()> {
    let mut dashboard = app.dashboard()?;
    let user = app.auth.require_user()?;

    println!("Bem-vindo, {}\n", user.name.bold());

    // A selected day implies its month unless one was given explicitly.
    if let Some(month) = month.or(select.map(Month::of)) {
        if dashboard.change_month(month).is_none() {
            anyhow::bail!(
                "Cannot show {}: the calendar starts at {}",
                month,
                dashboard.first_month()
            );
        }
    }

    let spinner = create_spinner(format!("Carregando {}", dashboard.current_month()));
    let request = dashboard.refresh();
    let loaded = app.load_month(&mut dashboard, request).await;
    spinner.finish_and_clear();

    if loaded.is_err() {
        app.toasts.add(
            ToastKind::Error,
            "Erro ao carregar disponibilidade",
            Some("Não foi possível carregar os dias disponíveis, tente novamente."),
        );
    }

    if let Some(date) = select {
        if !dashboard.select_date(date) {
            eprintln!("  {}", format!("{date} is not available").red());
        }
    }

    let request = dashboard.schedule_request();
    if app.load_schedule(&mut dashboard, request).await.is_err() {
        app.toasts.add(
            ToastKind::Error,
            "Erro ao carregar agendamentos",
            Some("Não foi possível carregar os horários agendados, tente novamente."),
        );
    }

    println!("{}\n", render_calendar(&dashboard));

    println!("{}", "Horários agendados".bold());
    println!(
        "{}\n",
        DayHeader::new(dashboard.selected_date(), dashboard.today())
            .to_string()
            .dimmed()
    );
    println!("{}", render_schedule(dashboard.schedule(), Utc::now()));

    print_toasts(app);

    Ok(())
}
