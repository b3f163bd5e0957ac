mod commands;
mod render;
mod utils;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use gobarber_core::App;
use gobarber_core::month::Month;
use gobarber_core::route::Route;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "gobarber")]
#[command(about = "Sign in to GoBarber, manage your profile and browse your provider calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    SignIn {
        #[arg(short, long)]
        email: Option<String>,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an account
    SignUp {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the saved session
    SignOut,
    /// Update your name, e-mail and password
    Profile {
        /// Defaults to the current name
        #[arg(short, long)]
        name: Option<String>,

        /// Defaults to the current e-mail
        #[arg(short, long)]
        email: Option<String>,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show the month calendar and the selected day's appointments
    Dashboard {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Day to select (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        select: Option<String>,
    },
    /// Create the config file if missing and print its location
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::SignIn { email, password } => {
            let mut app = App::load()?;
            if guard(&app, Route::SignIn)? {
                commands::sign_in::run(&mut app, email, password).await?;
            }
        }
        Commands::SignUp {
            name,
            email,
            password,
        } => {
            let mut app = App::load()?;
            if guard(&app, Route::SignUp)? {
                commands::sign_up::run(&mut app, name, email, password).await?;
            }
        }
        Commands::SignOut => commands::sign_out::run(&mut App::load()?)?,
        Commands::Profile {
            name,
            email,
            password,
        } => {
            let mut app = App::load()?;
            guard(&app, Route::Profile)?;
            commands::profile::run(&mut app, name, email, password).await?;
        }
        Commands::Dashboard { month, select } => {
            let month = month
                .map(|m| m.parse::<Month>())
                .transpose()
                .map_err(|e| anyhow::anyhow!(e))?;
            let select = select.map(|s| parse_date(&s)).transpose()?;

            let mut app = App::load()?;
            guard(&app, Route::Dashboard)?;
            commands::dashboard::run(&mut app, month, select).await?;
        }
        // Runs without loading the app so a broken config can still be located.
        Commands::Config => commands::config::run()?,
    }

    Ok(())
}

/// Apply the route redirect rules. Returns whether `route` may be shown.
///
/// Private routes without a session are an error; public routes with a
/// session just point at the dashboard.
fn guard(app: &App, route: Route) -> Result<bool> {
    match app.navigate(route) {
        resolved if resolved == route => Ok(true),
        Route::SignIn => anyhow::bail!(
            "Not signed in.\n\n\
            Sign in first with:\n  \
            gobarber sign-in"
        ),
        _ => {
            if let Some(user) = app.auth.user() {
                println!("Already signed in as {}.", user.email);
            }
            println!("Run `gobarber dashboard` to see your calendar, or `gobarber sign-out` first.");
            Ok(false)
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}
