pub mod config;
pub mod dashboard;
pub mod profile;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

use anyhow::Result;
use dialoguer::Input;
use gobarber_core::App;
use gobarber_core::forms::SubmitOutcome;

use crate::render::Render;

/// Use `value` when given on the command line, otherwise ask for it.
fn text_or_prompt(value: Option<String>, prompt: &str, initial: Option<&str>) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }

    let mut input = Input::<String>::new()
        .with_prompt(format!("  {prompt}"))
        .allow_empty(true);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }

    Ok(input.interact_text()?)
}

/// Like [`text_or_prompt`], without echoing what is typed.
fn password_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(rpassword::prompt_password(format!("  {prompt}: "))?),
    }
}

/// Print inline field errors and every queued toast, then fail the command
/// unless the submit went through.
fn report(app: &mut App, outcome: &SubmitOutcome, action: &str) -> Result<()> {
    if !outcome.errors.is_empty() {
        println!("{}", outcome.errors.render());
    }
    print_toasts(app);

    ensure_success(outcome, action)
}

fn ensure_success(outcome: &SubmitOutcome, action: &str) -> Result<()> {
    if outcome.is_success() {
        Ok(())
    } else if !outcome.errors.is_empty() {
        anyhow::bail!("{action} failed: {} invalid field(s)", outcome.errors.len())
    } else {
        anyhow::bail!("{action} failed")
    }
}

fn print_toasts(app: &mut App) {
    for toast in app.toasts.drain() {
        println!("{}", toast.render());
    }
}
