use anyhow::Result;
use gobarber_core::App;
use gobarber_core::forms::SignInForm;
use gobarber_core::validation::FormData;
use owo_colors::OwoColorize;

use super::{password_or_prompt, report, text_or_prompt};
use crate::utils::tui::create_spinner;

pub async fn run(app: &mut App, email: Option<String>, password: Option<String>) -> Result<()> {
    println!("Faça seu logon\n");

    let data = FormData::new()
        .with("email", text_or_prompt(email, "E-mail", None)?)
        .with("password", password_or_prompt(password, "Senha")?);

    let spinner = create_spinner("Entrando".into());
    let outcome = SignInForm::submit(app, &data).await;
    spinner.finish_and_clear();

    report(app, &outcome, "Sign-in")?;

    let user = app.auth.require_user()?;
    println!("{}", format!("  Bem-vindo, {}", user.name).green());
    println!("\nRun `gobarber dashboard` to see your calendar.");

    Ok(())
}
