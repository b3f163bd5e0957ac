use anyhow::Result;
use gobarber_core::App;
use gobarber_core::forms::SignUpForm;
use gobarber_core::validation::FormData;

use super::{password_or_prompt, report, text_or_prompt};
use crate::utils::tui::create_spinner;

pub async fn run(
    app: &mut App,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    println!("Faça seu cadastro\n");

    let data = FormData::new()
        .with("name", text_or_prompt(name, "Nome", None)?)
        .with("email", text_or_prompt(email, "E-mail", None)?)
        .with("password", password_or_prompt(password, "Senha")?);

    let spinner = create_spinner("Cadastrando".into());
    let outcome = SignUpForm::submit(app, &data).await;
    spinner.finish_and_clear();

    report(app, &outcome, "Sign-up")?;

    println!("\nRun `gobarber sign-in` to sign in.");

    Ok(())
}
