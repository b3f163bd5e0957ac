use anyhow::Result;
use gobarber_core::App;
use gobarber_core::forms::ProfileForm;

use super::{password_or_prompt, report, text_or_prompt};
use crate::utils::tui::create_spinner;

pub async fn run(
    app: &mut App,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut data = ProfileForm::initial_data(app.auth.require_user()?);

    println!("Meu perfil\n");

    let name = text_or_prompt(name, "Nome", data.get("name"))?;
    let email = text_or_prompt(email, "E-mail", data.get("email"))?;
    let password = password_or_prompt(password, "Nova senha")?;

    data.set("name", name);
    data.set("email", email);
    data.set("password", password);

    let spinner = create_spinner("Salvando".into());
    let outcome = ProfileForm::submit(app, &data).await;
    spinner.finish_and_clear();

    report(app, &outcome, "Profile update")?;

    Ok(())
}
