use anyhow::Result;
use gobarber_core::App;

pub fn run(app: &mut App) -> Result<()> {
    if !app.auth.is_signed_in() {
        println!("Not signed in.");
        return Ok(());
    }

    app.auth.sign_out(&mut app.api)?;
    println!("Signed out.");

    Ok(())
}
