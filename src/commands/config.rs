use anyhow::Result;
use gobarber_core::config::GoBarberConfig;

pub fn run() -> Result<()> {
    let path = GoBarberConfig::config_path()?;

    if path.exists() {
        println!("Config: {}", path.display());
    } else {
        GoBarberConfig::create_default_config(&path)?;
        println!("Created config: {}", path.display());
    }

    let config = GoBarberConfig::load()?;
    println!("API: {}", config.api_url);

    Ok(())
}
