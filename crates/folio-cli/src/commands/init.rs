use anyhow::Result;

use folio_core::{profile, AppConfig};

/// Write a starter config and profile so the user has files to edit
pub fn run(force: bool) -> Result<()> {
    let config_path = AppConfig::config_path();
    if config_path.exists() && !force {
        println!("Config already exists: {}", config_path.display());
    } else {
        AppConfig::default().save()?;
        println!("Wrote config:  {}", config_path.display());
    }

    let profile_path = AppConfig::default_profile_path();
    if profile_path.exists() && !force {
        println!("Profile already exists: {}", profile_path.display());
    } else {
        if let Some(parent) = profile_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&profile_path, profile::sample_profile_toml()?)?;
        println!("Wrote profile: {}", profile_path.display());
    }

    println!("\nEdit the profile to make it yours, then run:");
    println!("  folio");

    Ok(())
}
