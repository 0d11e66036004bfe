use std::path::PathBuf;

use anyhow::{Context, Result};

use folio_core::{profile, AppConfig};

/// Validate a profile file and print what the page will contain
pub fn run(config: &AppConfig, path: Option<PathBuf>) -> Result<()> {
    let profile = match path.or_else(|| config.profile_path()) {
        Some(path) => {
            println!("Checking {}\n", path.display());
            profile::load_profile(&path)
                .with_context(|| format!("Failed to load profile {}", path.display()))?
        }
        None => {
            println!("No profile configured, checking the built-in sample\n");
            profile::sample_profile()
        }
    };

    println!("{}", profile.hero.name);
    println!("  Taglines:   {}", profile.hero.taglines.join(" / "));
    println!("  Experience: {} entries", profile.experience.len());
    println!(
        "  Projects:   {} ({} featured)",
        profile.projects.len(),
        profile.projects.iter().filter(|p| p.featured).count()
    );
    println!("  Skills:     {}", profile.skills.len());

    let mut links = Vec::new();
    if profile.contact.email.is_some() {
        links.push("email");
    }
    if profile.contact.github.is_some() {
        links.push("github");
    }
    if profile.contact.linkedin.is_some() {
        links.push("linkedin");
    }
    if profile.contact.paper.is_some() {
        links.push("paper");
    }
    println!(
        "  Links:      {}",
        if links.is_empty() {
            "none".to_string()
        } else {
            links.join(", ")
        }
    );

    println!("\nProfile is valid.");

    Ok(())
}
