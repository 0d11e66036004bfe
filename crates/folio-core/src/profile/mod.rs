pub mod loader;
pub mod models;

pub use loader::{load_profile, sample_profile, sample_profile_toml};
pub use models::{
    About, Contact, Experience, Hero, Highlight, Profile, Project, Skill, TerminalCard,
    TerminalCardEntry,
};
