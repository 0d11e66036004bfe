pub mod config;
pub mod error;
pub mod profile;
pub mod typewriter;

pub use config::{AppConfig, EasingType, ScrollConfig, TypewriterConfig};
pub use error::{Error, Result};
pub use profile::Profile;
pub use typewriter::{Phase, Typewriter};
