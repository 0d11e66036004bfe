use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Path to the profile TOML file (None = built-in sample profile)
    #[serde(default)]
    pub profile_path: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            profile_path: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Typewriter animation configuration
    #[serde(default)]
    pub typewriter: TypewriterConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
            typewriter: TypewriterConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord", "dracula")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Secondary background (cards, popups)
    pub bg1: Option<String>,
    /// Tertiary background (status bar)
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground (dimmer body text)
    pub fg1: Option<String>,
    /// Accent color (headings, active section)
    pub accent: Option<String>,
    /// Secondary accent (tagline, tags)
    pub accent2: Option<String>,
    /// Error color
    pub error: Option<String>,
    /// Success color
    pub success: Option<String>,
    /// Warning color
    pub warning: Option<String>,
    /// Info color (links)
    pub info: Option<String>,
}

/// Easing function for smooth scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// No interpolation, jump at the end
    None,
    /// Constant speed
    Linear,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling animations
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Easing function
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Lines per scroll step when smooth scrolling is disabled
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Animation frame rate
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: default_easing(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Timings for the hero typewriter animation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Interval between typed characters in milliseconds
    #[serde(default = "default_type_interval")]
    pub type_interval_ms: u64,
    /// Interval between deleted characters in milliseconds
    #[serde(default = "default_delete_interval")]
    pub delete_interval_ms: u64,
    /// Hold time on a fully typed phrase before deleting, in milliseconds
    #[serde(default = "default_hold")]
    pub hold_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_interval_ms: default_type_interval(),
            delete_interval_ms: default_delete_interval(),
            hold_ms: default_hold(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<Tab>", "<S-Tab>", "gg", "G"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Scrolling
    /// Scroll down one line
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll up one line
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Scroll half page down
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    /// Scroll half page up
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    /// Scroll full page down
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    /// Scroll full page up
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    /// Jump to top of the page
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to bottom of the page
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    // Section navigation
    /// Smooth-scroll to the next section
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Smooth-scroll to the previous section
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,

    // Outbound links
    /// Open the GitHub profile in the browser
    #[serde(default = "default_key_open_github")]
    pub open_github: String,
    /// Open the LinkedIn profile in the browser
    #[serde(default = "default_key_open_linkedin")]
    pub open_linkedin: String,
    /// Compose a mail to the contact address
    #[serde(default = "default_key_open_mail")]
    pub open_mail: String,
    /// Open the published paper in the browser
    #[serde(default = "default_key_open_paper")]
    pub open_paper: String,

    /// Toggle the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            open_github: default_key_open_github(),
            open_linkedin: default_key_open_linkedin(),
            open_mail: default_key_open_mail(),
            open_paper: default_key_open_paper(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_section() -> String { "<Tab>".to_string() }
fn default_key_prev_section() -> String { "<S-Tab>".to_string() }
fn default_key_open_github() -> String { "o".to_string() }
fn default_key_open_linkedin() -> String { "n".to_string() }
fn default_key_open_mail() -> String { "m".to_string() }
fn default_key_open_paper() -> String { "p".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u16 {
    60
}

fn default_type_interval() -> u64 {
    100
}

fn default_delete_interval() -> u64 {
    50
}

fn default_hold() -> u64 {
    2000
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Default location for a user profile file
    pub fn default_profile_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("profile.toml")
    }

    /// Resolve the profile path: explicit config value, else the default
    /// location if a file exists there, else None (built-in sample)
    pub fn profile_path(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.general.profile_path {
            return Some(path.clone());
        }
        let default = Self::default_profile_path();
        default.exists().then_some(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.typewriter.type_interval_ms, 100);
        assert_eq!(config.ui.typewriter.delete_interval_ms, 50);
        assert_eq!(config.ui.typewriter.hold_ms, 2000);
    }

    #[test]
    fn test_theme_config_from_string() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "nord"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "nord");
    }

    #[test]
    fn test_theme_config_from_table() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "dracula"
            colors = { accent = "#ff0000" }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui.typewriter]
            hold_ms = 1500
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.typewriter.hold_ms, 1500);
        assert_eq!(config.ui.typewriter.type_interval_ms, 100);
        assert_eq!(config.keymap.quit, "q");
    }
}
