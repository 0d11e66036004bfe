use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    /// Headings, section titles, the hero name
    pub accent: Color,
    /// Tagline, tech tags, secondary emphasis
    pub accent2: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    /// Links
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox::dark()
    }
}
