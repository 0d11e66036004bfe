//! Dracula theme
//! https://draculatheme.com/

use crate::theme::Theme;
use ratatui::style::Color;

/// Dracula default theme
pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36),
        bg1: Color::Rgb(0x34, 0x37, 0x46),
        bg2: Color::Rgb(0x44, 0x47, 0x5a),
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
        fg1: Color::Rgb(0xe6, 0xe6, 0xe0),
        grey0: Color::Rgb(0x44, 0x47, 0x5a),
        grey1: Color::Rgb(0x62, 0x72, 0xa4),
        accent: Color::Rgb(0xbd, 0x93, 0xf9),  // purple
        accent2: Color::Rgb(0xff, 0x79, 0xc6), // pink
        error: Color::Rgb(0xff, 0x55, 0x55),
        success: Color::Rgb(0x50, 0xfa, 0x7b),
        warning: Color::Rgb(0xff, 0xb8, 0x6c),
        info: Color::Rgb(0x8b, 0xe9, 0xfd),
    }
}
