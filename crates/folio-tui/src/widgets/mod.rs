//! Widgets for the portfolio page
//!
//! Section builders return plain `Vec<Line>` so the page can be assembled
//! and measured before rendering; anchors depend on exact line counts.

pub mod about;
pub mod contact;
pub mod experience;
pub mod help;
pub mod hero;
pub mod portfolio;
pub mod projects;
pub mod skills;
pub mod status_bar;

pub use help::HelpWidget;
pub use portfolio::PortfolioWidget;
pub use status_bar::StatusBarWidget;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Word-wrap text to a maximum display width
///
/// Greedy wrap on whitespace; words wider than the line are hard-broken.
/// Widths are display columns (unicode-width), not char counts.
pub fn wrap_text(text: &str, max_width: u16) -> Vec<String> {
    let max_width = max_width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > max_width {
            // Hard-break an overlong word
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let mut piece = String::new();
            let mut piece_width = 0usize;
            for c in word.chars() {
                let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
                if piece_width + cw > max_width {
                    lines.push(std::mem::take(&mut piece));
                    piece_width = 0;
                }
                piece.push(c);
                piece_width += cw;
            }
            current = piece;
            current_width = piece_width;
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed > max_width {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Section header: "── Title ───────────"
pub fn section_header(title: &str, theme: &Theme, width: u16) -> Line<'static> {
    let prefix = "── ";
    let used = prefix.width() + title.width() + 1;
    let fill = "─".repeat((width as usize).saturating_sub(used));

    Line::from(vec![
        Span::styled(prefix.to_string(), Style::default().fg(theme.grey0)),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", fill), Style::default().fg(theme.grey0)),
    ])
}

/// Bullet line: "▸ text", with the text wrapped and continuation lines
/// indented under the bullet
pub fn bullet_lines(text: &str, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(2);
    wrap_text(text, body_width)
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            let marker = if i == 0 { "▸ " } else { "  " };
            Line::from(vec![
                Span::styled(marker.to_string(), Style::default().fg(theme.accent2)),
                Span::styled(part, Style::default().fg(theme.fg1)),
            ])
        })
        .collect()
}

/// Helper to create a centered rect
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Truncate a string to max display length with ellipsis
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_fits() {
        assert_eq!(wrap_text("short line", 20), vec!["short line"]);
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
        for line in &lines {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 9);
        }
    }

    #[test]
    fn test_wrap_text_hard_breaks_long_word() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a very long string", 10), "a very ...");
    }

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }
}
