//! About section: paragraphs, highlights, and the terminal card

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_core::profile::{About, TerminalCard};

use crate::theme::Theme;
use crate::widgets::{section_header, wrap_text};

pub fn build(about: &About, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    if about.paragraphs.is_empty() && about.highlights.is_empty() && about.card.is_none() {
        return Vec::new();
    }

    let mut lines = vec![section_header("About", theme, width), Line::default()];

    for paragraph in &about.paragraphs {
        for part in wrap_text(paragraph, width) {
            lines.push(Line::from(Span::styled(
                part,
                Style::default().fg(theme.fg1),
            )));
        }
        lines.push(Line::default());
    }

    for highlight in &about.highlights {
        lines.push(Line::from(vec![
            Span::styled("▸ ".to_string(), Style::default().fg(theme.accent2)),
            Span::styled(
                highlight.title.clone(),
                Style::default()
                    .fg(theme.fg0)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", highlight.detail),
                Style::default().fg(theme.grey1),
            ),
        ]));
    }

    if let Some(ref card) = about.card {
        lines.push(Line::default());
        lines.extend(build_card(card, theme, width));
    }

    lines
}

/// A small faux-terminal box with commands and their output
fn build_card(card: &TerminalCard, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let card_width = width.min(60).max(20);
    let inner_width = card_width - 4; // "│ " and " │"

    let border = Style::default().fg(theme.grey0);
    let mut lines = Vec::new();

    // Top border with the card title
    let title = format!("─ {} ", card.title);
    let fill = "─".repeat((card_width as usize).saturating_sub(title.width() + 2));
    lines.push(Line::from(vec![
        Span::styled("╭".to_string(), border),
        Span::styled(title, Style::default().fg(theme.accent2)),
        Span::styled(format!("{}╮", fill), border),
    ]));

    let body_line = |spans: Vec<Span<'static>>| {
        let content_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let pad = " ".repeat((inner_width as usize).saturating_sub(content_width));
        let mut row = vec![Span::styled("│ ".to_string(), border)];
        row.extend(spans);
        row.push(Span::styled(format!("{} │", pad), border));
        Line::from(row)
    };

    for entry in &card.entries {
        lines.push(body_line(vec![
            Span::styled("$ ".to_string(), Style::default().fg(theme.success)),
            Span::styled(
                entry.command.clone(),
                Style::default().fg(theme.fg0),
            ),
        ]));
        for output in &entry.output {
            for part in wrap_text(output, inner_width) {
                lines.push(body_line(vec![Span::styled(
                    part,
                    Style::default().fg(theme.fg1),
                )]));
            }
        }
    }

    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(card_width as usize - 2)),
        border,
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::profile::{Highlight, TerminalCardEntry};

    #[test]
    fn test_empty_about_builds_nothing() {
        let about = About {
            paragraphs: vec![],
            highlights: vec![],
            card: None,
        };
        assert!(build(&about, &Theme::default(), 80).is_empty());
    }

    #[test]
    fn test_about_with_content() {
        let about = About {
            paragraphs: vec!["First paragraph.".to_string()],
            highlights: vec![Highlight {
                title: "AI".to_string(),
                detail: "Intelligent features".to_string(),
            }],
            card: None,
        };
        let lines = build(&about, &Theme::default(), 80);
        let all: String = lines.iter().map(|l| l.to_string()).collect();
        assert!(all.contains("About"));
        assert!(all.contains("First paragraph."));
        assert!(all.contains("AI"));
    }

    #[test]
    fn test_card_rows_have_uniform_width() {
        let card = TerminalCard {
            title: "current_role.sh".to_string(),
            entries: vec![TerminalCardEntry {
                command: "whoami".to_string(),
                output: vec!["Engineer".to_string()],
            }],
        };
        let lines = build_card(&card, &Theme::default(), 80);
        assert!(lines.len() >= 4);
        let widths: Vec<usize> = lines
            .iter()
            .map(|l| UnicodeWidthStr::width(l.to_string().as_str()))
            .collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }
}
