//! Hero section: name, animated tagline with cursor, summary, key hints

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_core::profile::Hero;

use crate::theme::Theme;
use crate::widgets::wrap_text;

pub fn build(
    hero: &Hero,
    tagline: &str,
    cursor_visible: bool,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        hero.name.clone(),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    // Typewriter line. The cursor alternates with a space so the line
    // width stays stable while blinking.
    let cursor = if cursor_visible { "▌" } else { " " };
    lines.push(Line::from(vec![
        Span::styled("> ".to_string(), Style::default().fg(theme.accent2)),
        Span::styled(
            tagline.to_string(),
            Style::default()
                .fg(theme.fg0)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(cursor.to_string(), Style::default().fg(theme.accent2)),
    ]));
    lines.push(Line::default());

    for part in wrap_text(&hero.summary, width) {
        lines.push(Line::from(Span::styled(
            part,
            Style::default().fg(theme.fg1),
        )));
    }
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::styled("[4]".to_string(), Style::default().fg(theme.accent2)),
        Span::styled(" View my work   ".to_string(), Style::default().fg(theme.grey1)),
        Span::styled("[6]".to_string(), Style::default().fg(theme.accent2)),
        Span::styled(" Get in touch".to_string(), Style::default().fg(theme.grey1)),
    ]));
    lines.push(Line::from(Span::styled(
        "o:github  n:linkedin  m:email  p:paper".to_string(),
        Style::default().fg(theme.grey1),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_hero() -> Hero {
        Hero {
            name: "Dev".to_string(),
            taglines: vec!["Engineer".to_string()],
            summary: "A short summary.".to_string(),
        }
    }

    #[test]
    fn test_hero_contains_name_and_tagline() {
        let lines = build(&test_hero(), "Engin", true, &Theme::default(), 80);
        let all: String = lines.iter().map(|l| l.to_string()).collect();
        assert!(all.contains("Dev"));
        assert!(all.contains("> Engin▌"));
    }

    #[test]
    fn test_cursor_blink_keeps_height_stable() {
        let on = build(&test_hero(), "En", true, &Theme::default(), 80);
        let off = build(&test_hero(), "En", false, &Theme::default(), 80);
        assert_eq!(on.len(), off.len());

        let off_text: String = off.iter().map(|l| l.to_string()).collect();
        assert!(off_text.contains("> En "));
    }
}
