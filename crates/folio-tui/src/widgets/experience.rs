//! Experience section: one entry per role with bullet highlights

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_core::profile::Experience;

use crate::theme::Theme;
use crate::widgets::{bullet_lines, section_header};

pub fn build(experience: &[Experience], theme: &Theme, width: u16) -> Vec<Line<'static>> {
    if experience.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![section_header("Experience", theme, width), Line::default()];

    for (i, entry) in experience.iter().enumerate() {
        let mut title_spans = vec![Span::styled(
            entry.role.clone(),
            Style::default()
                .fg(theme.fg0)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(ref badge) = entry.badge {
            title_spans.push(Span::styled(
                format!("  [{}]", badge),
                Style::default().fg(theme.accent2),
            ));
        }
        lines.push(Line::from(title_spans));

        lines.push(Line::from(Span::styled(
            entry.company.clone(),
            Style::default().fg(theme.accent),
        )));
        lines.push(Line::from(Span::styled(
            format!("{} · {}", entry.period, entry.location),
            Style::default().fg(theme.grey1),
        )));

        for highlight in &entry.highlights {
            lines.extend(bullet_lines(highlight, theme, width));
        }

        if i + 1 < experience.len() {
            lines.push(Line::default());
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_experience_builds_nothing() {
        assert!(build(&[], &Theme::default(), 80).is_empty());
    }

    #[test]
    fn test_entry_layout() {
        let entries = vec![Experience {
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            period: "2024".to_string(),
            location: "Remote".to_string(),
            badge: Some("Current Role".to_string()),
            highlights: vec!["Shipped things".to_string()],
        }];
        let lines = build(&entries, &Theme::default(), 80);
        let all: String = lines
            .iter()
            .map(|l| l.to_string() + "\n")
            .collect();
        assert!(all.contains("Engineer  [Current Role]"));
        assert!(all.contains("Acme"));
        assert!(all.contains("2024 · Remote"));
        assert!(all.contains("▸ Shipped things"));
    }
}
