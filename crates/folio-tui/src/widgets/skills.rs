//! Skills section: two-column grid of name and category

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_core::profile::Skill;

use crate::theme::Theme;
use crate::widgets::section_header;

pub fn build(skills: &[Skill], theme: &Theme, width: u16) -> Vec<Line<'static>> {
    if skills.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![section_header("Skills", theme, width), Line::default()];

    let columns = if width >= 64 { 2 } else { 1 };
    let col_width = (width as usize / columns).saturating_sub(2);

    for row in skills.chunks(columns) {
        let mut spans = Vec::new();
        for (i, skill) in row.iter().enumerate() {
            let cell_used = skill.name.width() + 3 + skill.category.width();
            spans.push(Span::styled(
                skill.name.clone(),
                Style::default()
                    .fg(theme.fg0)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" · {}", skill.category),
                Style::default().fg(theme.grey1),
            ));
            if i + 1 < row.len() {
                let pad = col_width.saturating_sub(cell_used) + 2;
                spans.push(Span::raw(" ".repeat(pad)));
            }
        }
        lines.push(Line::from(spans));
    }

    lines
}
