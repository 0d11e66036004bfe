//! Help overlay listing the active key bindings

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use folio_core::config::KeymapConfig;

use crate::app::App;
use crate::widgets::centered_rect;

pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let keymap = &app.config.keymap;
        let rows = binding_rows(keymap);

        let popup_width = 44u16.min(frame.area().width.saturating_sub(4));
        let popup_height = (rows.len() as u16 + 4).min(frame.area().height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, frame.area());

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg1));

        let mut lines = vec![Line::default()];
        for (keys, description) in rows {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<12}", keys),
                    Style::default()
                        .fg(app.theme.accent2)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(description, Style::default().fg(app.theme.fg1)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "press any key to close",
            Style::default().fg(app.theme.grey1),
        )));

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

fn binding_rows(keymap: &KeymapConfig) -> Vec<(String, String)> {
    vec![
        (
            format!("{}/{}", keymap.scroll_down, keymap.scroll_up),
            "scroll down / up".to_string(),
        ),
        (
            format!("{}/{}", keymap.scroll_half_down, keymap.scroll_half_up),
            "half page down / up".to_string(),
        ),
        (
            format!("{}/{}", keymap.scroll_page_down, keymap.scroll_page_up),
            "page down / up".to_string(),
        ),
        (
            format!("{}/{}", keymap.jump_to_top, keymap.jump_to_bottom),
            "top / bottom".to_string(),
        ),
        (
            format!("{}/{}", keymap.next_section, keymap.prev_section),
            "next / previous section".to_string(),
        ),
        ("1-6".to_string(), "jump to section".to_string()),
        (keymap.open_github.clone(), "open GitHub".to_string()),
        (keymap.open_linkedin.clone(), "open LinkedIn".to_string()),
        (keymap.open_mail.clone(), "compose email".to_string()),
        (keymap.open_paper.clone(), "open paper".to_string()),
        (keymap.quit.clone(), "quit".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_rows_cover_defaults() {
        let rows = binding_rows(&KeymapConfig::default());
        assert!(rows.iter().any(|(k, _)| k == "j/k"));
        assert!(rows.iter().any(|(k, _)| k == "gg/G"));
        assert!(rows.iter().any(|(_, d)| d == "quit"));
    }
}
