use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let section_str = app
            .current_section()
            .map(|s| s.title())
            .unwrap_or("-");

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | {}%",
                mode_str,
                section_str,
                app.scroll_percent()
            )
        };

        let help_hint = " q:quit j/k:scroll Tab:section 1-6:jump ?:help ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.bg2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey1).bg(app.theme.bg2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
