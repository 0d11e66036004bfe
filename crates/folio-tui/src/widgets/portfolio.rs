//! The scrolling portfolio page
//!
//! Rebuilds the page each frame (the hero tagline is animated), feeds the
//! resulting bounds and anchors back to the scroll navigator, and renders
//! the visible slice at the current scroll offset.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::page::PageView;

/// Widest the content column gets on large terminals
const MAX_CONTENT_WIDTH: u16 = 88;

pub struct PortfolioWidget;

impl PortfolioWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.bg0)),
            area,
        );

        if area.width < 10 || area.height == 0 {
            return;
        }

        // Center a fixed-width content column
        let content_width = area.width.saturating_sub(4).clamp(10, MAX_CONTENT_WIDTH);
        let x = area.x + (area.width - content_width) / 2;
        let content_area = Rect::new(x, area.y, content_width, area.height);

        let tagline = app.typewriter.text().to_string();
        let page = PageView::build(
            &app.profile,
            &app.theme,
            content_width,
            &tagline,
            app.cursor_visible(now),
        );

        // Feed layout results back so scrolling and section jumps see the
        // geometry of what is actually on screen
        app.hero_height = page.hero_height;
        app.navigator
            .set_bounds(page.total_height.saturating_sub(area.height));
        app.navigator.set_anchors(page.anchors);

        let offset = app.navigator.offset();
        let paragraph = Paragraph::new(page.text)
            .style(Style::default().bg(app.theme.bg0).fg(app.theme.fg0))
            .scroll((offset, 0));
        frame.render_widget(paragraph, content_area);
    }
}
