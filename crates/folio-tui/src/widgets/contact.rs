//! Contact section: tagline, links with their key hints, footer

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use folio_core::profile::Contact;

use crate::theme::Theme;
use crate::widgets::{section_header, wrap_text};

pub fn build(contact: &Contact, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![section_header("Contact", theme, width), Line::default()];

    for part in wrap_text(&contact.tagline, width) {
        lines.push(Line::from(Span::styled(
            part,
            Style::default().fg(theme.fg1),
        )));
    }
    lines.push(Line::default());

    let mut link_line = |key: &str, label: &str, value: &str| {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", key), Style::default().fg(theme.accent2)),
            Span::styled(format!("{:<10}", label), Style::default().fg(theme.fg0)),
            Span::styled(value.to_string(), Style::default().fg(theme.info)),
        ]));
    };

    if let Some(ref email) = contact.email {
        link_line("m", "Email", email);
    }
    if let Some(ref github) = contact.github {
        link_line("o", "GitHub", github);
    }
    if let Some(ref linkedin) = contact.linkedin {
        link_line("n", "LinkedIn", linkedin);
    }
    if let Some(ref paper) = contact.paper {
        link_line("p", "Paper", paper);
    }

    if !contact.footer.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            contact.footer.clone(),
            Style::default().fg(theme.grey1),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_only_shown_when_present() {
        let contact = Contact {
            email: Some("dev@example.com".to_string()),
            github: None,
            linkedin: None,
            paper: None,
            tagline: "Say hi.".to_string(),
            footer: String::new(),
        };
        let lines = build(&contact, &Theme::default(), 80);
        let all: String = lines.iter().map(|l| l.to_string() + "\n").collect();
        assert!(all.contains("dev@example.com"));
        assert!(!all.contains("GitHub"));
        assert!(!all.contains("LinkedIn"));
    }

    #[test]
    fn test_footer_rendered() {
        let contact = Contact {
            email: None,
            github: None,
            linkedin: None,
            paper: None,
            tagline: "Say hi.".to_string(),
            footer: "(c) 2024".to_string(),
        };
        let lines = build(&contact, &Theme::default(), 80);
        let all: String = lines.iter().map(|l| l.to_string()).collect();
        assert!(all.contains("(c) 2024"));
    }
}
