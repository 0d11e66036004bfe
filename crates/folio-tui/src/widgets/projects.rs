//! Projects section: featured project first, tech tags, feature bullets

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_core::profile::Project;

use crate::theme::Theme;
use crate::widgets::{bullet_lines, section_header, wrap_text};

pub fn build(projects: &[Project], theme: &Theme, width: u16) -> Vec<Line<'static>> {
    if projects.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![section_header("Projects", theme, width), Line::default()];

    // Featured projects lead the section
    let ordered = projects
        .iter()
        .filter(|p| p.featured)
        .chain(projects.iter().filter(|p| !p.featured));

    let mut first = true;
    for project in ordered {
        if !first {
            lines.push(Line::default());
        }
        first = false;

        let mut title_spans = Vec::new();
        if project.featured {
            title_spans.push(Span::styled(
                "★ ".to_string(),
                Style::default().fg(theme.accent2),
            ));
        }
        title_spans.push(Span::styled(
            project.title.clone(),
            Style::default()
                .fg(theme.fg0)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(title_spans));

        for part in wrap_text(&project.description, width) {
            lines.push(Line::from(Span::styled(
                part,
                Style::default().fg(theme.fg1),
            )));
        }

        if !project.tech.is_empty() {
            let tags = project
                .tech
                .iter()
                .map(|t| format!("[{}]", t))
                .collect::<Vec<_>>()
                .join(" ");
            for part in wrap_text(&tags, width) {
                lines.push(Line::from(Span::styled(
                    part,
                    Style::default().fg(theme.accent2),
                )));
            }
        }

        for feature in &project.features {
            lines.extend(bullet_lines(feature, theme, width));
        }

        if let Some(ref url) = project.paper_url {
            lines.push(Line::from(Span::styled(
                format!("paper: {}", url),
                Style::default().fg(theme.info),
            )));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, featured: bool) -> Project {
        Project {
            title: title.to_string(),
            description: "A project.".to_string(),
            tech: vec!["Rust".to_string()],
            features: vec!["Does things".to_string()],
            github_url: None,
            paper_url: None,
            featured,
        }
    }

    #[test]
    fn test_empty_projects_builds_nothing() {
        assert!(build(&[], &Theme::default(), 80).is_empty());
    }

    #[test]
    fn test_featured_project_comes_first() {
        let projects = vec![project("Second", false), project("First", true)];
        let lines = build(&projects, &Theme::default(), 80);
        let all: String = lines.iter().map(|l| l.to_string() + "\n").collect();

        let first_pos = all.find("★ First").expect("featured marker");
        let second_pos = all.find("Second").expect("plain title");
        assert!(first_pos < second_pos);
    }

    #[test]
    fn test_paper_link_shown() {
        let mut p = project("Voting", true);
        p.paper_url = Some("https://example.org/paper".to_string());
        let lines = build(&[p], &Theme::default(), 80);
        let all: String = lines.iter().map(|l| l.to_string()).collect();
        assert!(all.contains("paper: https://example.org/paper"));
    }
}
