//! Page model: the portfolio sections in display order and the assembled
//! scrollable page.
//!
//! The page is rebuilt every frame (the hero tagline changes as the
//! typewriter runs) and reports section anchors so the scroll navigator
//! can jump by section id.

use ratatui::text::{Line, Text};

use folio_core::Profile;

use crate::scroll::SectionAnchor;
use crate::theme::Theme;
use crate::widgets;

/// Portfolio sections in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Stable id used for anchors and navigation
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Human-readable title shown in section headers and the status bar
    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Section for a 1-based number key
    pub fn from_number(n: usize) -> Option<Section> {
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Self::ALL.iter().find(|s| s.id() == id).copied()
    }
}

/// One assembled frame of the portfolio page
pub struct PageView {
    pub text: Text<'static>,
    pub anchors: Vec<SectionAnchor>,
    pub total_height: u16,
    /// Rows from the top occupied by the hero section
    pub hero_height: u16,
}

impl PageView {
    /// Lay out the full page at the given content width
    pub fn build(
        profile: &Profile,
        theme: &Theme,
        width: u16,
        tagline: &str,
        cursor_visible: bool,
    ) -> Self {
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut anchors = Vec::new();

        let mut push_section = |section: Section, body: Vec<Line<'static>>| {
            if body.is_empty() {
                return;
            }
            anchors.push(SectionAnchor::new(section.id(), lines.len() as u16));
            lines.extend(body);
            lines.push(Line::default());
        };

        push_section(
            Section::Hero,
            widgets::hero::build(&profile.hero, tagline, cursor_visible, theme, width),
        );
        push_section(
            Section::About,
            widgets::about::build(&profile.about, theme, width),
        );
        push_section(
            Section::Experience,
            widgets::experience::build(&profile.experience, theme, width),
        );
        push_section(
            Section::Projects,
            widgets::projects::build(&profile.projects, theme, width),
        );
        push_section(
            Section::Skills,
            widgets::skills::build(&profile.skills, theme, width),
        );
        push_section(
            Section::Contact,
            widgets::contact::build(&profile.contact, theme, width),
        );

        let total_height = lines.len() as u16;
        let hero_height = anchors
            .iter()
            .find(|a| a.id != Section::Hero.id())
            .map(|a| a.offset)
            .unwrap_or(total_height);

        Self {
            text: Text::from(lines),
            anchors,
            total_height,
            hero_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::profile::sample_profile;

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("nope"), None);
    }

    #[test]
    fn test_section_number_keys() {
        assert_eq!(Section::from_number(1), Some(Section::Hero));
        assert_eq!(Section::from_number(4), Some(Section::Projects));
        assert_eq!(Section::from_number(0), None);
        assert_eq!(Section::from_number(7), None);
    }

    #[test]
    fn test_page_has_all_sections_in_order() {
        let profile = sample_profile();
        let page = PageView::build(&profile, &Theme::default(), 80, "Engineer", true);

        let ids: Vec<&str> = page.anchors.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            ["hero", "about", "experience", "projects", "skills", "contact"]
        );

        // Anchors are strictly increasing and within the page
        for pair in page.anchors.windows(2) {
            assert!(pair[0].offset < pair[1].offset);
        }
        assert!(page.anchors.last().unwrap().offset < page.total_height);
    }

    #[test]
    fn test_empty_sections_get_no_anchor() {
        let mut profile = sample_profile();
        profile.experience.clear();
        let page = PageView::build(&profile, &Theme::default(), 80, "Engineer", true);
        assert!(page.anchors.iter().all(|a| a.id != "experience"));
    }

    #[test]
    fn test_hero_height_covers_top_of_page() {
        let profile = sample_profile();
        let page = PageView::build(&profile, &Theme::default(), 80, "Engineer", true);
        assert!(page.hero_height > 0);
        assert!(page.hero_height < page.total_height);
    }
}
