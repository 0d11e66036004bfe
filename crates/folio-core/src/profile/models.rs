use serde::{Deserialize, Serialize};

/// The full portfolio content, loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub hero: Hero,
    pub about: About,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    pub contact: Contact,
}

/// Hero section: name, cycling taglines, summary line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    /// Phrase list for the typewriter animation; must not be empty
    pub taglines: Vec<String>,
    #[serde(default)]
    pub summary: String,
}

/// About section: intro paragraphs, highlight cards, an optional mock
/// terminal card listing the current role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub card: Option<TerminalCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub detail: String,
}

/// A decorative shell-session card ("$ whoami" style)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalCard {
    pub title: String,
    #[serde(default)]
    pub entries: Vec<TerminalCardEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalCardEntry {
    pub command: String,
    #[serde(default)]
    pub output: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub location: String,
    /// Short badge text, e.g. "Current Role" or "Internship"
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub paper_url: Option<String>,
    /// Featured projects render first with a wider card
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub category: String,
}

/// Outbound contact links; all optional except the closing line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    /// External publication link, e.g. an IEEE paper
    #[serde(default)]
    pub paper: Option<String>,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub footer: String,
}

impl Contact {
    /// The email as an openable mailto URL
    pub fn mailto(&self) -> Option<String> {
        self.email.as_ref().map(|addr| format!("mailto:{addr}"))
    }
}

impl Profile {
    /// Validate invariants that the widgets and the typewriter rely on
    pub fn validate(&self) -> crate::Result<()> {
        if self.hero.name.trim().is_empty() {
            return Err(crate::Error::Profile("hero.name is empty".to_string()));
        }
        if self.hero.taglines.is_empty() {
            return Err(crate::Error::Profile(
                "hero.taglines must contain at least one phrase".to_string(),
            ));
        }
        if self.hero.taglines.iter().any(|t| t.trim().is_empty()) {
            return Err(crate::Error::Profile(
                "hero.taglines must not contain blank phrases".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto() {
        let contact = Contact {
            email: Some("dev@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(contact.mailto().as_deref(), Some("mailto:dev@example.com"));
        assert_eq!(Contact::default().mailto(), None);
    }

    #[test]
    fn test_validate_rejects_empty_taglines() {
        let mut profile = crate::profile::sample_profile();
        profile.hero.taglines.clear();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_tagline() {
        let mut profile = crate::profile::sample_profile();
        profile.hero.taglines.push("   ".to_string());
        assert!(profile.validate().is_err());
    }
}
