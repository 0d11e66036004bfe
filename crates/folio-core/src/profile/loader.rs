//! Profile loading: user TOML file or the built-in sample.

use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::profile::models::*;

/// Load and validate a profile from a TOML file
pub fn load_profile(path: &Path) -> Result<Profile> {
    let content = std::fs::read_to_string(path)?;
    let profile: Profile =
        toml::from_str(&content).map_err(|e| Error::Profile(e.to_string()))?;
    profile.validate()?;
    info!("Loaded profile from {}", path.display());
    Ok(profile)
}

/// The built-in sample profile, used when no profile file is configured.
/// Also what `folio init` writes as a starting point.
pub fn sample_profile() -> Profile {
    Profile {
        hero: Hero {
            name: "Abhinav Tadepalli".to_string(),
            taglines: vec![
                "Full Stack Developer".to_string(),
                "AI Application Developer".to_string(),
                "Software Engineer".to_string(),
                "Innovation Builder".to_string(),
            ],
            summary: "Building next-generation applications with cutting-edge AI \
                      integration, full-stack development expertise, and a passion \
                      for innovative solutions."
                .to_string(),
        },
        about: About {
            paragraphs: vec![
                "I'm a passionate Associate Software Engineer at Matrack Inc, where I \
                 specialize in building sophisticated GPS/fleet tracking platforms and \
                 AI-powered applications."
                    .to_string(),
                "My expertise spans across full-stack development with a special focus \
                 on AI integration. I've led the development of comprehensive CRM \
                 platforms, built innovative tracking solutions with real-time \
                 analytics, and created cutting-edge AI applications."
                    .to_string(),
            ],
            highlights: vec![
                Highlight {
                    title: "Full Stack Development".to_string(),
                    detail: "End-to-end application development".to_string(),
                },
                Highlight {
                    title: "AI Integration".to_string(),
                    detail: "Intelligent application features".to_string(),
                },
                Highlight {
                    title: "GPS & Tracking".to_string(),
                    detail: "Real-time location solutions".to_string(),
                },
                Highlight {
                    title: "CRM Development".to_string(),
                    detail: "Customer management platforms".to_string(),
                },
            ],
            card: Some(TerminalCard {
                title: "current_role.sh".to_string(),
                entries: vec![
                    TerminalCardEntry {
                        command: "whoami".to_string(),
                        output: vec!["Associate Software Engineer @ Matrack Inc".to_string()],
                    },
                    TerminalCardEntry {
                        command: "expertise --list".to_string(),
                        output: vec![
                            "GPS/Fleet Tracking Platforms".to_string(),
                            "Real-time Analytics & Dashboards".to_string(),
                            "CRM Platform Development".to_string(),
                            "AI-Powered Applications".to_string(),
                        ],
                    },
                    TerminalCardEntry {
                        command: "status".to_string(),
                        output: vec!["Ready for new challenges".to_string()],
                    },
                ],
            }),
        },
        experience: vec![
            Experience {
                role: "Associate Software Engineer".to_string(),
                company: "Matrack Inc".to_string(),
                period: "April 2024 - Present".to_string(),
                location: "San Ramon, California - Remote".to_string(),
                badge: Some("Current Role".to_string()),
                highlights: vec![
                    "Live tracking systems with real-time updates".to_string(),
                    "Advanced geofencing and alert systems".to_string(),
                    "Interactive heatmaps and mapping solutions".to_string(),
                    "Led full-stack CRM platform development".to_string(),
                    "Integrated payment processing systems".to_string(),
                    "Implemented AI-assisted communications".to_string(),
                ],
            },
            Experience {
                role: "Intern".to_string(),
                company: "Daimler India Commercial Vehicles".to_string(),
                period: "June 2023 - September 2023".to_string(),
                location: "Chennai, Tamil Nadu - On-site".to_string(),
                badge: Some("Internship".to_string()),
                highlights: vec![
                    "Web development and team coordination".to_string(),
                    "Collaborated on commercial vehicle technology solutions".to_string(),
                ],
            },
            Experience {
                role: "Intern".to_string(),
                company: "Centre for Internet Studies & Artificial Intelligence".to_string(),
                period: "February 2023 - May 2023".to_string(),
                location: "Amritapuri - On-site".to_string(),
                badge: Some("Internship".to_string()),
                highlights: vec![
                    "Front-end development and vulnerability assessment".to_string(),
                    "Research and development in AI and cybersecurity".to_string(),
                ],
            },
            Experience {
                role: "Intern".to_string(),
                company: "Amrita Hospital, Faridabad".to_string(),
                period: "August 2022 - August 2022".to_string(),
                location: "Faridabad, Haryana - On-site".to_string(),
                badge: Some("Internship".to_string()),
                highlights: vec![
                    "Negotiation and event management".to_string(),
                    "Healthcare technology and administrative systems".to_string(),
                ],
            },
        ],
        projects: vec![
            Project {
                title: "Blockchain E-Voting System".to_string(),
                description: "Pioneering blockchain-based e-voting system with smart \
                              contracts, featuring real-time voting, transparent \
                              elections, and secure authentication. Published in IEEE \
                              ASIANCON 2024 conference proceedings."
                    .to_string(),
                tech: vec![
                    "Blockchain".to_string(),
                    "Smart Contracts".to_string(),
                    "Firebase".to_string(),
                    "MongoDB".to_string(),
                    "React".to_string(),
                    "Node.js".to_string(),
                ],
                features: vec![
                    "Smart contracts for tamper-resistant vote recording".to_string(),
                    "Real-time results with instant blockchain confirmation".to_string(),
                    "JWT-based access control for private organization voting".to_string(),
                ],
                github_url: Some("https://github.com/Abhinav140902".to_string()),
                paper_url: Some("https://ieeexplore.ieee.org/document/10838111".to_string()),
                featured: true,
            },
            Project {
                title: "AI-Powered Applicant Tracking System".to_string(),
                description: "AI-driven applicant tracking with dual deployment: \
                              cloud OpenAI API or local Ollama LLM for complete privacy."
                    .to_string(),
                tech: vec![
                    "GPT-4".to_string(),
                    "Ollama".to_string(),
                    "FAISS".to_string(),
                    "LangChain".to_string(),
                ],
                features: vec![
                    "FAISS vector database for semantic candidate matching".to_string(),
                    "Hybrid search combining keywords and AI analysis".to_string(),
                    "Privacy-first local deployment option".to_string(),
                ],
                github_url: Some("https://github.com/Abhinav140902".to_string()),
                paper_url: None,
                featured: false,
            },
            Project {
                title: "Sentiment Analysis Model".to_string(),
                description: "Deep-learning sentiment model reaching 99.29% accuracy \
                              on the IMDB movie review dataset."
                    .to_string(),
                tech: vec![
                    "Deep Learning".to_string(),
                    "Python".to_string(),
                    "NLP".to_string(),
                ],
                features: vec![
                    "Artificial neural network architecture".to_string(),
                    "Binary positive/negative classification".to_string(),
                ],
                github_url: Some("https://github.com/Abhinav140902".to_string()),
                paper_url: None,
                featured: false,
            },
            Project {
                title: "Lossless Data Compression Tool".to_string(),
                description: "Huffman-coding compressor demonstrating data structure \
                              and algorithm fundamentals."
                    .to_string(),
                tech: vec![
                    "Python".to_string(),
                    "Algorithms".to_string(),
                    "Huffman Coding".to_string(),
                ],
                features: vec![
                    "Variable-length codes from character frequencies".to_string(),
                    "Lossless round-trip with integrity checks".to_string(),
                ],
                github_url: Some("https://github.com/Abhinav140902".to_string()),
                paper_url: None,
                featured: false,
            },
        ],
        skills: vec![
            Skill { name: "Python".to_string(), category: "Backend & AI".to_string() },
            Skill { name: "React".to_string(), category: "Frontend".to_string() },
            Skill { name: "Node.js".to_string(), category: "Backend".to_string() },
            Skill { name: "PHP".to_string(), category: "Backend".to_string() },
            Skill { name: "MySQL".to_string(), category: "Database".to_string() },
            Skill { name: "AWS".to_string(), category: "Cloud Platform".to_string() },
            Skill { name: "OpenAI API".to_string(), category: "AI Integration".to_string() },
            Skill { name: "LangChain".to_string(), category: "AI Framework".to_string() },
            Skill { name: "FAISS".to_string(), category: "Vector Search".to_string() },
            Skill { name: "Docker".to_string(), category: "DevOps".to_string() },
            Skill { name: "Google Maps API".to_string(), category: "Location Services".to_string() },
            Skill { name: "HERE Maps API".to_string(), category: "Location Services".to_string() },
        ],
        contact: Contact {
            email: Some("abhinav140902@gmail.com".to_string()),
            github: Some("https://github.com/Abhinav140902".to_string()),
            linkedin: Some("https://www.linkedin.com/in/abhinav-tadepalli-471574214/".to_string()),
            paper: Some("https://ieeexplore.ieee.org/document/10838111".to_string()),
            tagline: "Ready to collaborate on innovative projects or discuss \
                      opportunities? Let's build something amazing together."
                .to_string(),
            footer: "(c) 2024 Abhinav Tadepalli. Crafted with passion and innovation."
                .to_string(),
        },
    }
}

/// Serialize the sample profile for `folio init`
pub fn sample_profile_toml() -> Result<String> {
    toml::to_string_pretty(&sample_profile()).map_err(|e| Error::Profile(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_profile_is_valid() {
        let profile = sample_profile();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.hero.taglines.len(), 4);
        assert!(!profile.projects.is_empty());
    }

    #[test]
    fn test_sample_profile_carries_all_roles_and_skills() {
        let profile = sample_profile();
        assert_eq!(profile.experience.len(), 4);
        assert!(profile
            .experience
            .iter()
            .any(|e| e.company.starts_with("Amrita Hospital")));

        assert_eq!(profile.skills.len(), 12);
        for name in ["PHP", "FAISS", "HERE Maps API"] {
            assert!(
                profile.skills.iter().any(|s| s.name == name),
                "missing skill {name}"
            );
        }
    }

    #[test]
    fn test_sample_profile_round_trips_through_toml() {
        let toml_text = sample_profile_toml().unwrap();
        let parsed: Profile = toml::from_str(&toml_text).unwrap();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.hero.name, sample_profile().hero.name);
        assert_eq!(parsed.experience.len(), 4);
    }

    #[test]
    fn test_load_profile_missing_file() {
        let result = load_profile(Path::new("/nonexistent/profile.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_minimal_profile_parses() {
        let profile: Profile = toml::from_str(
            r#"
            [hero]
            name = "Dev"
            taglines = ["Engineer"]

            [about]

            [contact]
            email = "dev@example.com"
            "#,
        )
        .unwrap();
        assert!(profile.validate().is_ok());
        assert!(profile.experience.is_empty());
    }
}
