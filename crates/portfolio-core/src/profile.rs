//! Profile — the hand-authored page content.
//!
//! The literals live in `profile.yaml`, embedded at compile time. Missing
//! fields in an override file fall back to the built-in values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

use crate::error::ProfileError;
use crate::types::{Glyph, Skill, SocialLink};

const BUNDLED_PROFILE: &str = include_str!("../profile.yaml");

/// Social link whose card shows the contact address instead of "Connect on …".
pub const EMAIL_LINK_NAME: &str = "Email";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub age: u32,
    pub school: String,
    pub hackathons: u32,
    pub contact_email: String,
    /// Image source for the about card.
    pub photo: String,
    pub footer_tagline: String,
    pub built_with: String,
    pub skills: Vec<Skill>,
    pub social_links: Vec<SocialLink>,
}

impl Profile {
    /// The profile compiled into the binary from `profile.yaml`.
    pub fn bundled() -> Result<Self> {
        Self::from_yaml_str(BUNDLED_PROFILE).context("Failed to parse bundled profile.yaml")
    }

    /// Load a profile override from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid profile: {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let profile: Profile = serde_yaml::from_str(content).context("Failed to parse profile")?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reject data that would break row/card keys. Out-of-range levels only
    /// warn: the bar is rendered as authored.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyName("profile"));
        }

        let mut seen = HashSet::new();
        for skill in &self.skills {
            if skill.name.trim().is_empty() {
                return Err(ProfileError::EmptyName("skill"));
            }
            if !seen.insert(skill.name.as_str()) {
                return Err(ProfileError::DuplicateSkill(skill.name.clone()));
            }
            if skill.level > 100 {
                warn!(
                    "Skill {} has level {}%, the bar will overflow its track",
                    skill.name, skill.level
                );
            }
        }

        let mut seen = HashSet::new();
        for link in &self.social_links {
            if link.name.trim().is_empty() {
                return Err(ProfileError::EmptyName("social link"));
            }
            if !seen.insert(link.name.as_str()) {
                return Err(ProfileError::DuplicateLink(link.name.clone()));
            }
        }

        Ok(())
    }

    /// Subtitle shown under a contact card title.
    pub fn link_subtitle(&self, link: &SocialLink) -> String {
        if link.name == EMAIL_LINK_NAME {
            self.contact_email.clone()
        } else {
            format!("Connect on {}", link.name)
        }
    }
}

fn skill(name: &str, level: u32, style: &str) -> Skill {
    Skill {
        name: name.into(),
        level,
        style: style.into(),
    }
}

fn link(name: &str, url: &str, glyph: Glyph, hover_style: &str) -> SocialLink {
    SocialLink {
        name: name.into(),
        url: url.into(),
        glyph,
        hover_style: hover_style.into(),
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Dachi Jananashvili".into(),
            tagline: "Aspiring Web Developer & Student".into(),
            age: 17,
            school: "Goal-Oriented Academy".into(),
            hackathons: 3,
            contact_email: "jananashvilidachi@gmail.com".into(),
            photo: "/assets/me.jpg".into(),
            footer_tagline: "Aspiring Web Developer".into(),
            built_with: "Rust, Dioxus and Tailwind CSS".into(),
            skills: vec![
                skill("HTML", 95, "bg-gradient-to-r from-orange-500 to-red-500"),
                skill("CSS", 85, "bg-gradient-to-r from-blue-500 to-cyan-500"),
                skill("JavaScript", 85, "bg-gradient-to-r from-yellow-400 to-yellow-600"),
                skill("React", 80, "bg-gradient-to-r from-red-500 to-pink-500"),
                skill("Tailwind", 80, "bg-gradient-to-r from-green-400 to-blue-500"),
                skill("Mern", 65, "bg-gradient-to-r from-green-500 to-lime-500"),
            ],
            social_links: vec![
                link(
                    "Email",
                    "mailto:jananashvilidachi@gmail.com",
                    Glyph::Mail,
                    "hover:text-red-500",
                ),
                link(
                    "Facebook",
                    "https://www.facebook.com/profile.php?id=100088764846055",
                    Glyph::Facebook,
                    "hover:text-blue-600",
                ),
                link(
                    "Instagram",
                    "https://www.instagram.com/dachi_jey/",
                    Glyph::Instagram,
                    "hover:text-pink-500",
                ),
                link(
                    "GitHub",
                    "https://github.com/d-jey66",
                    Glyph::Github,
                    "hover:text-gray-300",
                ),
            ],
        }
    }
}
