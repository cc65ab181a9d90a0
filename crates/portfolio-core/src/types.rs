//! Core types — Skill, SocialLink, Glyph, animation targets.

use serde::{Deserialize, Serialize};

// ── Profile records ──

/// One proficiency bar on the skills card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage fill width. Not clamped: values above 100 overflow the track.
    pub level: u32,
    /// Gradient class token for the fill element.
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub glyph: Glyph,
    /// Hover class token.
    pub hover_style: String,
}

// ── Icons ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Serialized names match `Display`, which is also the frontend icon key.
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Mail,
    Facebook,
    Instagram,
    Github,
    ExternalLink,
    Code,
    User,
    Target,
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Glyph::Mail => write!(f, "mail"),
            Glyph::Facebook => write!(f, "facebook"),
            Glyph::Instagram => write!(f, "instagram"),
            Glyph::Github => write!(f, "github"),
            Glyph::ExternalLink => write!(f, "external-link"),
            Glyph::Code => write!(f, "code"),
            Glyph::User => write!(f, "user"),
            Glyph::Target => write!(f, "target"),
        }
    }
}

// ── Animation targets ──

/// A region of the page the effect runner can animate.
///
/// Per-skill targets are addressed by list position; the host resolves them
/// against whatever the current render pass mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    Hero,
    AboutCard,
    ContactCard,
    BackgroundPulse(usize),
    SkillsCard,
    SkillBar(usize),
    SkillLabel(usize),
}

impl Target {
    /// Element id the frontend assigns to this region.
    pub fn dom_id(&self) -> String {
        match self {
            Target::Hero => "hero".to_string(),
            Target::AboutCard => "about-card".to_string(),
            Target::ContactCard => "contact-card".to_string(),
            Target::BackgroundPulse(i) => format!("bg-pulse-{}", i + 1),
            Target::SkillsCard => "skills-card".to_string(),
            Target::SkillBar(i) => format!("skill-bar-{}", i),
            Target::SkillLabel(i) => format!("skill-label-{}", i),
        }
    }
}
