//! View model and render model.
//!
//! `render` turns a profile plus the current `ViewState` into a `PageView`:
//! a plain tree the frontend maps one-to-one onto elements. The skills card
//! is `None` while hidden so the frontend unmounts it instead of hiding it.

use crate::profile::Profile;
use crate::types::{Glyph, Skill, SocialLink};

pub const REVEAL_LABEL: &str = "Reveal My Skills";
pub const HIDE_LABEL: &str = "Hide My Skills";

/// The only mutable state on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub skills_visible: bool,
}

impl ViewState {
    /// Flip skills visibility, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.skills_visible = !self.skills_visible;
        self.skills_visible
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.skills_visible {
            HIDE_LABEL
        } else {
            REVEAL_LABEL
        }
    }
}

// ── Render model ──

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub header: Header,
    pub about: AboutCard,
    pub skills: Option<SkillsCard>,
    pub contact: ContactCard,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutCard {
    pub title: &'static str,
    pub photo: String,
    pub name: String,
    pub intro: String,
    pub school: String,
    pub hackathons: String,
    pub outro: &'static str,
    pub badges: Vec<Badge>,
    pub toggle_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub glyph: Glyph,
    pub text: String,
    pub style: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillsCard {
    pub title: &'static str,
    pub description: &'static str,
    pub rows: Vec<SkillRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillRow {
    /// Position in the skill list; addresses this row's bar and label.
    pub index: usize,
    pub name: String,
    pub badge: String,
    pub fill_width: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactCard {
    pub title: &'static str,
    pub description: &'static str,
    pub links: Vec<LinkCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkCard {
    pub title: String,
    pub subtitle: String,
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
    pub glyph: Glyph,
    pub hover_style: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub line: String,
    pub credits: String,
}

pub fn render(profile: &Profile, state: &ViewState) -> PageView {
    PageView {
        header: Header {
            name: profile.name.clone(),
            tagline: profile.tagline.clone(),
        },
        about: render_about(profile, state),
        skills: state
            .skills_visible
            .then(|| render_skills(&profile.skills)),
        contact: ContactCard {
            title: "Let's Connect",
            description: "Feel free to reach out through any of these platforms",
            links: profile
                .social_links
                .iter()
                .map(|link| render_link(profile, link))
                .collect(),
        },
        footer: Footer {
            line: format!("{} - {}", profile.name, profile.footer_tagline),
            credits: format!("Built with {}.", profile.built_with),
        },
    }
}

fn render_about(profile: &Profile, state: &ViewState) -> AboutCard {
    AboutCard {
        title: "About Me",
        photo: profile.photo.clone(),
        name: profile.name.clone(),
        intro: format!(
            "a {}-year-old aspiring web developer currently studying at",
            profile.age
        ),
        school: profile.school.clone(),
        hackathons: format!("{} hackathon", profile.hackathons),
        outro: "and I'm passionate about becoming a professional web developer. \
                My journey in tech has just begun, but I'm excited about the possibilities ahead!",
        badges: vec![
            Badge {
                glyph: Glyph::Code,
                text: "Web Development Student".into(),
                style: "bg-gradient-to-r from-red-500 to-red-600",
            },
            Badge {
                glyph: Glyph::Target,
                text: format!("{} Hackathon Completed", profile.hackathons),
                style: "bg-gradient-to-r from-blue-500 to-blue-600",
            },
        ],
        toggle_label: state.toggle_label(),
    }
}

pub fn render_skills(skills: &[Skill]) -> SkillsCard {
    SkillsCard {
        title: "Technical Skills",
        description: "My current proficiency levels in various technologies",
        rows: skills
            .iter()
            .enumerate()
            .map(|(index, skill)| SkillRow {
                index,
                name: skill.name.clone(),
                badge: format!("{}%", skill.level),
                fill_width: format!("{}%", skill.level),
                style: skill.style.clone(),
            })
            .collect(),
    }
}

fn render_link(profile: &Profile, link: &SocialLink) -> LinkCard {
    LinkCard {
        title: link.name.clone(),
        subtitle: profile.link_subtitle(link),
        href: link.url.clone(),
        target: "_blank",
        rel: "noopener noreferrer",
        glyph: link.glyph,
        hover_style: link.hover_style.clone(),
    }
}
