//! Profile validation errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Skill names key the rendered rows.
    #[error("duplicate skill name: {0}")]
    DuplicateSkill(String),

    #[error("duplicate social link name: {0}")]
    DuplicateLink(String),

    #[error("{0} has an empty name")]
    EmptyName(&'static str),
}
