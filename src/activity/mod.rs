//! Gameplay entry points: lessons, practice, timed challenges, and the
//! lives shop. Each operation reads the profile, applies the progression
//! rules, persists through one transaction, then hands off to the
//! reconciler for derived state and awards.

pub mod challenge;
pub mod content;
pub mod lesson;
pub mod practice;
pub mod shop;

/// One answered exercise as reported by the client surface.
#[derive(Debug, Clone, Copy)]
pub struct AnswerRecord {
    pub correct: bool,
    pub time_taken_secs: u32,
}
