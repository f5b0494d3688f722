//! Interview stage machine — tracks which step of the intake flow is active.

use serde::{Deserialize, Serialize};

/// The stages of the screening conversation.
///
/// Progresses linearly from `Greeting` through the profile fields to
/// `TechnicalQuestions`, `WrapUp`, and `Ended`. Two shortcuts exist: the
/// tech-stack stage jumps straight to `WrapUp` when no technology is
/// recognized, and an exit phrase moves any non-greeting stage to `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Greeting,
    Name,
    Email,
    Phone,
    Experience,
    Position,
    Location,
    TechStack,
    TechnicalQuestions,
    WrapUp,
    Ended,
}

impl Stage {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: Stage) -> bool {
        use Stage::*;
        if self.next() == Some(target) {
            return true;
        }
        // Unknown-tech shortcut and the exit path.
        matches!(
            (self, target),
            (TechStack, WrapUp) | (_, Ended) if *self != Greeting && *self != Ended
        )
    }

    /// Whether this stage is terminal (the conversation is over).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended)
    }

    /// The next stage in the linear progression, if any.
    pub fn next(&self) -> Option<Stage> {
        use Stage::*;
        match self {
            Greeting => Some(Name),
            Name => Some(Email),
            Email => Some(Phone),
            Phone => Some(Experience),
            Experience => Some(Position),
            Position => Some(Location),
            Location => Some(TechStack),
            TechStack => Some(TechnicalQuestions),
            TechnicalQuestions => Some(WrapUp),
            WrapUp => Some(Ended),
            Ended => None,
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::Greeting
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Greeting => "greeting",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Experience => "experience",
            Self::Position => "position",
            Self::Location => "location",
            Self::TechStack => "tech_stack",
            Self::TechnicalQuestions => "technical_questions",
            Self::WrapUp => "wrap_up",
            Self::Ended => "ended",
        };
        write!(f, "{s}")
    }
}
