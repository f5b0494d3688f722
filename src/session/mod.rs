//! The interview dialog state machine and its supporting types.

pub mod engine;
pub mod profile;
pub mod registry;
pub mod script;
pub mod stage;
pub mod transcript;

pub use engine::{InterviewSession, SessionDeps};
pub use profile::CandidateProfile;
pub use registry::SessionRegistry;
pub use stage::Stage;
pub use transcript::{Message, Role, TracePoint, Transcript};
