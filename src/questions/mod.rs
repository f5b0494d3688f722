//! Question bank and selection logic.

pub mod bank;
pub mod selector;

pub use bank::QuestionBank;
pub use selector::{QuestionSelector, Selection};
