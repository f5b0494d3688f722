//! Screen Assist — scripted candidate-screening interview engine.

pub mod collab;
pub mod config;
pub mod error;
pub mod questions;
pub mod session;
