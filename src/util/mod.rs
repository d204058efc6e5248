//! Small shared utilities: token persistence, poll gating, formatting.

pub mod format;
pub mod poll;
pub mod token;
