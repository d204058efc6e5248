//! Backend communication: wire types, error taxonomy, and REST helpers.

pub mod api;
pub mod error;
pub mod types;
