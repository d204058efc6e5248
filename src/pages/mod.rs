//! Routed page components.

pub mod campaign_details;
pub mod create_campaign;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod register;
pub mod start_campaign;
