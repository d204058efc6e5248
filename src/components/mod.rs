//! Reusable view components shared across pages.

pub mod campaign_card;
pub mod candidate_result;
pub mod protected;
pub mod status_badge;
pub mod toast_host;
