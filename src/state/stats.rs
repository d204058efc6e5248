#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::{Campaign, CampaignStatus};

/// Aggregates for the dashboard stat cards, derived from the fetched
/// campaign list on every render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CampaignStats {
    pub total: usize,
    pub running: usize,
    pub completed: usize,
    pub candidates: i64,
}

impl CampaignStats {
    pub fn from_campaigns(campaigns: &[Campaign]) -> Self {
        Self {
            total: campaigns.len(),
            running: campaigns
                .iter()
                .filter(|c| c.status == CampaignStatus::Running)
                .count(),
            completed: campaigns
                .iter()
                .filter(|c| c.status == CampaignStatus::Completed)
                .count(),
            candidates: campaigns.iter().map(|c| c.candidates_count).sum(),
        }
    }

    /// Whether any campaign is mid-run, which is what keeps the
    /// dashboard poll loop alive.
    pub fn any_running(campaigns: &[Campaign]) -> bool {
        campaigns.iter().any(|c| c.status.is_running())
    }
}
