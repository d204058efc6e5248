//! Campaign status badge.

use leptos::prelude::*;

use crate::net::types::CampaignStatus;

/// Colored label for a campaign's lifecycle status.
#[component]
pub fn StatusBadge(status: CampaignStatus) -> impl IntoView {
    view! { <span class=status.css_class()>{status.label()}</span> }
}
