//! Campaign row for the dashboard list.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::types::{Campaign, CampaignStatus};
use crate::util::format::short_date;

/// One campaign in the dashboard list, with status badge, candidate
/// count, and the View Details / Start Campaign actions. Start is only
/// offered for drafts.
#[component]
pub fn CampaignCard(campaign: Campaign) -> impl IntoView {
    let Campaign {
        id,
        name,
        description,
        status,
        candidates_count,
        created_at,
        ..
    } = campaign;

    let details_href = format!("/campaigns/{id}");
    let start_href = format!("/campaigns/{id}/start");
    let created = created_at.map(|ts| format!("Created {}", short_date(&ts)));

    view! {
        <div class="campaign-card">
            <div class="campaign-card__info">
                <div class="campaign-card__title-row">
                    <h3 class="campaign-card__name">{name}</h3>
                    <StatusBadge status=status/>
                </div>
                <p class="campaign-card__description">
                    {description.unwrap_or_else(|| "No description".to_owned())}
                </p>
                <div class="campaign-card__meta">
                    <span>{format!("{candidates_count} candidates")}</span>
                    {created.map(|line| view! { <span>{line}</span> })}
                </div>
            </div>
            <div class="campaign-card__actions">
                <a class="btn" href=details_href>
                    "View Details"
                </a>
                <Show when=move || status == CampaignStatus::Draft>
                    <a class="btn btn--primary" href=start_href.clone()>
                        "Start Campaign"
                    </a>
                </Show>
            </div>
        </div>
    }
}
