//! Dashboard: summary stats and the campaign list.

use leptos::prelude::*;

use crate::components::campaign_card::CampaignCard;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::Campaign;
use crate::session;
use crate::state::auth::AuthState;
use crate::state::stats::CampaignStats;
use crate::state::toast::ToastState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let campaigns = RwSignal::new(Vec::<Campaign>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::fetch_campaigns().await {
                Ok(list) => campaigns.set(list.campaigns),
                // 401 already purged the session; the host stub has no data.
                Err(ApiError::Unauthorized | ApiError::Unavailable) => {}
                Err(err) => {
                    toasts.update(|t| t.error("Failed to load campaigns", err.user_message()));
                }
            }
            loading.set(false);
        });
    });

    // Refresh on a fixed interval while any campaign is running. The
    // timer stops for good once nothing is running or the page unmounts,
    // and a slow response is never stacked behind a second request.
    #[cfg(feature = "hydrate")]
    {
        use std::cell::{Cell, RefCell};
        use std::rc::Rc;

        use crate::util::poll::{DASHBOARD_POLL_MS, Poller};

        let poller = Rc::new(RefCell::new(Poller::new(DASHBOARD_POLL_MS)));
        let alive = Rc::new(Cell::new(true));
        {
            let poller = Rc::clone(&poller);
            let alive = Rc::clone(&alive);
            leptos::task::spawn_local(async move {
                loop {
                    let interval = poller.borrow().interval_ms();
                    gloo_timers::future::TimeoutFuture::new(interval).await;
                    if !alive.get() {
                        break;
                    }
                    let active = CampaignStats::any_running(&campaigns.get_untracked());
                    if !active {
                        break;
                    }
                    if !poller.borrow_mut().tick(active) {
                        continue;
                    }
                    let poller = Rc::clone(&poller);
                    leptos::task::spawn_local(async move {
                        match api::fetch_campaigns().await {
                            Ok(list) => campaigns.set(list.campaigns),
                            Err(err) => log::warn!("campaign list refresh failed: {err}"),
                        }
                        poller.borrow_mut().settle();
                    });
                }
            });
        }
        on_cleanup(move || alive.set(false));
    }

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            session::logout(auth, toasts).await;
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="dashboard-page__welcome">
                        {move || {
                            auth.get().user.map_or_else(
                                || "Welcome back".to_owned(),
                                |user| format!("Welcome back, {}", user.display_name()),
                            )
                        }}
                    </p>
                </div>
                <div class="dashboard-page__actions">
                    <a class="btn btn--primary" href="/create-campaign">
                        "New Campaign"
                    </a>
                    <button class="btn" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            {move || {
                let stats = CampaignStats::from_campaigns(&campaigns.get());
                view! {
                    <div class="dashboard-page__stats">
                        <div class="card stat-card">
                            <p class="stat-card__label">"Total Campaigns"</p>
                            <p class="stat-card__value">{stats.total}</p>
                        </div>
                        <div class="card stat-card">
                            <p class="stat-card__label">"Running"</p>
                            <p class="stat-card__value">{stats.running}</p>
                        </div>
                        <div class="card stat-card">
                            <p class="stat-card__label">"Completed"</p>
                            <p class="stat-card__value">{stats.completed}</p>
                        </div>
                        <div class="card stat-card">
                            <p class="stat-card__label">"Candidates"</p>
                            <p class="stat-card__value">{stats.candidates}</p>
                        </div>
                    </div>
                }
            }}

            <section class="dashboard-page__campaigns">
                <h2>"Your Campaigns"</h2>
                {move || {
                    if loading.get() {
                        return view! { <p class="dashboard-page__loading">"Loading campaigns..."</p> }
                            .into_any();
                    }
                    let list = campaigns.get();
                    if list.is_empty() {
                        return view! {
                            <div class="card dashboard-page__empty">
                                <h3>"No campaigns yet"</h3>
                                <p>"Create your first campaign to start screening candidates."</p>
                                <a class="btn btn--primary" href="/create-campaign">
                                    "Create Campaign"
                                </a>
                            </div>
                        }
                            .into_any();
                    }
                    list.into_iter()
                        .map(|campaign| view! { <CampaignCard campaign=campaign/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </section>
        </div>
    }
}
