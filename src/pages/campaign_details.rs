//! Campaign details: generated questions and per-candidate results.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::candidate_result::CandidateResultCard;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Campaign, CandidateResult, Question};
use crate::state::toast::ToastState;
use crate::util::format::short_date;

#[component]
pub fn CampaignDetailsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let campaign_id =
        Memo::new(move |_| params.read().get("id").and_then(|raw| raw.parse::<i64>().ok()));

    let campaign = RwSignal::new(None::<Campaign>);
    let results = RwSignal::new(Vec::<CandidateResult>::new());
    let questions = RwSignal::new(Vec::<Question>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let Some(id) = campaign_id.get() else {
            loading.set(false);
            return;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_results(id).await {
                Ok(resp) => {
                    campaign.set(resp.campaign);
                    results.set(resp.results);
                }
                Err(ApiError::Unauthorized | ApiError::Unavailable) => {}
                Err(err) => {
                    toasts.update(|t| t.error("Failed to load results", err.user_message()));
                }
            }
            match api::fetch_questions(id).await {
                Ok(mut resp) => {
                    resp.questions.sort_by_key(|q| q.question_order);
                    questions.set(resp.questions);
                }
                Err(ApiError::Unauthorized | ApiError::Unavailable) => {}
                Err(err) => {
                    toasts.update(|t| t.error("Failed to load questions", err.user_message()));
                }
            }
            loading.set(false);
        });
    });

    // Refresh on a fixed interval while the campaign is running; the
    // timer stops for good once the status leaves running or the page
    // unmounts. Ticks never overlap an in-flight refresh.
    #[cfg(feature = "hydrate")]
    {
        use std::cell::{Cell, RefCell};
        use std::rc::Rc;

        use crate::util::poll::{DETAILS_POLL_MS, Poller};

        let poller = Rc::new(RefCell::new(Poller::new(DETAILS_POLL_MS)));
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
                    let running = campaign
                        .get_untracked()
                        .is_some_and(|c| c.status.is_running());
                    if !running {
                        break;
                    }
                    if !poller.borrow_mut().tick(running) {
                        continue;
                    }
                    let Some(id) = campaign_id.get_untracked() else {
                        break;
                    };
                    let poller = Rc::clone(&poller);
                    leptos::task::spawn_local(async move {
                        match api::fetch_results(id).await {
                            Ok(resp) => {
                                campaign.set(resp.campaign);
                                results.set(resp.results);
                            }
                            Err(err) => log::warn!("results refresh failed: {err}"),
                        }
                        match api::fetch_questions(id).await {
                            Ok(mut resp) => {
                                resp.questions.sort_by_key(|q| q.question_order);
                                questions.set(resp.questions);
                            }
                            Err(err) => log::warn!("question refresh failed: {err}"),
                        }
                        poller.borrow_mut().settle();
                    });
                }
            });
        }
        on_cleanup(move || alive.set(false));
    }

    view! {
        <div class="details-page">
            <header class="details-page__header">
                <a class="btn btn--ghost" href="/dashboard">
                    "Back"
                </a>
                <h1>"Campaign Details"</h1>
            </header>

            {move || {
                if loading.get() {
                    return view! { <p class="details-page__loading">"Loading results..."</p> }
                        .into_any();
                }
                let Some(c) = campaign.get() else {
                    return view! {
                        <div class="card details-page__missing">
                            <h3>"Campaign not found"</h3>
                            <p>"The requested campaign does not exist."</p>
                            <a class="btn btn--primary" href="/dashboard">
                                "Back to Dashboard"
                            </a>
                        </div>
                    }
                        .into_any();
                };
                let created = c
                    .created_at
                    .map(|ts| format!("Created {}", short_date(&ts)));
                view! {
                    <div class="card details-page__campaign">
                        <div class="details-page__campaign-head">
                            <h2>{c.name}</h2>
                            <StatusBadge status=c.status/>
                        </div>
                        {created.map(|line| view! { <p class="details-page__created">{line}</p> })}
                        <p class="details-page__job">{c.job_description.unwrap_or_default()}</p>
                    </div>
                }
                    .into_any()
            }}

            <Show when=move || !loading.get() && campaign.get().is_some()>
                <div class="card details-page__questions">
                    <h2>"Interview Questions"</h2>
                    {move || {
                        let list = questions.get();
                        if list.is_empty() {
                            return view! {
                                <p class="details-page__empty">
                                    "No questions available for this campaign."
                                </p>
                            }
                                .into_any();
                        }
                        view! {
                            <ol class="details-page__question-list">
                                {list
                                    .into_iter()
                                    .map(|q| view! { <li>{q.text}</li> })
                                    .collect::<Vec<_>>()}
                            </ol>
                        }
                            .into_any()
                    }}
                </div>

                <div class="details-page__results">
                    <h2>"Candidate Results"</h2>
                    {move || {
                        let list = results.get();
                        if list.is_empty() {
                            return view! {
                                <div class="card details-page__empty">
                                    <h3>"No results yet"</h3>
                                    <p>"Candidates have not completed interviews for this campaign."</p>
                                </div>
                            }
                                .into_any();
                        }
                        list.into_iter()
                            .map(|result| view! { <CandidateResultCard result=result/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
