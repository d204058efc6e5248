//! Start page: choose a candidate source and launch the calls.
//!
//! The candidate source is either a previously uploaded CSV (its id is
//! passed through to the start request untouched) or a fresh upload,
//! which becomes the selected source once it lands. Starting without a
//! source is rejected before any request is made.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Campaign, UploadedCsv};
use crate::state::toast::ToastState;
use crate::util::format::short_date;

#[cfg(feature = "hydrate")]
fn chosen_file(input: &NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input
        .get_untracked()
        .and_then(|el| el.files())
        .and_then(|files| files.get(0))
}

#[component]
pub fn StartCampaignPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let campaign_id =
        Memo::new(move |_| params.read().get("id").and_then(|raw| raw.parse::<i64>().ok()));

    let campaign = RwSignal::new(None::<Campaign>);
    let csvs = RwSignal::new(Vec::<UploadedCsv>::new());
    let selected_csv = RwSignal::new(None::<i64>);
    let file_name = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);
    let starting = RwSignal::new(false);

    let file_input = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        let Some(id) = campaign_id.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_campaign(id).await {
                Ok(found) => campaign.set(Some(found)),
                Err(ApiError::Unauthorized | ApiError::Unavailable) => {}
                Err(err) => toasts.update(|t| t.error("Failed to load campaign", err.user_message())),
            }
            if let Ok(list) = api::fetch_uploaded_csvs().await {
                csvs.set(list.csvs);
            }
        });
    });

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            match chosen_file(&file_input).map(|file| file.name()) {
                Some(name) if name.to_lowercase().ends_with(".csv") => {
                    file_name.set(Some(name));
                    selected_csv.set(None);
                }
                Some(_) => {
                    toasts.update(|t| t.error("Invalid file", "Please choose a .csv file."));
                    if let Some(el) = file_input.get_untracked() {
                        el.set_value("");
                    }
                    file_name.set(None);
                }
                None => file_name.set(None),
            }
        }
    };

    let on_upload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if uploading.get() {
                return;
            }
            let Some(id) = campaign_id.get_untracked() else {
                return;
            };
            let Some(file) = chosen_file(&file_input) else {
                toasts.update(|t| t.error("No file chosen", "Choose a candidate CSV to upload."));
                return;
            };
            uploading.set(true);
            leptos::task::spawn_local(async move {
                match api::upload_candidates(id, file).await {
                    Ok(resp) => {
                        let detail = resp
                            .message
                            .unwrap_or_else(|| "Candidates uploaded.".to_owned());
                        toasts.update(|t| t.success("Upload complete", detail));
                        // The fresh upload becomes the selected source.
                        selected_csv.set(resp.csv_id);
                        file_name.set(None);
                        if let Some(el) = file_input.get_untracked() {
                            el.set_value("");
                        }
                        if let Ok(list) = api::fetch_uploaded_csvs().await {
                            csvs.set(list.csvs);
                        }
                    }
                    Err(err) => toasts.update(|t| t.error("Upload failed", err.user_message())),
                }
                uploading.set(false);
            });
        }
    };

    let on_start = move |_| {
        if starting.get() {
            return;
        }
        let Some(id) = campaign_id.get_untracked() else {
            return;
        };
        let Some(csv_id) = selected_csv.get_untracked() else {
            toasts.update(|t| {
                t.error(
                    "No candidates",
                    "Upload a new CSV or select a previously uploaded one.",
                );
            });
            return;
        };
        starting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::start_campaign(id, Some(csv_id)).await {
                Ok(_) => {
                    toasts.update(|t| {
                        t.success("Campaign started", "Candidates are being called now.");
                    });
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(err) => {
                    toasts.update(|t| t.error("Failed to start campaign", err.user_message()));
                }
            }
            starting.set(false);
        });
    };

    view! {
        <div class="form-page">
            <header class="form-page__header">
                <a class="btn btn--ghost" href="/dashboard">
                    "Back"
                </a>
                <div>
                    <h1>"Start Campaign"</h1>
                    <p class="form-page__subtitle">
                        {move || {
                            campaign.get().map_or_else(
                                || "Launch automated screening calls".to_owned(),
                                |c| format!("Launch screening calls for {}", c.name),
                            )
                        }}
                    </p>
                </div>
            </header>

            <div class="card form-page__form">
                <h2>"Candidate Source"</h2>

                {move || {
                    let list = csvs.get();
                    if list.is_empty() {
                        return view! {
                            <p class="csv-picker__empty">"No uploaded CSVs yet. Upload one below."</p>
                        }
                            .into_any();
                    }
                    list.into_iter()
                        .map(|csv| {
                            let UploadedCsv {
                                id, filename, uploaded_at, ..
                            } = csv;
                            let uploaded = uploaded_at
                                .map(|ts| format!("Uploaded {}", short_date(&ts)))
                                .unwrap_or_default();
                            view! {
                                <button
                                    class="csv-picker__row"
                                    class=("csv-picker__row--selected", move || {
                                        selected_csv.get() == Some(id)
                                    })
                                    on:click=move |_| {
                                        selected_csv.set(Some(id));
                                        file_name.set(None);
                                    }
                                >
                                    <span class="csv-picker__filename">{filename}</span>
                                    <span class="csv-picker__meta">{uploaded}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                <div class="csv-picker__upload">
                    <input type="file" accept=".csv" node_ref=file_input on:change=on_file_change/>
                    {move || {
                        file_name
                            .get()
                            .map(|name| view! { <p class="csv-picker__chosen">{name}</p> })
                    }}
                    <button class="btn" on:click=on_upload disabled=move || uploading.get()>
                        {move || if uploading.get() { "Uploading..." } else { "Upload CSV" }}
                    </button>
                </div>
            </div>

            <div class="form-page__actions">
                <a class="btn" href="/dashboard">
                    "Cancel"
                </a>
                <button class="btn btn--primary" on:click=on_start disabled=move || starting.get()>
                    {move || if starting.get() { "Starting..." } else { "Start Campaign" }}
                </button>
            </div>
        </div>
    }
}
