//! Campaign creation form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::CampaignDraft;
use crate::state::toast::ToastState;

#[component]
pub fn CreateCampaignPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let job_description = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        // Invalid input never reaches the network.
        let draft = match CampaignDraft::validated(
            &name.get(),
            &description.get(),
            &job_description.get(),
        ) {
            Ok(draft) => draft,
            Err(message) => {
                toasts.update(|t| t.error("Missing fields", message));
                return;
            }
        };
        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_campaign(&draft).await {
                Ok(created) => {
                    toasts.update(|t| {
                        t.success(
                            "Campaign created",
                            "Upload candidates and start the campaign when ready.",
                        );
                    });
                    navigate(&format!("/campaigns/{}", created.id), NavigateOptions::default());
                }
                Err(err) => {
                    toasts.update(|t| t.error("Failed to create campaign", err.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="form-page">
            <header class="form-page__header">
                <a class="btn btn--ghost" href="/dashboard">
                    "Back"
                </a>
                <h1>"Create Campaign"</h1>
            </header>

            <form class="card form-page__form" on:submit=on_submit>
                <label class="form-page__label">
                    "Campaign Name"
                    <input
                        class="form-page__input"
                        type="text"
                        placeholder="e.g. Senior Rust Engineer - Q4"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-page__label">
                    "Description"
                    <input
                        class="form-page__input"
                        type="text"
                        placeholder="Optional summary for your team"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-page__label">
                    "Job Description"
                    <textarea
                        class="form-page__textarea"
                        rows="8"
                        placeholder="Paste the full job description. Interview questions are generated from it."
                        prop:value=move || job_description.get()
                        on:input=move |ev| job_description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="form-page__actions">
                    <a class="btn" href="/dashboard">
                        "Cancel"
                    </a>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating..." } else { "Create Campaign" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
