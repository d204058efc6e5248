//! Fallback route.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1 class="not-found-page__code">"404"</h1>
            <p class="not-found-page__message">"Oops! Page not found"</p>
            <a class="btn btn--primary" href="/dashboard">
                "Return to Dashboard"
            </a>
        </div>
    }
}
