//! Transient notification banners rendered above the router.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 4_000;

/// Renders the toast queue from context.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| view! { <ToastItem toast=toast/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// One banner with a close button and an auto-dismiss timer.
#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let Toast {
        id,
        title,
        detail,
        kind,
    } = toast;

    // Re-arming on re-render is harmless: dismissal is idempotent.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        toasts.update(|t| t.dismiss(id));
    });

    view! {
        <div class=kind.css_class()>
            <div class="toast__body">
                <span class="toast__title">{title}</span>
                <span class="toast__detail">{detail}</span>
            </div>
            <button class="toast__close" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                "×"
            </button>
        </div>
    }
}
