//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.is_empty() {
            toasts.update(|t| t.error("Missing fields", "Email and password are required."));
            return;
        }
        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if session::login(auth, toasts, &email_value, &password_value).await {
                navigate("/dashboard", NavigateOptions::default());
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="card auth-page__card">
                <h1 class="auth-page__title">"AI Interview Screener"</h1>
                <p class="auth-page__subtitle">"Sign in to manage your screening campaigns"</p>
                <form class="auth-page__form" on:submit=on_submit>
                    <label class="auth-page__label">
                        "Email"
                        <input
                            class="auth-page__input"
                            type="email"
                            placeholder="you@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-page__label">
                        "Password"
                        <input
                            class="auth-page__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-page__switch">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
