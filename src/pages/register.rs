//! Registration page. A successful registration signs the user in
//! directly; no follow-up login call is made.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.is_empty() {
            toasts.update(|t| t.error("Missing fields", "Email and password are required."));
            return;
        }
        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let name_value = name_value.trim();
            let display_name = (!name_value.is_empty()).then_some(name_value);
            if session::register(auth, toasts, &email_value, &password_value, display_name).await {
                navigate("/dashboard", NavigateOptions::default());
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="card auth-page__card">
                <h1 class="auth-page__title">"Create your account"</h1>
                <p class="auth-page__subtitle">"Run AI-powered phone screens at scale"</p>
                <form class="auth-page__form" on:submit=on_submit>
                    <label class="auth-page__label">
                        "Name"
                        <input
                            class="auth-page__input"
                            type="text"
                            placeholder="Optional"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                        {move || if submitting.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-page__switch">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
