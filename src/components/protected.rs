//! Route guard for authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Wraps a routed page that requires a session.
///
/// While the session is still resolving, renders a neutral placeholder;
/// once resolved without a user, redirects to `/login`. The originally
/// requested path is discarded.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| view! { <div class="route-guard__loading">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}
