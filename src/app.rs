//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::RequireAuth;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    campaign_details::CampaignDetailsPage, create_campaign::CreateCampaignPage,
    dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage,
    register::RegisterPage, start_campaign::StartCampaignPage,
};
use crate::session;
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and notification contexts, resolves the initial
/// session state from the stored token, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    // Resolve the initial `loading` state from token presence once the
    // page tree mounts.
    Effect::new(move || session::init(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/screener-ui.css"/>
        <Title text="AI Interview Screener"/>

        <ToastHost/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("create-campaign")
                    view=|| view! { <RequireAuth><CreateCampaignPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("campaigns"), ParamSegment("id"))
                    view=|| view! { <RequireAuth><CampaignDetailsPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("campaigns"), ParamSegment("id"), StaticSegment("start"))
                    view=|| view! { <RequireAuth><StartCampaignPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
