//! REST helpers for communicating with the screening backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the
//! bearer token attached to every request that has one stored.
//! Server-side (SSR) and host tests: stubs returning
//! [`ApiError::Unavailable`] since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 from any endpoint purges the stored token and forces
//! navigation to `/login` before the error surfaces, so the next render
//! re-enters the unauthenticated state. Other failures map onto
//! [`ApiError`] and are surfaced by the calling page as one
//! notification. Calls are fire-once: no retries, no deduplication.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::UploadResponse;
use super::types::{
    AuthResponse, Campaign, CampaignDraft, CampaignList, CsvList, MessageResponse, QuestionList,
    ResultsResponse,
};
use crate::util::token;

/// Base path of the backend REST API, served same-origin behind the
/// reverse proxy.
pub const API_BASE: &str = "/api";

/// Join an endpoint path onto the API base.
pub fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Drop the session after an authentication failure: clear the stored
/// token and (in the browser) force navigation to the login route.
pub fn purge_session() {
    token::clear();
    #[cfg(feature = "hydrate")]
    {
        log::warn!("authentication failed, purging session and returning to login");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

// =============================================================
// Request plumbing (browser build)
// =============================================================

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match token::get() {
        Some(tok) => builder.header("Authorization", &token::auth_header_value(&tok)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn handle<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if resp.status() == 401 {
        purge_session();
        return Err(ApiError::Unauthorized);
    }
    if !resp.ok() {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }
        let message = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message);
        return Err(ApiError::from_status(resp.status(), message));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = with_auth(gloo_net::http::Request::get(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let req = with_auth(gloo_net::http::Request::post(&url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = with_auth(gloo_net::http::Request::post(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle(resp).await
}

#[cfg(feature = "hydrate")]
async fn put_json<T: DeserializeOwned, B: serde::Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let req = with_auth(gloo_net::http::Request::put(&url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle(resp).await
}

#[cfg(feature = "hydrate")]
async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = with_auth(gloo_net::http::Request::delete(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle(resp).await
}

// =============================================================
// Auth endpoints
// =============================================================

/// Create an account via `POST /api/auth/register`.
///
/// A token in the response authenticates the session directly; there is
/// no follow-up login call.
pub async fn register(
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/auth/register",
            &serde_json::json!({ "email": email, "password": password, "name": name }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, name);
        Err(ApiError::Unavailable)
    }
}

/// Obtain a session token via `POST /api/auth/login`.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/auth/login",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the session via `POST /api/auth/logout`. Best-effort:
/// callers clear local state regardless of the outcome.
pub async fn logout() -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_empty("/auth/logout").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Campaign endpoints
// =============================================================

/// List the user's campaigns via `GET /api/campaigns`.
pub async fn fetch_campaigns() -> Result<CampaignList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/campaigns").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a campaign via `POST /api/campaigns`. The backend generates
/// interview questions from the job description.
pub async fn create_campaign(draft: &CampaignDraft) -> Result<Campaign, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/campaigns", draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one campaign via `GET /api/campaigns/{id}`.
pub async fn fetch_campaign(campaign_id: i64) -> Result<Campaign, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/campaigns/{campaign_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = campaign_id;
        Err(ApiError::Unavailable)
    }
}

/// Update a campaign via `PUT /api/campaigns/{id}`.
pub async fn update_campaign(
    campaign_id: i64,
    draft: &CampaignDraft,
) -> Result<Campaign, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        put_json(&format!("/campaigns/{campaign_id}"), draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (campaign_id, draft);
        Err(ApiError::Unavailable)
    }
}

/// Delete a campaign via `DELETE /api/campaigns/{id}`.
pub async fn delete_campaign(campaign_id: i64) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete_json(&format!("/campaigns/{campaign_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = campaign_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the ordered question list via `GET /api/campaigns/{id}/questions`.
pub async fn fetch_questions(campaign_id: i64) -> Result<QuestionList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/campaigns/{campaign_id}/questions")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = campaign_id;
        Err(ApiError::Unavailable)
    }
}

/// Upload a candidate CSV via `POST /api/campaigns/{id}/candidates`
/// (multipart, field name `file`). Browser build only: the payload is a
/// DOM `File` picked by the user.
#[cfg(feature = "hydrate")]
pub async fn upload_candidates(
    campaign_id: i64,
    file: web_sys::File,
) -> Result<UploadResponse, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".to_owned()))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;

    let req = with_auth(gloo_net::http::Request::post(&url(&format!(
        "/campaigns/{campaign_id}/candidates"
    ))))
    .body(form)
    .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle(resp).await
}

/// Start a campaign via `POST /api/campaigns/{id}/start`. Passing
/// `csv_id` reuses a previously uploaded candidate file; the id is
/// forwarded exactly as the backend issued it.
pub async fn start_campaign(
    campaign_id: i64,
    csv_id: Option<i64>,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::start_request_body(csv_id);
        post_json(&format!("/campaigns/{campaign_id}/start"), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (campaign_id, csv_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch campaign results via `GET /api/campaigns/{id}/results`.
pub async fn fetch_results(campaign_id: i64) -> Result<ResultsResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/campaigns/{campaign_id}/results")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = campaign_id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Uploaded file endpoints
// =============================================================

/// List previously uploaded candidate files via `GET /api/csvs`.
pub async fn fetch_uploaded_csvs() -> Result<CsvList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/csvs").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
