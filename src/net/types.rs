#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account identity returned by the auth endpoints.
///
/// Held in memory for the page's lifetime only; after a reload the
/// session is restored from token presence with a placeholder identity
/// (the backend exposes no identity endpoint).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Identity used when the backend response carries no user record.
    pub fn placeholder(email: &str) -> Self {
        Self {
            id: 0,
            email: email.to_owned(),
            name: None,
        }
    }

    /// Preferred display string: name when set, email otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Response body of `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Campaign lifecycle status. Closed set; the backend also emits the
/// `created`/`active` spellings for the first two states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    #[serde(alias = "created")]
    Draft,
    #[serde(alias = "active")]
    Running,
    Completed,
}

impl CampaignStatus {
    pub fn is_running(self) -> bool {
        self == Self::Running
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Running => "Running",
            Self::Completed => "Completed",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Draft => "badge badge--draft",
            Self::Running => "badge badge--running",
            Self::Completed => "badge badge--completed",
        }
    }
}

/// A hiring round with a job description and lifecycle status.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub candidates_count: i64,
    #[serde(default)]
    pub questions_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /campaigns` and `PUT /campaigns/{id}`.
#[derive(Clone, Debug, Serialize)]
pub struct CampaignDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub job_description: String,
}

impl CampaignDraft {
    /// Builds a draft from raw form input. Name and job description are
    /// required; callers issue no request when this fails.
    pub fn validated(
        name: &str,
        description: &str,
        job_description: &str,
    ) -> Result<Self, &'static str> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Campaign name is required.");
        }
        let job_description = job_description.trim();
        if job_description.is_empty() {
            return Err("Job description is required.");
        }
        let description = description.trim();
        Ok(Self {
            name: name.to_owned(),
            description: (!description.is_empty()).then(|| description.to_owned()),
            job_description: job_description.to_owned(),
        })
    }
}

/// AI-generated interview question, ordered within its campaign.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(default)]
    pub campaign_id: i64,
    pub text: String,
    #[serde(default)]
    pub question_order: i64,
}

/// Candidate identity parsed from an uploaded CSV.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// One answered question: transcript plus AI sub-scores and a
/// recommendation label.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Interview {
    pub id: i64,
    #[serde(default)]
    pub question_id: Option<i64>,
    #[serde(default)]
    pub question_text: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub ai_score_communication: Option<f64>,
    #[serde(default)]
    pub ai_score_technical: Option<f64>,
    #[serde(default)]
    pub ai_recommendation: Option<String>,
}

impl Interview {
    /// Combined sub-scores for this answer; missing scores count as 0.
    pub fn total_score(&self) -> f64 {
        self.ai_score_communication.unwrap_or(0.0) + self.ai_score_technical.unwrap_or(0.0)
    }
}

/// Aggregated interview outcome for one candidate.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CandidateResult {
    pub candidate: Candidate,
    #[serde(default)]
    pub interviews: Vec<Interview>,
    #[serde(default)]
    pub avg_communication_score: f64,
    #[serde(default)]
    pub avg_technical_score: f64,
    #[serde(default)]
    pub shortlisted: bool,
}

impl CandidateResult {
    /// Sum of all per-question scores across the candidate's answers.
    pub fn total_score(&self) -> f64 {
        self.interviews.iter().map(Interview::total_score).sum()
    }
}

/// A previously uploaded candidate file, reusable when starting a
/// campaign instead of re-uploading.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UploadedCsv {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub campaign_id: Option<i64>,
}

/// Body of `POST /campaigns/{id}/start`. The CSV id is forwarded
/// exactly as the backend issued it; with no id selected the body is an
/// empty object.
pub fn start_request_body(csv_id: Option<i64>) -> serde_json::Value {
    match csv_id {
        Some(csv_id) => serde_json::json!({ "csv_id": csv_id }),
        None => serde_json::json!({}),
    }
}

/// CSS class for an AI recommendation badge.
pub fn recommendation_class(recommendation: &str) -> &'static str {
    match recommendation {
        "Select" => "badge badge--select",
        "Consider" => "badge badge--consider",
        "Reject" => "badge badge--reject",
        _ => "badge",
    }
}

// =============================================================
// Response envelopes
// =============================================================

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CampaignList {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct QuestionList {
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResultsResponse {
    #[serde(default)]
    pub campaign: Option<Campaign>,
    #[serde(default)]
    pub results: Vec<CandidateResult>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CsvList {
    #[serde(default)]
    pub csvs: Vec<UploadedCsv>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub csv_id: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
