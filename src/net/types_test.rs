use super::*;

// =============================================================
// CampaignStatus
// =============================================================

#[test]
fn status_parses_canonical_spellings() {
    let draft: CampaignStatus = serde_json::from_str("\"draft\"").unwrap();
    let running: CampaignStatus = serde_json::from_str("\"running\"").unwrap();
    let completed: CampaignStatus = serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(draft, CampaignStatus::Draft);
    assert_eq!(running, CampaignStatus::Running);
    assert_eq!(completed, CampaignStatus::Completed);
}

#[test]
fn status_parses_alternate_spellings() {
    let created: CampaignStatus = serde_json::from_str("\"created\"").unwrap();
    let active: CampaignStatus = serde_json::from_str("\"active\"").unwrap();
    assert_eq!(created, CampaignStatus::Draft);
    assert_eq!(active, CampaignStatus::Running);
}

#[test]
fn status_default_is_draft() {
    assert_eq!(CampaignStatus::default(), CampaignStatus::Draft);
}

#[test]
fn only_running_status_is_running() {
    assert!(CampaignStatus::Running.is_running());
    assert!(!CampaignStatus::Draft.is_running());
    assert!(!CampaignStatus::Completed.is_running());
}

// =============================================================
// User
// =============================================================

#[test]
fn display_name_prefers_name_over_email() {
    let user = User {
        id: 7,
        email: "jo@example.com".to_owned(),
        name: Some("Jo".to_owned()),
    };
    assert_eq!(user.display_name(), "Jo");
}

#[test]
fn display_name_falls_back_to_email() {
    let user = User::placeholder("jo@example.com");
    assert_eq!(user.display_name(), "jo@example.com");
}

// =============================================================
// Campaign decoding
// =============================================================

#[test]
fn campaign_decodes_with_missing_optional_fields() {
    let campaign: Campaign =
        serde_json::from_str(r#"{"id": 3, "name": "Backend Hiring", "status": "active"}"#).unwrap();
    assert_eq!(campaign.id, 3);
    assert_eq!(campaign.status, CampaignStatus::Running);
    assert_eq!(campaign.candidates_count, 0);
    assert!(campaign.created_at.is_none());
}

#[test]
fn campaign_list_defaults_to_empty() {
    let list: CampaignList = serde_json::from_str("{}").unwrap();
    assert!(list.campaigns.is_empty());
}

#[test]
fn campaign_draft_omits_empty_description() {
    let draft = CampaignDraft {
        name: "Q4 Screening".to_owned(),
        description: None,
        job_description: "Rust engineer".to_owned(),
    };
    let body = serde_json::to_string(&draft).unwrap();
    assert!(!body.contains("description\":null"));
    assert!(body.contains("job_description"));
}

#[test]
fn draft_validation_rejects_blank_name() {
    assert!(CampaignDraft::validated("   ", "", "Rust engineer").is_err());
}

#[test]
fn draft_validation_rejects_blank_job_description() {
    assert!(CampaignDraft::validated("Q4 Screening", "", "  \n ").is_err());
}

#[test]
fn draft_validation_trims_and_drops_empty_description() {
    let draft = CampaignDraft::validated("  Q4 Screening ", "  ", " Rust engineer ").unwrap();
    assert_eq!(draft.name, "Q4 Screening");
    assert!(draft.description.is_none());
    assert_eq!(draft.job_description, "Rust engineer");
}

// =============================================================
// Scores
// =============================================================

fn interview(communication: Option<f64>, technical: Option<f64>) -> Interview {
    Interview {
        id: 1,
        question_id: None,
        question_text: None,
        transcript: None,
        ai_score_communication: communication,
        ai_score_technical: technical,
        ai_recommendation: None,
    }
}

#[test]
fn interview_total_score_treats_missing_as_zero() {
    assert_eq!(interview(Some(7.0), None).total_score(), 7.0);
    assert_eq!(interview(None, None).total_score(), 0.0);
    assert_eq!(interview(Some(6.0), Some(8.0)).total_score(), 14.0);
}

#[test]
fn candidate_total_score_sums_all_interviews() {
    let result = CandidateResult {
        candidate: Candidate {
            id: 1,
            name: "Sam".to_owned(),
            phone_number: None,
        },
        interviews: vec![interview(Some(5.0), Some(5.0)), interview(Some(3.0), None)],
        avg_communication_score: 4.0,
        avg_technical_score: 2.5,
        shortlisted: true,
    };
    assert_eq!(result.total_score(), 13.0);
}

// =============================================================
// Results envelope
// =============================================================

#[test]
fn results_decode_with_nested_candidate() {
    let body = r#"{
        "campaign": {"id": 1, "name": "Support", "status": "running"},
        "results": [{
            "candidate": {"id": 9, "name": "Ada", "phone_number": "+15550001111"},
            "interviews": [],
            "avg_communication_score": 6.5,
            "avg_technical_score": 7.0,
            "shortlisted": true
        }]
    }"#;
    let resp: ResultsResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.campaign.unwrap().status, CampaignStatus::Running);
    assert_eq!(resp.results.len(), 1);
    assert!(resp.results[0].shortlisted);
}

#[test]
fn start_body_forwards_csv_id_untouched() {
    let body = start_request_body(Some(42));
    assert_eq!(body, serde_json::json!({ "csv_id": 42 }));
}

#[test]
fn start_body_without_csv_id_is_empty() {
    assert_eq!(start_request_body(None), serde_json::json!({}));
}

#[test]
fn csv_list_round_trips_ids_untouched() {
    let body = r#"{"csvs": [{"id": 42, "filename": "candidates.csv", "user_id": 1}]}"#;
    let list: CsvList = serde_json::from_str(body).unwrap();
    assert_eq!(list.csvs[0].id, 42);
    assert!(list.csvs[0].campaign_id.is_none());
}

// =============================================================
// Recommendation badges
// =============================================================

#[test]
fn recommendation_classes_cover_known_labels() {
    assert_eq!(recommendation_class("Select"), "badge badge--select");
    assert_eq!(recommendation_class("Consider"), "badge badge--consider");
    assert_eq!(recommendation_class("Reject"), "badge badge--reject");
    assert_eq!(recommendation_class("???"), "badge");
}
