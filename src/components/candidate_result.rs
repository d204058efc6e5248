//! Per-candidate result block for the campaign details page.

use leptos::prelude::*;

use crate::net::types::{CandidateResult, recommendation_class};
use crate::util::format::score;

/// Candidate header, aggregate scores, and the per-question transcript
/// rows with AI sub-scores and recommendation badges.
#[component]
pub fn CandidateResultCard(result: CandidateResult) -> impl IntoView {
    let total = result.total_score();
    let shortlisted = result.shortlisted;
    let CandidateResult {
        candidate,
        interviews,
        avg_communication_score,
        avg_technical_score,
        ..
    } = result;

    let shortlist_class = if shortlisted {
        "badge badge--select"
    } else {
        "badge badge--reject"
    };
    let shortlist_label = if shortlisted {
        "Shortlisted"
    } else {
        "Not Shortlisted"
    };

    view! {
        <div class="result-card">
            <div class="result-card__head">
                <div>
                    <h3 class="result-card__name">{candidate.name}</h3>
                    <p class="result-card__phone">{candidate.phone_number.unwrap_or_default()}</p>
                </div>
                <span class=shortlist_class>{shortlist_label}</span>
            </div>

            <div class="result-card__aggregates">
                <div>
                    <p class="result-card__metric-label">"Total Score"</p>
                    <p class="result-card__metric">{score(total)}</p>
                </div>
                <div>
                    <p class="result-card__metric-label">"Avg. Communication Score"</p>
                    <p class="result-card__metric">{score(avg_communication_score)}</p>
                </div>
                <div>
                    <p class="result-card__metric-label">"Avg. Technical Score"</p>
                    <p class="result-card__metric">{score(avg_technical_score)}</p>
                </div>
            </div>

            <h4 class="result-card__responses-title">"Interview Responses"</h4>
            {interviews
                .into_iter()
                .enumerate()
                .map(|(idx, interview)| {
                    let number = idx + 1;
                    let question = interview
                        .question_text
                        .clone()
                        .unwrap_or_else(|| "(question unavailable)".to_owned());
                    let transcript = interview
                        .transcript
                        .clone()
                        .unwrap_or_else(|| "No answer provided".to_owned());
                    let communication = interview.ai_score_communication.unwrap_or(0.0);
                    let technical = interview.ai_score_technical.unwrap_or(0.0);
                    let question_total = interview.total_score();
                    let recommendation = interview
                        .ai_recommendation
                        .unwrap_or_else(|| "N/A".to_owned());
                    let badge = recommendation_class(&recommendation);
                    view! {
                        <div class="interview-row">
                            <p class="interview-row__question">
                                {format!("Question {number}: {question}")}
                            </p>
                            <p class="interview-row__answer">{format!("Answer: {transcript}")}</p>
                            <div class="interview-row__scores">
                                <span>{format!("Communication: {communication}")}</span>
                                <span>{format!("Technical: {technical}")}</span>
                                <span>{format!("Total: {} points", score(question_total))}</span>
                                <span class=badge>{recommendation}</span>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
