use super::*;

fn campaign(id: i64, status: CampaignStatus, candidates: i64) -> Campaign {
    Campaign {
        id,
        name: format!("campaign-{id}"),
        description: None,
        job_description: None,
        status,
        candidates_count: candidates,
        questions_count: 0,
        created_at: None,
    }
}

#[test]
fn empty_list_produces_zeroed_stats() {
    assert_eq!(CampaignStats::from_campaigns(&[]), CampaignStats::default());
}

#[test]
fn stats_count_by_status_and_sum_candidates() {
    let campaigns = vec![
        campaign(1, CampaignStatus::Draft, 3),
        campaign(2, CampaignStatus::Running, 12),
        campaign(3, CampaignStatus::Running, 5),
        campaign(4, CampaignStatus::Completed, 20),
    ];
    let stats = CampaignStats::from_campaigns(&campaigns);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.running, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.candidates, 40);
}

#[test]
fn any_running_tracks_poll_condition() {
    let mut campaigns = vec![campaign(1, CampaignStatus::Draft, 0)];
    assert!(!CampaignStats::any_running(&campaigns));

    campaigns.push(campaign(2, CampaignStatus::Running, 1));
    assert!(CampaignStats::any_running(&campaigns));

    campaigns[1].status = CampaignStatus::Completed;
    assert!(!CampaignStats::any_running(&campaigns));
}
