use super::*;

#[test]
fn interval_is_configurable() {
    assert_eq!(Poller::new(DASHBOARD_POLL_MS).interval_ms(), 10_000);
    assert_eq!(Poller::new(DETAILS_POLL_MS).interval_ms(), 30_000);
    assert_eq!(Poller::new(250).interval_ms(), 250);
}

#[test]
fn n_active_ticks_fire_n_fetches() {
    let mut poller = Poller::new(1_000);
    let mut fetches = 0;
    for _ in 0..5 {
        if poller.tick(true) {
            fetches += 1;
            poller.settle();
        }
    }
    assert_eq!(fetches, 5);
}

#[test]
fn ticks_stop_firing_once_status_leaves_running() {
    let mut poller = Poller::new(1_000);
    assert!(poller.tick(true));
    poller.settle();

    // Status flipped to completed: every subsequent tick is silent.
    for _ in 0..10 {
        assert!(!poller.tick(false));
    }
}

#[test]
fn slow_response_coalesces_following_ticks() {
    let mut poller = Poller::new(1_000);
    assert!(poller.tick(true));

    // Request still in flight: ticks are skipped, not queued.
    assert!(!poller.tick(true));
    assert!(!poller.tick(true));

    poller.settle();
    assert!(poller.tick(true));
}

#[test]
fn inactive_tick_does_not_mark_in_flight() {
    let mut poller = Poller::new(1_000);
    assert!(!poller.tick(false));
    // The gate is still armed for the next active tick.
    assert!(poller.tick(true));
}
