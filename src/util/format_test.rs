use super::*;

#[test]
fn short_date_strips_time_component() {
    assert_eq!(short_date("2025-11-03T09:12:44Z"), "2025-11-03");
}

#[test]
fn short_date_passes_through_bare_dates() {
    assert_eq!(short_date("2025-11-03"), "2025-11-03");
    assert_eq!(short_date(""), "");
}

#[test]
fn score_renders_one_decimal() {
    assert_eq!(score(7.0), "7.0");
    assert_eq!(score(6.55), "6.5");
    assert_eq!(score(0.0), "0.0");
}
