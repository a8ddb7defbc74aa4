use super::*;

#[test]
fn credits_groups_thousands() {
    assert_eq!(credits(0), "0 C");
    assert_eq!(credits(950), "950 C");
    assert_eq!(credits(12_345), "12,345 C");
    assert_eq!(credits(1_000_000), "1,000,000 C");
    assert_eq!(credits(-2_500), "-2,500 C");
}

#[test]
fn price_shows_free_for_zero() {
    assert_eq!(price(0), "Free");
    assert_eq!(price(3_000), "3,000 C");
}

#[test]
fn stars_round_and_clamp() {
    assert_eq!(stars(4.4), "★★★★☆");
    assert_eq!(stars(4.5), "★★★★★");
    assert_eq!(stars(9.0), "★★★★★");
    assert_eq!(stars(-1.0), "☆☆☆☆☆");
    assert_eq!(stars(f64::NAN), "☆☆☆☆☆");
}

#[test]
fn rating_label_handles_no_reviews() {
    assert_eq!(rating_label(0.0, 0), "-");
    assert_eq!(rating_label(4.26, 8), "4.3 (8)");
}

#[test]
fn date_extracts_iso_day() {
    assert_eq!(date(Some("2024-05-01T10:00:00Z")), "2024-05-01");
    assert_eq!(date(Some("yesterday")), "");
    assert_eq!(date(None), "");
}
