use super::*;

#[test]
fn region_from_select_accepts_known_regions() {
    assert_eq!(region_from_select("Seoul"), Some("Seoul".to_owned()));
    assert_eq!(region_from_select(" Jeju "), Some("Jeju".to_owned()));
}

#[test]
fn region_from_select_maps_unknown_and_blank_to_all() {
    assert_eq!(region_from_select(""), None);
    assert_eq!(region_from_select("Atlantis"), None);
}
