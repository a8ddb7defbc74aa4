use super::*;
use crate::net::types::Place;

fn course(shared: bool, places: usize) -> Course {
    Course {
        id: "c-1".to_owned(),
        title: "Seongsu afternoon".to_owned(),
        description: "Cafes and a gallery".to_owned(),
        places: (0..places).map(|i| Place { name: format!("stop {i}"), ..Place::default() }).collect(),
        shared,
        ..Course::default()
    }
}

#[test]
fn validate_price_blank_is_free() {
    assert_eq!(validate_price(""), Ok(0));
    assert_eq!(validate_price("   "), Ok(0));
}

#[test]
fn validate_price_accepts_grouped_digits() {
    assert_eq!(validate_price(" 1,500 "), Ok(1_500));
    assert_eq!(validate_price("10000"), Ok(MAX_PRICE));
}

#[test]
fn validate_price_rejects_out_of_range_and_garbage() {
    assert_eq!(validate_price("-5"), Err("Price must be between 0 and 10,000 credits."));
    assert_eq!(validate_price("10001"), Err("Price must be between 0 and 10,000 credits."));
    assert_eq!(validate_price("12.5"), Err("Price must be a whole number of credits."));
}

#[test]
fn build_share_request_copies_course_fields() {
    let req = build_share_request(&course(false, 2), "300").unwrap();
    assert_eq!(req.course_id, "c-1");
    assert_eq!(req.price, 300);
    assert_eq!(req.description, "Cafes and a gallery");
}

#[test]
fn build_share_request_refuses_shared_or_empty_courses() {
    assert_eq!(build_share_request(&course(true, 2), "0"), Err("This course is already listed."));
    assert_eq!(build_share_request(&course(false, 0), "0"), Err("Add at least one place before sharing."));
}
