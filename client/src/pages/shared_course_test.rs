use super::*;

fn listing(price: i64) -> SharedCourse {
    SharedCourse { id: "s-1".to_owned(), title: "Hangang picnic".to_owned(), price, ..SharedCourse::default() }
}

fn review_by(nickname: &str) -> Review {
    Review { id: "r-1".to_owned(), author_nickname: nickname.to_owned(), rating: 4, ..Review::default() }
}

// =============================================================
// validate_review
// =============================================================

#[test]
fn validate_review_accepts_trimmed_content() {
    let req = validate_review("s-1", 5, "  Loved the sunset walk.  ").unwrap();
    assert_eq!(req.shared_course_id, "s-1");
    assert_eq!(req.rating, 5);
    assert_eq!(req.content, "Loved the sunset walk.");
}

#[test]
fn validate_review_checks_rating_range() {
    assert_eq!(validate_review("s-1", 0, "Loved the sunset walk."), Err("Pick a rating from 1 to 5 stars."));
    assert_eq!(validate_review("s-1", 6, "Loved the sunset walk."), Err("Pick a rating from 1 to 5 stars."));
}

#[test]
fn validate_review_checks_length_in_chars() {
    assert_eq!(validate_review("s-1", 3, "  too short  "), Err("Reviews need at least 10 characters."));
    assert!(validate_review("s-1", 3, &"좋".repeat(REVIEW_MIN_CHARS)).is_ok());
    assert!(validate_review("s-1", 3, &"a".repeat(REVIEW_MAX_CHARS)).is_ok());
    assert_eq!(
        validate_review("s-1", 3, &"a".repeat(REVIEW_MAX_CHARS + 1)),
        Err("Reviews are limited to 500 characters.")
    );
}

// =============================================================
// purchase_check
// =============================================================

#[test]
fn purchase_check_refuses_unlocked_courses() {
    let mut course = listing(500);
    course.purchased = true;
    assert!(purchase_check(&course, &CreditsState::default()).is_err());
    assert!(purchase_check(&listing(0), &CreditsState::default()).is_err());
}

#[test]
fn purchase_check_reports_shortfall() {
    let credits = CreditsState { balance: Some(200) };
    assert_eq!(purchase_check(&listing(500), &credits), Err("Not enough credits: 300 C more needed.".to_owned()));
    assert_eq!(purchase_check(&listing(200), &credits), Ok(()));
}

#[test]
fn purchase_check_allows_unknown_balance() {
    assert_eq!(purchase_check(&listing(500), &CreditsState::default()), Ok(()));
}

// =============================================================
// can_review
// =============================================================

#[test]
fn can_review_requires_access_and_not_author() {
    assert!(!can_review(&listing(500), &[], Some("minji")));
    let mut mine = listing(0);
    mine.is_mine = true;
    assert!(!can_review(&mine, &[], Some("minji")));
    assert!(can_review(&listing(0), &[], Some("minji")));
}

#[test]
fn can_review_once_per_user() {
    let reviews = [review_by("minji")];
    assert!(!can_review(&listing(0), &reviews, Some("minji")));
    assert!(can_review(&listing(0), &reviews, Some("junho")));
}
