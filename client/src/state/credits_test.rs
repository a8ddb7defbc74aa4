use super::*;

#[test]
fn unknown_balance_allows_purchase() {
    let state = CreditsState::default();
    assert!(state.can_afford(5_000));
    assert_eq!(state.shortfall(5_000), None);
}

#[test]
fn known_balance_limits_purchase() {
    let state = CreditsState { balance: Some(1_000) };
    assert!(state.can_afford(1_000));
    assert!(!state.can_afford(1_500));
    assert_eq!(state.shortfall(1_500), Some(500));
    assert_eq!(state.shortfall(800), None);
}

#[test]
fn free_items_are_always_affordable() {
    let state = CreditsState { balance: Some(0) };
    assert!(state.can_afford(0));
    assert!(!state.can_afford(GENERATION_COST));
}
