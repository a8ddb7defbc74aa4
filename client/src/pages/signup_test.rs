use super::*;

// =============================================================
// nickname
// =============================================================

#[test]
fn validate_nickname_trims_and_accepts_unicode() {
    assert_eq!(validate_nickname("  민지 "), Ok("민지".to_owned()));
    assert_eq!(validate_nickname("date_lover12"), Ok("date_lover12".to_owned()));
}

#[test]
fn validate_nickname_enforces_length_in_chars() {
    assert_eq!(validate_nickname("a"), Err("Nickname must be 2-12 characters."));
    assert_eq!(validate_nickname("abcdefghijklm"), Err("Nickname must be 2-12 characters."));
    assert!(validate_nickname("가나다라마바사아자차카타").is_ok());
}

#[test]
fn validate_nickname_rejects_inner_spaces_and_symbols() {
    assert!(validate_nickname("min ji").is_err());
    assert!(validate_nickname("minji!").is_err());
}

// =============================================================
// password
// =============================================================

#[test]
fn validate_password_checks_length_mix_and_confirmation() {
    assert_eq!(validate_password("abc123", "abc123"), Err("Password must be at least 8 characters."));
    assert_eq!(validate_password("abcdefgh", "abcdefgh"), Err("Password must mix letters and digits."));
    assert_eq!(validate_password("abcd1234", "abcd12345"), Err("Passwords do not match."));
    assert_eq!(validate_password("abcd1234", "abcd1234"), Ok(()));
}

// =============================================================
// birth year + profile update
// =============================================================

#[test]
fn validate_birth_year_blank_is_not_given() {
    assert_eq!(validate_birth_year("  ", 2026), Ok(None));
}

#[test]
fn validate_birth_year_bounds() {
    assert_eq!(validate_birth_year("1995", 2026), Ok(Some(1995)));
    assert_eq!(validate_birth_year("2012", 2026), Ok(Some(2012)));
    assert_eq!(validate_birth_year("2013", 2026), Err("Enter a valid birth year."));
    assert_eq!(validate_birth_year("1899", 2026), Err("Enter a valid birth year."));
    assert_eq!(validate_birth_year("nineteen", 2026), Err("Birth year must be a number."));
}

#[test]
fn build_profile_update_requires_nickname_and_drops_blank_choices() {
    let update = build_profile_update(" minji ", "", "", "Seoul", 2026).unwrap();
    assert_eq!(update.nickname.as_deref(), Some("minji"));
    assert_eq!(update.gender, None);
    assert_eq!(update.birth_year, None);
    assert_eq!(update.region.as_deref(), Some("Seoul"));

    assert!(build_profile_update("", "female", "1995", "Seoul", 2026).is_err());
}
