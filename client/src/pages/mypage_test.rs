use super::*;

#[test]
fn profile_rows_fill_missing_fields_with_dash() {
    let user = User { id: "u-1".to_owned(), nickname: Some("minji".to_owned()), ..User::default() };
    let rows = profile_rows(&user);
    assert_eq!(rows[0], ("Nickname", "minji".to_owned()));
    assert!(rows[1..].iter().all(|(_, v)| v == "-"));
}

#[test]
fn profile_rows_label_known_gender_values() {
    let user = User {
        id: "u-1".to_owned(),
        email: Some("minji@example.com".to_owned()),
        nickname: Some("minji".to_owned()),
        gender: Some("female".to_owned()),
        birth_year: Some(1996),
        region: Some("Busan".to_owned()),
        ..User::default()
    };
    let rows = profile_rows(&user);
    assert_eq!(
        rows,
        vec![
            ("Nickname", "minji".to_owned()),
            ("Email", "minji@example.com".to_owned()),
            ("Gender", "Female".to_owned()),
            ("Birth year", "1996".to_owned()),
            ("Region", "Busan".to_owned()),
        ]
    );
}

#[test]
fn profile_rows_hide_unknown_gender_codes() {
    let user = User { id: "u-1".to_owned(), gender: Some("x".to_owned()), ..User::default() };
    assert_eq!(profile_rows(&user)[2], ("Gender", "-".to_owned()));
}
