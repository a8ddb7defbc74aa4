//! Display formatting for credits, ratings, and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `12345` -> `"12,345 C"`.
pub fn credits(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{grouped} C")
}

/// Price label for marketplace cards.
pub fn price(amount: i64) -> String {
    if amount <= 0 { "Free".to_owned() } else { credits(amount) }
}

/// Five-star bar for an average rating, rounded to the nearest star.
pub fn stars(rating: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = if rating.is_finite() { rating.round().clamp(0.0, 5.0) as usize } else { 0 };
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Average rating with one decimal, or a dash when there are no reviews.
pub fn rating_label(rating: f64, review_count: i64) -> String {
    if review_count <= 0 {
        return "-".to_owned();
    }
    format!("{rating:.1} ({review_count})")
}

/// Date part of an ISO-8601 timestamp (`2024-05-01T10:00:00Z` -> `2024-05-01`).
pub fn date(iso: Option<&str>) -> String {
    iso.and_then(|s| s.get(..10))
        .filter(|d| d.len() == 10 && d.as_bytes()[4] == b'-' && d.as_bytes()[7] == b'-')
        .unwrap_or("")
        .to_owned()
}
