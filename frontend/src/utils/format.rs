use chrono::{DateTime, Utc};

/// Character offset of the short display code inside a user id.
pub const SHORT_ID_OFFSET: usize = 15;
/// Length of the short display code.
pub const SHORT_ID_LEN: usize = 9;

/// Calendar date of a birthday in UTC, or an empty string when unknown.
pub fn format_birthday(birthday: Option<DateTime<Utc>>) -> String {
    birthday
        .map(|value| value.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Short display code for a user id.
///
/// Ids are expected to be 24 hex characters, which makes this the id's last
/// nine characters. Shorter ids give whatever is left after the offset.
pub fn short_id(id: &str) -> String {
    id.chars().skip(SHORT_ID_OFFSET).take(SHORT_ID_LEN).collect()
}

/// Up to two uppercase initials, used when a profile has no image.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
