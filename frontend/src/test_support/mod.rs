#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserRecord;
    use chrono::{TimeZone, Utc};

    pub fn user(id: &str, name: &str) -> UserRecord {
        UserRecord {
            id: id.into(),
            name: name.into(),
            role: "Engineer".into(),
            status: "Active".into(),
            team: "Platform".into(),
            birthday: Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).single(),
            number: "555-0100".into(),
            email: format!("{}@example.com", name.to_lowercase()),
            homeaddress: "1 Main St".into(),
            gender: "Female".into(),
            profile_image: None,
        }
    }
}
