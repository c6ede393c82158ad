use crate::{
    api::UserRecord,
    state::users::use_users,
    utils::format::{format_birthday, initials, short_id},
};
use leptos::*;

/// Display-ready fields of a user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub id: String,
    pub short_id: String,
    pub name: String,
    pub initials: String,
    pub image_url: Option<String>,
    pub role: String,
    pub status: String,
    pub team: String,
    pub birthday: String,
    pub number: String,
    pub email: String,
    pub homeaddress: String,
    pub gender: String,
}

impl ProfileView {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            short_id: short_id(&record.id),
            name: record.name.clone(),
            initials: initials(&record.name),
            image_url: record
                .profile_image
                .clone()
                .filter(|url| !url.trim().is_empty()),
            role: record.role.clone(),
            status: record.status.clone(),
            team: record.team.clone(),
            birthday: format_birthday(record.birthday),
            number: record.number.clone(),
            email: record.email.clone(),
            homeaddress: record.homeaddress.clone(),
            gender: record.gender.clone(),
        }
    }

    /// Label/value pairs in display order.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Role", self.role.clone()),
            ("Status", self.status.clone()),
            ("Team", self.team.clone()),
            ("Birthday", self.birthday.clone()),
            ("Phone", self.number.clone()),
            ("Email", self.email.clone()),
            ("Home address", self.homeaddress.clone()),
            ("Gender", self.gender.clone()),
        ]
    }
}

pub fn find_user<'a>(users: &'a [UserRecord], id: &str) -> Option<&'a UserRecord> {
    users.iter().find(|user| user.id == id)
}

pub fn use_user_profile(user_id: Signal<String>) -> Signal<Option<ProfileView>> {
    let users = use_users().userlgs;
    Signal::derive(move || {
        let id = user_id.get();
        users.with(|records| find_user(records, &id).map(ProfileView::from_record))
    })
}
