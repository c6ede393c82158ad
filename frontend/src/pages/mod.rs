pub mod directory;
pub mod forgot_password;
pub mod user_profile;
