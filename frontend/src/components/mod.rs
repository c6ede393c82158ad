pub mod common;
pub mod dialog;
pub mod empty_state;
pub mod layout;
