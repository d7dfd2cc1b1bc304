pub mod chat;
pub mod home;
pub mod layout;
