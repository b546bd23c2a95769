pub mod dashboard;
pub mod home;
pub mod info;
pub mod login;
pub mod profile;
pub mod register;
