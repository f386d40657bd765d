pub mod auth;
pub mod pages;
pub mod user_profile;
