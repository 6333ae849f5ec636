pub mod auth;
pub mod technology;
