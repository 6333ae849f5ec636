pub mod config;
pub mod domain;
pub mod outbound;

pub use domain::technology;
pub use outbound::repositories;
