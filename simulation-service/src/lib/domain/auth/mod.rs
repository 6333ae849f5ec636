pub mod errors;
pub mod models;
pub mod ports;
pub mod scopes;
pub mod service;
