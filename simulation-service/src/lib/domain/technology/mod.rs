pub mod errors;
pub mod models;
pub mod ports;
pub mod scoring;
pub mod service;
