//! Core translation engine module

pub mod client;
pub mod config;
pub mod errors;
pub mod locale;
pub mod models;
