//! Document processors built on the core client

pub mod catalog;
pub mod json;
