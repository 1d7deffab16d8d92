//! handlers/mod.rs
pub mod github_handler;
