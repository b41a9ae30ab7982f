//! HTTP handlers

pub mod accounts;
pub mod health;
pub mod sessions;
