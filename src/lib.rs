//! Credential and session-issuance core for the profile service
//! Registration, login, and token-gated request authorization

pub mod auth;
pub mod avatar;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod telemetry;
