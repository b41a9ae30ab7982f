//! Business logic services layer

pub mod account_service;

pub use account_service::AccountService;
