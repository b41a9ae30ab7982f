//! Domain models and request/response DTOs

pub mod account;

pub use account::{
    Account, AccountResponse, LoginRequest, NewAccount, RegisterRequest, TokenResponse,
};
