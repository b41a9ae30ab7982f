//! Authentication and authorization module

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::{extract_token, token_auth_middleware, AuthContext, AUTH_HEADER};
pub use password::PasswordHasher;
