// handlers/public/auth/mod.rs - Token acquisition

pub mod login; // POST /api/login - authenticate and get JWT

pub use login::{login, AUTH_TOKEN_HEADER};
