// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Service information, health probing and token acquisition.

pub mod auth;
pub mod health;
pub mod root;

pub use auth::{login, AUTH_TOKEN_HEADER};
pub use health::health;
pub use root::root;
