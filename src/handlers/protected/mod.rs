// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Each area checks the caller's role itself: cases belong to agents,
// contacts to tracked persons, symptoms to everybody signed in.

pub mod cases;
pub mod contacts;
pub mod symptoms;
