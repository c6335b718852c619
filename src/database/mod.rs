pub mod memory;
pub mod postgres;
pub mod seed;
pub mod store;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use seed::DataInitializer;
pub use store::{Store, StoreError};
