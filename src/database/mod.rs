pub mod error;
pub mod manager;
pub mod memory;
pub mod models;
pub mod query_builder;
pub mod record;
pub mod repository;

pub use error::StoreError;
pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryRepository;
pub use record::{Document, Record, RecordId};
pub use repository::{PgRepository, Repository};
