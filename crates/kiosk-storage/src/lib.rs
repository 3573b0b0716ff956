pub mod memory;
pub mod mysql;

pub use kiosk_core::{ReadRepository, Repository, StorageError, UrlRecord};
pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
