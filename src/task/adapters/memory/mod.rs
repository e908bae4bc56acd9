//! In-memory adapter backing the task repository port.

mod repository;

pub use repository::InMemoryTaskRepository;
