//! Application services layering business rules over task storage.

mod tasks;

pub use tasks::{TaskDeletion, TaskService, TaskServiceError, TaskServiceResult};
