//! Domain model for task management.
//!
//! The task domain models task creation, partial update, and lookup while
//! keeping all infrastructure concerns outside of the domain boundary. Field
//! constraints live in validated value objects so an invalid title or
//! description cannot reach the aggregate.

mod error;
mod fields;
mod ids;
mod priority;
mod status;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use fields::{TaskDescription, TaskTitle};
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{NewTask, Task, TaskPatch};
