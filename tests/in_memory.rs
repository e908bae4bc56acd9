//! In-memory service integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `task_crud_tests`: Creation, retrieval, update merging, deletion
//! - `task_listing_tests`: Filter composition and ordering

mod in_memory {
    pub mod helpers;

    mod task_crud_tests;
    mod task_listing_tests;
}
