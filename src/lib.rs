//! Taskdesk: task-management REST service.
//!
//! This crate provides a single-resource task service: clients create, list,
//! retrieve, update, and delete task records through HTTP endpoints backed by
//! an in-process store.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! # Modules
//!
//! - [`task`]: Task domain model, repository, and service layer
//! - [`http`]: Axum boundary translating requests into service calls

pub mod http;
pub mod task;
