//! Task management core.
//!
//! Implements task creation with business-rule validation, filtered and
//! sorted listing, retrieval, partial update with merge semantics, and
//! deletion. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
