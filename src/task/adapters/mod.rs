//! Adapter implementations of the task storage ports.

pub mod memory;
