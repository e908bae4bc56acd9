//! Unit tests for the task core.
