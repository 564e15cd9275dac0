//! Shared utilities for integration tests, built on real git repositories.

pub mod assertions;
pub mod fixtures;
pub mod repository;
