//! Shared test mocks and utilities for the festival forms service.

mod repository;

pub use repository::{FailingRepository, InMemoryRepository};
