//! Repository layer for data access.

pub mod entities;
mod supervisor_repository;

pub use supervisor_repository::{SupervisorRepository, SupervisorStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use supervisor_repository::MockSupervisorRepository;
