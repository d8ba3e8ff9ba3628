//! Domain layer - Core business entities.
//!
//! Plain data holders with no infrastructure dependencies. Persistence
//! lives in the supervisor service, which maps these to database records.

pub mod supervisor;
pub mod team;

pub use supervisor::Supervisor;
pub use team::Team;
