//! Team domain entity.

use serde::{Deserialize, Serialize};

/// A team a supervisor can be assigned to.
///
/// Teams are owned elsewhere; the supervisor store only references them
/// by id and resolves them on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
