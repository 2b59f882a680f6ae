//! Log record structure

use super::level::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable unit of log data.
///
/// The dispatcher constructs a `Record` per accepting filter and hands it to
/// that filter's writer, which owns it until it is rendered. Nothing mutates
/// a record after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub level: Level,
    /// Free-form identifier of the caller, typically `file:line` or a module
    /// name.
    pub source: String,
    pub created: DateTime<Utc>,
    /// Fully-formatted message text, built before hand-off.
    pub message: String,
}

impl Record {
    pub fn new(level: Level, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            source: source.into(),
            created: Utc::now(),
            message: message.into(),
        }
    }

    /// Override the creation timestamp. Used by the dispatcher so every
    /// record of one fan-out shares a stamp, and by tests for fixed output.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }
}
