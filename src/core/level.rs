//! Log severity levels
//!
//! Levels form a total order by ordinal. The ordinals are part of the public
//! contract: the syslog writer computes wire priorities from them, so they
//! never change at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    Finest = 0,
    Fine = 1,
    Debug = 2,
    Trace = 3,
    #[default]
    Info = 4,
    Warning = 5,
    Error = 6,
    Critical = 7,
    Alert = 8,
    Emergency = 9,
}

impl Level {
    /// All levels in ascending severity order.
    pub const ALL: [Level; 10] = [
        Level::Finest,
        Level::Fine,
        Level::Debug,
        Level::Trace,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
        Level::Alert,
        Level::Emergency,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Finest => "FINEST",
            Level::Fine => "FINE",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Alert => "ALERT",
            Level::Emergency => "EMERGENCY",
        }
    }

    /// Fixed-width code used by the `%L` format placeholder.
    pub fn short_code(&self) -> &'static str {
        match self {
            Level::Finest => "FNST",
            Level::Fine => "FINE",
            Level::Debug => "DEBG",
            Level::Trace => "TRAC",
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => "EROR",
            Level::Critical => "CRIT",
            Level::Alert => "ALRT",
            Level::Emergency => "EMER",
        }
    }

    /// Stable numeric ordinal, also the syslog severity component.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FINEST" => Ok(Level::Finest),
            "FINE" => Ok(Level::Fine),
            "DEBUG" => Ok(Level::Debug),
            "TRACE" => Ok(Level::Trace),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" => Ok(Level::Critical),
            "ALERT" => Ok(Level::Alert),
            "EMERGENCY" => Ok(Level::Emergency),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
