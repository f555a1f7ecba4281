//! Error types for the step engines
//!
//! Three families, by who recovers:
//! - [`OpError`]: a rejected queue/stack operation. Narrated by the engine,
//!   which then returns to idle. Never leaves the engine as an `Err`.
//! - [`EngineError`]: a call the engine cannot honour in its current state.
//! - [`ConfigError`]: bad creation parameters, reported before anything runs.

use super::Variant;
use std::fmt;

/// A rejected structure operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    /// Key is not a number or lies outside `[0, MAX_KEY]`
    InvalidInput { text: String },

    /// Insert or push at capacity
    StructureFull { capacity: usize },

    /// Remove, pop or peek with nothing stored
    StructureEmpty,
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpError::InvalidInput { text } => write!(f, "Invalid key '{}'", text),
            OpError::StructureFull { capacity } => {
                write!(f, "Structure is full ({} items)", capacity)
            }
            OpError::StructureEmpty => write!(f, "Structure is empty"),
        }
    }
}

impl std::error::Error for OpError {}

/// Errors returned from `step` and `begin`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The algorithm already reached its final ordering
    Finished,

    /// An operation is still in progress
    Busy,

    /// The variant has no user operations
    Unsupported { variant: Variant },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Finished => write!(f, "Sort is already complete"),
            EngineError::Busy => write!(f, "Finish the current operation first"),
            EngineError::Unsupported { variant } => {
                write!(f, "{} has no insert/remove operations", variant.title())
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Bad parameters for creating a session or parsing the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidSize {
        variant: Variant,
        size: usize,
        min: usize,
        max: usize,
    },

    UnknownAlgorithm { name: String },

    InvalidArgument { arg: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSize {
                variant,
                size,
                min,
                max,
            } => {
                if min == max {
                    write!(
                        f,
                        "{} needs exactly {} cells, got {}",
                        variant.title(),
                        min,
                        size
                    )
                } else {
                    write!(
                        f,
                        "{} size must be between {} and {}, got {}",
                        variant.title(),
                        min,
                        max,
                        size
                    )
                }
            }
            ConfigError::UnknownAlgorithm { name } => {
                write!(f, "Unknown algorithm '{}'", name)
            }
            ConfigError::InvalidArgument { arg, reason } => {
                write!(f, "Invalid argument '{}': {}", arg, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
