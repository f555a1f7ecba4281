//! User operations for the priority queue and stack demos

use super::constants::MAX_KEY;
use super::OpError;

/// An operation requested by the user. For the stack, `Insert` is push and
/// `Remove` is pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    New,
    /// Carries the key exactly as typed; it is validated by the first step
    Insert(String),
    Remove,
    Peek,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::New => "new",
            Operation::Insert(_) => "insert",
            Operation::Remove => "remove",
            Operation::Peek => "peek",
        }
    }
}

/// Parse a user-typed key in `[0, MAX_KEY]`
pub fn parse_key(text: &str) -> Result<i32, OpError> {
    let invalid = || OpError::InvalidInput {
        text: text.to_string(),
    };
    let key: i32 = text.trim().parse().map_err(|_| invalid())?;
    if (0..=MAX_KEY).contains(&key) {
        Ok(key)
    } else {
        Err(invalid())
    }
}

pub(crate) const IDLE_NARRATION: &str = "Press any button";
