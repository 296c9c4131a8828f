use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Upgrade,
    Planet,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upgrade => f.write_str("upgrade"),
            Self::Planet => f.write_str("planet"),
        }
    }
}

/// Why a transition left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EconomyError {
    #[error("insufficient clicks: need {cost}, have {available}")]
    InsufficientFunds { cost: f64, available: f64 },
    #[error("{kind} index {index} is out of range")]
    InvalidIndex { kind: IndexKind, index: usize },
}
