//! Individual readiness checks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which supply a check inspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckKind {
    Water,
    Beans,
    Cup,
}

impl CheckKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Beans => "beans",
            Self::Cup => "cup",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failed check and the message to show the operator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Veto {
    pub check: CheckKind,
    pub reason: String,
}

impl fmt::Display for Veto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} check failed: {}", self.check, self.reason)
    }
}

/// A pre-condition with the values it was assembled with.
///
/// Checks are pure: evaluating one twice gives the same answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Check {
    /// Passes when `level >= minimum`.
    Water { level: u32, minimum: u32 },
    /// Passes when `level >= minimum`.
    Beans { level: u32, minimum: u32 },
    /// Passes when a cup is in place.
    Cup { present: bool },
}

impl Check {
    pub fn kind(&self) -> CheckKind {
        match self {
            Self::Water { .. } => CheckKind::Water,
            Self::Beans { .. } => CheckKind::Beans,
            Self::Cup { .. } => CheckKind::Cup,
        }
    }

    pub fn evaluate(&self) -> Result<(), Veto> {
        let reason = match *self {
            Self::Water { level, minimum } if level < minimum => "please fill the water",
            Self::Beans { level, minimum } if level < minimum => "please fill the beans",
            Self::Cup { present: false } => "please place a cup",
            _ => return Ok(()),
        };

        Err(Veto {
            check: self.kind(),
            reason: reason.to_string(),
        })
    }
}
