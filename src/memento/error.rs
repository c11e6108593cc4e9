//! Settings error types.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("brew strength must be at least 1")]
    ZeroStrength,
}
