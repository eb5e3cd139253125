use std::{error::Error, fmt};

/// A component value together with the index it was read from.
///
/// Index `0` is `x`, index `1` is `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentValue {
    pub value: f32,
    pub index: usize,
}

impl ComponentValue {
    #[inline]
    #[must_use]
    pub const fn new(value: f32, index: usize) -> Self {
        Self { value, index }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum VecError {
    /// A float buffer did not have room for two components at the given offset.
    BufferTooShort { needed: usize, len: usize },

    /// The process-wide math provider was already installed.
    DefaultMathInstalled,
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VecError::BufferTooShort { needed, len } => {
                write!(f, "buffer too short: need {needed} floats, got {len}")
            }
            VecError::DefaultMathInstalled => {
                write!(f, "default math provider is already installed")
            }
        }
    }
}

impl Error for VecError {}

pub type VecResult<T> = Result<T, VecError>;
