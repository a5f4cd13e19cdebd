use std::fmt;

/// Raised when raw numbers or bytes do not fit the layout contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractError {
    /// A uniform image had the wrong byte length.
    UniformSize { expected: usize, actual: usize },
    /// No attribute channel carries this location.
    UnknownAttributeChannel(u32),
    /// No buffer slot carries this index (includes the reserved 1..=10 gap).
    UnknownBufferSlot(u32),
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UniformSize { expected, actual } => write!(
                f,
                "transform uniform image must be {expected} bytes, got {actual}"
            ),
            Self::UnknownAttributeChannel(n) => write!(f, "unknown attribute channel {n}"),
            Self::UnknownBufferSlot(n) => write!(f, "unknown buffer slot {n}"),
        }
    }
}

impl std::error::Error for ContractError {}
