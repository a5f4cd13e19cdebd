//! Host/shader layout contract.
//!
//! Everything in this module crosses the CPU/GPU boundary by position, not by
//! name. The shader side is compiled independently, so any change here is a
//! breaking change for every shader that reads these values:
//! - `TransformUniform` field order, element type and alignment
//! - the numeric value of every `AttributeChannel`
//! - the numeric value of every `BufferSlot`
//!
//! Layout is pinned at compile time in `uniform.rs`.

mod error;
mod indices;
mod uniform;

pub use error::ContractError;
pub use indices::{AttributeChannel, BufferSlot};
pub use uniform::TransformUniform;
