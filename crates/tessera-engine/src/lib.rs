//! Tessera engine crate.
//!
//! Host side of the tessellated text mesh example: the layout contract shared
//! with the shaders, plus the pieces that describe and feed it.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`contract`] | `TransformUniform`, `AttributeChannel`, `BufferSlot` |
//! | [`vertex`] | `MeshVertex` and its wgpu vertex layout |
//! | [`bindings`] | wgpu bind group / buffer descriptors for the uniform |
//! | [`shader`] | generated WGSL declarations |
//! | [`transform`] | projection/model-view computation |
//! | [`logging`] | logger initialization |

pub mod bindings;
pub mod contract;
pub mod logging;
pub mod shader;
pub mod transform;
pub mod vertex;

pub use contract::{AttributeChannel, BufferSlot, ContractError, TransformUniform};
pub use vertex::MeshVertex;
