//! Vertex format of the extruded text mesh.
//!
//! One interleaved stream bound at `BufferSlot::Vertices`. Attribute locations
//! come from `AttributeChannel`, so the host layout and the shader inputs share
//! one source of numbers.

use std::mem::offset_of;

use bytemuck::{Pod, Zeroable};

use crate::contract::{AttributeChannel, BufferSlot};

/// Index type of the mesh index buffer.
pub type MeshIndex = u32;

pub const MESH_INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

const _: () = assert!(std::mem::size_of::<MeshVertex>() == 32);

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: offset_of!(MeshVertex, position) as u64,
            shader_location: AttributeChannel::Position.location(),
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: offset_of!(MeshVertex, normal) as u64,
            shader_location: AttributeChannel::Normal.location(),
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: offset_of!(MeshVertex, uv) as u64,
            shader_location: AttributeChannel::Uv.location(),
        },
    ];

    /// Buffer slot this vertex stream is bound at.
    pub const SLOT: BufferSlot = BufferSlot::Vertices;

    #[inline]
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, normal, uv }
    }

    /// Byte offset of the field delivered through `channel`.
    pub const fn attribute_offset(channel: AttributeChannel) -> u64 {
        match channel {
            AttributeChannel::Position => offset_of!(MeshVertex, position) as u64,
            AttributeChannel::Normal => offset_of!(MeshVertex, normal) as u64,
            AttributeChannel::Uv => offset_of!(MeshVertex, uv) as u64,
        }
    }

    /// Format of the field delivered through `channel`.
    pub const fn attribute_format(channel: AttributeChannel) -> wgpu::VertexFormat {
        match channel {
            AttributeChannel::Position | AttributeChannel::Normal => wgpu::VertexFormat::Float32x3,
            AttributeChannel::Uv => wgpu::VertexFormat::Float32x2,
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
