//! wgpu binding descriptors keyed off the layout contract.
//!
//! The uniform record lives in bind group `UNIFORM_BIND_GROUP` at binding
//! number `BufferSlot::Uniforms` (11). The vertex stream is set at vertex
//! buffer slot `BufferSlot::Vertices` (0).

use crate::contract::{BufferSlot, TransformUniform};

/// Bind group index holding the transform uniform.
pub const UNIFORM_BIND_GROUP: u32 = 0;

/// Slot passed to `RenderPass::set_vertex_buffer` for the mesh stream.
#[inline]
pub const fn vertex_buffer_slot() -> u32 {
    BufferSlot::Vertices.index()
}

/// Returns the `wgpu` minimum binding size for the transform uniform buffer.
///
/// The record is a fixed 128 bytes, so the size is always non-zero.
pub fn uniform_min_binding_size() -> wgpu::BufferSize {
    wgpu::BufferSize::new(TransformUniform::SIZE as u64)
        .expect("TransformUniform has non-zero size by construction")
}

pub fn uniform_layout_entry() -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: BufferSlot::Uniforms.index(),
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: Some(uniform_min_binding_size()),
        },
        count: None,
    }
}

pub fn uniform_bind_group_entry(buffer: &wgpu::Buffer) -> wgpu::BindGroupEntry<'_> {
    wgpu::BindGroupEntry {
        binding: BufferSlot::Uniforms.index(),
        resource: buffer.as_entire_binding(),
    }
}

/// Descriptor for a buffer holding exactly one `TransformUniform`, rewritten
/// each frame with `Queue::write_buffer`.
pub fn uniform_buffer_descriptor(label: Option<&str>) -> wgpu::BufferDescriptor<'_> {
    wgpu::BufferDescriptor {
        label,
        size: TransformUniform::SIZE as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    }
}
