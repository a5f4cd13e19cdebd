//! WGSL declarations matching the host-side contract.
//!
//! Shaders include this prelude instead of restating the struct layout and the
//! binding/location numbers by hand. Every number below is read from the
//! contract enums.

use std::path::Path;

use anyhow::{Context, Result};

use crate::bindings::UNIFORM_BIND_GROUP;
use crate::contract::{AttributeChannel, BufferSlot};

/// WGSL type of the field carried by `channel`.
fn wgsl_type(channel: AttributeChannel) -> &'static str {
    match channel {
        AttributeChannel::Position | AttributeChannel::Normal => "vec3<f32>",
        AttributeChannel::Uv => "vec2<f32>",
    }
}

/// Generates the WGSL prelude: uniform struct, its binding, and the vertex input.
pub fn wgsl_prelude() -> String {
    let mut src = String::new();

    src.push_str("struct TransformUniform {\n");
    src.push_str("    projection_matrix: mat4x4<f32>,\n");
    src.push_str("    model_view_matrix: mat4x4<f32>,\n");
    src.push_str("};\n\n");

    src.push_str(&format!(
        "@group({}) @binding({}) var<uniform> {}: TransformUniform;\n\n",
        UNIFORM_BIND_GROUP,
        BufferSlot::Uniforms.index(),
        BufferSlot::Uniforms.name(),
    ));

    src.push_str("struct VertexInput {\n");
    for channel in AttributeChannel::ALL {
        src.push_str(&format!(
            "    @location({}) {}: {},\n",
            channel.location(),
            channel.name(),
            wgsl_type(channel),
        ));
    }
    src.push_str("};\n");

    src
}

/// Writes `wgsl_prelude()` to `path`, replacing any existing file.
pub fn write_wgsl_prelude(path: &Path) -> Result<()> {
    std::fs::write(path, wgsl_prelude())
        .with_context(|| format!("failed to write WGSL prelude to {}", path.display()))?;
    log::info!("wrote WGSL prelude to {}", path.display());
    Ok(())
}
