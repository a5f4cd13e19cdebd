use std::fmt;

use super::ContractError;

/// Per-vertex input slot.
///
/// The discriminant is the shader `@location` and the `shader_location` of the
/// host vertex layout. Values are zero-based and contiguous.
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AttributeChannel {
    Position = 0,
    Normal = 1,
    Uv = 2,
}

impl AttributeChannel {
    /// All channels in slot order.
    pub const ALL: [AttributeChannel; 3] = [Self::Position, Self::Normal, Self::Uv];

    #[inline]
    pub const fn location(self) -> u32 {
        self as u32
    }

    /// Shader-side field name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Normal => "normal",
            Self::Uv => "uv",
        }
    }
}

impl TryFrom<u32> for AttributeChannel {
    type Error = ContractError;

    fn try_from(location: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.location() == location)
            .ok_or(ContractError::UnknownAttributeChannel(location))
    }
}

impl fmt::Display for AttributeChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Binding point a buffer occupies when attached to the pipeline.
///
/// Indices 1..=10 are left free for per-attribute vertex streams. Do not
/// compact the numbering; shaders bind the uniform record at 11.
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BufferSlot {
    Vertices = 0,
    Uniforms = 11,
}

impl BufferSlot {
    pub const ALL: [BufferSlot; 2] = [Self::Vertices, Self::Uniforms];

    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Vertices => "vertices",
            Self::Uniforms => "uniforms",
        }
    }
}

impl TryFrom<u32> for BufferSlot {
    type Error = ContractError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.index() == index)
            .ok_or(ContractError::UnknownBufferSlot(index))
    }
}

impl fmt::Display for BufferSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
