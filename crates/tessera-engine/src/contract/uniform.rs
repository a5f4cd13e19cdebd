use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::ContractError;

/// Per-draw transform payload read by the vertex stage at `BufferSlot::Uniforms`.
///
/// Layout (native byte order, which is little-endian on every wgpu target;
/// column-major `f32`):
///
/// | offset | size | field |
/// |--------|------|-------|
/// | 0      | 64   | `projection_matrix` |
/// | 64     | 64   | `model_view_matrix` |
///
/// The shader reads this record by byte offset. Do not reorder or insert fields.
#[repr(C, align(16))]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TransformUniform {
    pub projection_matrix: Mat4,
    pub model_view_matrix: Mat4,
}

// `as_bytes` hands out native-endian bytes; GPUs consume little-endian.
#[cfg(target_endian = "big")]
compile_error!("TransformUniform byte images are little-endian; big-endian hosts are unsupported");

const _: () = {
    assert!(std::mem::size_of::<TransformUniform>() == 128);
    assert!(std::mem::align_of::<TransformUniform>() == 16);
    assert!(std::mem::offset_of!(TransformUniform, projection_matrix) == 0);
    assert!(std::mem::offset_of!(TransformUniform, model_view_matrix) == 64);
};

impl TransformUniform {
    /// Size of the record in bytes, as bound on the GPU.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    pub const IDENTITY: Self = Self {
        projection_matrix: Mat4::IDENTITY,
        model_view_matrix: Mat4::IDENTITY,
    };

    #[inline]
    pub const fn new(projection_matrix: Mat4, model_view_matrix: Mat4) -> Self {
        Self {
            projection_matrix,
            model_view_matrix,
        }
    }

    /// Builds a record from two column-major arrays.
    pub fn from_cols_arrays(projection: &[f32; 16], model_view: &[f32; 16]) -> Self {
        Self::new(
            Mat4::from_cols_array(projection),
            Mat4::from_cols_array(model_view),
        )
    }

    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    #[inline]
    pub fn model_view_matrix(&self) -> Mat4 {
        self.model_view_matrix
    }

    /// The exact bytes uploaded to the uniform buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Decodes a record from its byte image. `bytes` need not be aligned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ContractError> {
        bytemuck::try_pod_read_unaligned(bytes).map_err(|_| ContractError::UniformSize {
            expected: Self::SIZE,
            actual: bytes.len(),
        })
    }
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn sample_projection() -> Mat4 {
        Mat4::perspective_rh(1.1, 1.5, 0.1, 100.0)
    }

    fn sample_model_view() -> Mat4 {
        Mat4::from_translation(Vec3::new(1.0, -2.0, -8.0)) * Mat4::from_scale(Vec3::splat(0.5))
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn record_is_128_bytes() {
        assert_eq!(TransformUniform::SIZE, 128);
        assert_eq!(TransformUniform::IDENTITY.as_bytes().len(), 128);
    }

    #[test]
    fn projection_precedes_model_view() {
        let u = TransformUniform::new(Mat4::IDENTITY, Mat4::ZERO);
        let bytes = u.as_bytes();
        // First projection element is 1.0, first model-view element is 0.0.
        assert_eq!(&bytes[0..4], &1.0f32.to_le_bytes());
        assert_eq!(&bytes[64..68], &0.0f32.to_le_bytes());
    }

    #[test]
    fn matrices_are_column_major() {
        let m = Mat4::from_translation(Vec3::new(3.0, 4.0, 5.0));
        let u = TransformUniform::new(m, Mat4::IDENTITY);
        let bytes = u.as_bytes();
        // Translation lives in column 3, elements 12..15.
        assert_eq!(&bytes[48..52], &3.0f32.to_le_bytes());
        assert_eq!(&bytes[52..56], &4.0f32.to_le_bytes());
        assert_eq!(&bytes[56..60], &5.0f32.to_le_bytes());
        assert_eq!(&bytes[60..64], &1.0f32.to_le_bytes());
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn fields_read_back_unchanged() {
        let p = sample_projection();
        let mv = sample_model_view();
        let u = TransformUniform::new(p, mv);
        assert_eq!(u.projection_matrix(), p);
        assert_eq!(u.model_view_matrix(), mv);
    }

    #[test]
    fn identity_pair_reads_back_identity() {
        let u = TransformUniform::new(Mat4::IDENTITY, Mat4::IDENTITY);
        assert_eq!(u.projection_matrix(), Mat4::IDENTITY);
        assert_eq!(u.model_view_matrix(), Mat4::IDENTITY);
        assert_eq!(u, TransformUniform::default());
    }

    #[test]
    fn from_cols_arrays_matches_new() {
        let p = sample_projection();
        let mv = sample_model_view();
        let u = TransformUniform::from_cols_arrays(&p.to_cols_array(), &mv.to_cols_array());
        assert_eq!(u, TransformUniform::new(p, mv));
    }

    #[test]
    fn non_invertible_matrix_is_carried_as_is() {
        let u = TransformUniform::new(Mat4::ZERO, Mat4::ZERO);
        assert_eq!(u.projection_matrix(), Mat4::ZERO);
    }

    // ── byte image ────────────────────────────────────────────────────────

    #[test]
    fn from_bytes_restores_record() {
        let u = TransformUniform::new(sample_projection(), sample_model_view());
        // Offset by one so the slice is misaligned.
        let mut buf = vec![0u8; TransformUniform::SIZE + 1];
        buf[1..].copy_from_slice(u.as_bytes());
        assert_eq!(TransformUniform::from_bytes(&buf[1..]), Ok(u));
    }

    #[test]
    fn from_bytes_rejects_short_image() {
        let err = TransformUniform::from_bytes(&[0u8; 64]).unwrap_err();
        assert_eq!(
            err,
            ContractError::UniformSize {
                expected: 128,
                actual: 64
            }
        );
    }

    #[test]
    fn from_bytes_rejects_long_image() {
        let err = TransformUniform::from_bytes(&[0u8; 129]).unwrap_err();
        assert_eq!(
            err,
            ContractError::UniformSize {
                expected: 128,
                actual: 129
            }
        );
    }

    #[test]
    fn from_bytes_rejects_empty_image() {
        assert_eq!(
            TransformUniform::from_bytes(&[]),
            Err(ContractError::UniformSize {
                expected: 128,
                actual: 0
            })
        );
    }
}
