/// SurfaceProducer trait - the platform image surface as seen by the texture core
///
/// The producer owns the surface (a camera or video stream surface living on
/// the platform side). The texture core only holds a `SurfaceHandle` and
/// issues attach, detach, update and transform requests through this trait.

use std::fmt;
use glam::{Mat3, Vec3};
use crate::error::Result;
use crate::render::TextureSlot;

/// Opaque, non-owning token identifying a producer surface
///
/// Dropping a handle never releases the surface; the producer decides its
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub u64);

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Producer-facing capability set
///
/// Every call is synchronous from the texture core's point of view. Failures
/// come back through `Result`; the core never retries them.
pub trait SurfaceProducer: Send + Sync {
    /// Bind the surface's output to `slot` on the current GPU context
    fn attach_to_context(&self, surface: SurfaceHandle, slot: TextureSlot) -> Result<()>;

    /// Unbind the surface from its GPU texture slot
    fn detach_from_context(&self, surface: SurfaceHandle) -> Result<()>;

    /// Publish the most recent frame into the attached slot
    ///
    /// Idempotent when no new frame exists: the last frame stays exposed.
    fn update_content(&self, surface: SurfaceHandle) -> Result<()>;

    /// Current lookup transform in `[0,1]x[0,1]` texture-coordinate space
    fn lookup_transform(&self, surface: SurfaceHandle) -> Mat3;
}

/// Convert a platform 4x4 column-major texture matrix into a 3x3 lookup transform
///
/// Platform surfaces report a 4x4 matrix meant for coordinates of the form
/// `(s, t, 0, 1)`. The z component is always zero, so the third row and
/// column never contribute and are dropped:
///
/// ```text
/// | m[0] m[4] m[ 8] m[12] |        | m[0] m[4] m[12] |
/// | m[1] m[5] m[ 9] m[13] |   ->   | m[1] m[5] m[13] |
/// | m[2] m[6] m[10] m[14] |        | m[3] m[7] m[15] |
/// | m[3] m[7] m[11] m[15] |
/// ```
pub fn lookup_transform_from_column_major_4x4(m: &[f32; 16]) -> Mat3 {
    Mat3::from_cols(
        Vec3::new(m[0], m[1], m[3]),
        Vec3::new(m[4], m[5], m[7]),
        Vec3::new(m[12], m[13], m[15]),
    )
}

#[cfg(test)]
#[path = "surface_producer_tests.rs"]
mod tests;
