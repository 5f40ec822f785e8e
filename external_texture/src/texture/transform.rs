/// Lookup transform normalization
///
/// Producers describe their content with a lookup transform acting on texture
/// coordinates in `[0,1]x[0,1]`: scaling the lookup by `k` shows a `1/k`
/// fraction of the source. The canvas transform acts on the image itself, as
/// if inscribed in the destination rectangle: scaling by `k` magnifies the
/// image past the rectangle. One convention is the inverse of the other, so
/// a lookup that shows 50% of the texture becomes an image transform scaling
/// by 2.

use glam::Mat3;

/// Determinants at or below this magnitude are treated as singular
///
/// Cube of 1/4096, the same nearly-zero threshold 2D canvas libraries use when
/// inverting 3x3 matrices.
pub const SINGULAR_DETERMINANT_TOLERANCE: f32 = 1.0 / (4096.0 * 4096.0 * 4096.0);

/// Invert `m`, or `None` when it is singular or not finite
pub fn try_invert(m: Mat3) -> Option<Mat3> {
    let det = m.determinant();
    if !det.is_finite() || det.abs() <= SINGULAR_DETERMINANT_TOLERANCE {
        return None;
    }
    let inverse = m.inverse();
    if inverse.is_finite() {
        Some(inverse)
    } else {
        None
    }
}

/// Convert a producer lookup transform into the canvas image-transform convention
///
/// # Panics
///
/// A singular lookup transform would corrupt every following frame, so it is
/// fatal: an ERROR entry is logged and the thread panics. There is no
/// fallback to identity or to the previous transform.
pub fn normalize_lookup_transform(lookup: Mat3) -> Mat3 {
    match try_invert(lookup) {
        Some(inverse) => inverse,
        None => crate::texture_fatal!(
            "xtex::Transform",
            "Invalid (not invertible) surface lookup transform: {:?}",
            lookup.to_cols_array()
        ),
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
