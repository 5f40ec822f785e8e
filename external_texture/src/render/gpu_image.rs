/// GpuImage trait, image info and rectangles

use crate::config::{ImageFormat, ImageOrigin};

/// Axis-aligned rectangle in canvas or image space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Rectangle from origin and size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle from left/top/right/bottom edges
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { x: left, y: top, width: right - left, height: bottom - top }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when the rectangle covers no area
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Read-only properties of a wrapped image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: ImageFormat,
    /// Row origin
    pub origin: ImageOrigin,
}

/// Immutable, shareable GPU-backed image
///
/// Implemented by backends to expose the current contents of a texture slot
/// to the canvas. The image borrows the slot; it never owns it.
pub trait GpuImage: Send + Sync {
    /// Get the read-only properties of this image
    fn info(&self) -> &ImageInfo;

    /// Full pixel rectangle of the image
    fn bounds(&self) -> Rect {
        let info = self.info();
        Rect::from_size(info.width as f32, info.height as f32)
    }
}

#[cfg(test)]
#[path = "gpu_image_tests.rs"]
mod tests;
