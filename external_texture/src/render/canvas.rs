/// Canvas trait - draw command sink used by paint

use std::sync::Arc;
use glam::Mat3;
use crate::error::Result;
use crate::render::{GpuImage, Rect};

/// Texel filter used when sampling the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// Mipmap filter used when sampling the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MipmapFilter {
    /// Sample level 0 only (external images have no mip chain)
    None,
    Nearest,
    Linear,
}

/// Sampling options passed through from the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplingOptions {
    pub filter: FilterMode,
    pub mipmap: MipmapFilter,
}

impl SamplingOptions {
    pub const NEAREST: Self = Self { filter: FilterMode::Nearest, mipmap: MipmapFilter::None };
    pub const LINEAR: Self = Self { filter: FilterMode::Linear, mipmap: MipmapFilter::None };
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self::LINEAR
    }
}

/// Draw the `src` region of `image` into `dst`
///
/// Sampling is strict: no texel outside `src` may bleed into the result,
/// even under linear filtering.
#[derive(Clone)]
pub struct DrawImageRect {
    /// Image to sample
    pub image: Arc<dyn GpuImage>,
    /// Source rectangle in image pixels
    pub src: Rect,
    /// Destination rectangle in canvas space
    pub dst: Rect,
    /// Image-space transform applied to the source before mapping into `dst`
    pub transform: Mat3,
    /// Sampling options
    pub sampling: SamplingOptions,
}

/// Draw command sink
pub trait Canvas {
    /// Record an image-rect draw
    fn draw_image_rect(&mut self, cmd: &DrawImageRect) -> Result<()>;
}

#[cfg(test)]
#[path = "canvas_tests.rs"]
mod tests;
