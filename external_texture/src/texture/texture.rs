/// Texture trait - what a texture registry sees of every registered texture

use crate::error::Result;
use crate::render::{GpuContext, PaintContext, Rect, SamplingOptions};

/// Registered texture
///
/// Context and paint notifications arrive on the render thread. Only
/// `mark_new_frame_available` may be called from elsewhere, through a
/// notifier handle owned by the implementor.
pub trait Texture: Send {
    /// Stable id assigned at registration
    fn id(&self) -> i64;

    /// A new rendering context became available
    fn on_context_created(&mut self);

    /// The rendering context is about to be destroyed
    fn on_context_destroyed(&mut self, gpu: &mut dyn GpuContext) -> Result<()>;

    /// The producer has a new frame ready
    fn mark_new_frame_available(&self);

    /// The texture is being removed from its registry
    fn on_texture_unregistered(&mut self);

    /// Draw the texture into `bounds`
    ///
    /// `freeze` keeps showing the last image even if a newer frame is pending.
    fn paint(
        &mut self,
        ctx: &mut PaintContext<'_>,
        bounds: Rect,
        freeze: bool,
        sampling: SamplingOptions,
    ) -> Result<()>;
}
