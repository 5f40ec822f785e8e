/// GpuContext trait and texture slots

use std::fmt;
use std::sync::Arc;
use crate::config::ImageDesc;
use crate::error::Result;
use crate::render::{Canvas, GpuImage};

/// GPU texture name an external surface can be attached to
///
/// Slot `0` is reserved and never handed out by a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSlot(pub u32);

impl TextureSlot {
    /// Raw texture name
    pub fn name(self) -> u32 {
        self.0
    }

    /// True for any slot other than the reserved `0`
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for TextureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}

/// Current rendering context
///
/// A context lives for one generation: between a context-created and a
/// context-destroyed notification. Slots created on one generation are
/// meaningless on the next.
pub trait GpuContext {
    /// Allocate a new texture slot for an external surface
    fn create_texture_slot(&mut self) -> Result<TextureSlot>;

    /// Release a slot previously returned by `create_texture_slot`
    fn delete_texture_slot(&mut self, slot: TextureSlot);

    /// Wrap the slot's current contents as an immutable image
    ///
    /// Returns `Ok(None)` when the backend cannot borrow the slot right now
    /// (for example the producer has not published any content yet).
    fn wrap_texture_slot(
        &mut self,
        slot: TextureSlot,
        desc: &ImageDesc,
    ) -> Result<Option<Arc<dyn GpuImage>>>;
}

/// Per-paint collaborators handed to `Texture::paint`
pub struct PaintContext<'a> {
    /// Draw command sink
    pub canvas: &'a mut dyn Canvas,
    /// Current rendering context
    pub gpu: &'a mut dyn GpuContext,
}

impl<'a> PaintContext<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, gpu: &'a mut dyn GpuContext) -> Self {
        Self { canvas, gpu }
    }
}

#[cfg(test)]
#[path = "gpu_context_tests.rs"]
mod tests;
