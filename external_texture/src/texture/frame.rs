/// Frame update pipeline
///
/// Pulls the producer's latest content and lookup transform into an immutable
/// `FrameSnapshot`. The snapshot (image + image-space transform) is replaced
/// wholesale after a refresh and never mutated in place.

use std::sync::Arc;
use glam::Mat3;
use crate::config::ImageDesc;
use crate::error::{Error, Result};
use crate::render::{GpuContext, GpuImage, Rect};
use crate::texture::{normalize_lookup_transform, AttachmentStateMachine};

/// Current frame of an external texture
pub struct FrameSnapshot {
    image: Arc<dyn GpuImage>,
    transform: Mat3,
}

impl FrameSnapshot {
    pub fn new(image: Arc<dyn GpuImage>, transform: Mat3) -> Self {
        Self { image, transform }
    }

    /// GPU-backed image wrapping the attached slot
    pub fn image(&self) -> &Arc<dyn GpuImage> {
        &self.image
    }

    /// Image-space transform (already inverted from the producer's lookup transform)
    pub fn transform(&self) -> Mat3 {
        self.transform
    }

    /// Full pixel rectangle of the image
    pub fn bounds(&self) -> Rect {
        self.image.bounds()
    }
}

/// Result of one refresh
pub struct ProcessedFrame {
    /// Normalized transform reported for this refresh
    pub transform: Mat3,
    /// New snapshot, or `None` when the backend could not wrap the slot
    pub snapshot: Option<Arc<FrameSnapshot>>,
}

/// Refresh steps run when a paint decides new content is due
pub struct FrameUpdatePipeline {
    image_desc: ImageDesc,
}

impl FrameUpdatePipeline {
    pub fn new(image_desc: ImageDesc) -> Self {
        Self { image_desc }
    }

    pub fn image_desc(&self) -> &ImageDesc {
        &self.image_desc
    }

    /// Attach if needed, publish the latest frame and wrap it
    ///
    /// Errors before the wrap step leave the caller's current snapshot
    /// untouched. Once wrapping starts the caller replaces its snapshot with
    /// whatever comes back, `None` included.
    ///
    /// # Panics
    ///
    /// Panics if the producer reports a singular lookup transform.
    pub fn process_frame(
        &self,
        attachment: &mut AttachmentStateMachine,
        gpu: &mut dyn GpuContext,
    ) -> Result<ProcessedFrame> {
        let slot = attachment.ensure_attached(gpu)?;

        let surface = attachment.surface();
        let producer = Arc::clone(attachment.producer());

        producer
            .update_content(surface)
            .map_err(Error::into_producer_error)
            .inspect_err(|e| crate::texture_error!(
                "xtex::FrameUpdate",
                "{}: content update failed: {}", surface, e
            ))?;

        let transform = normalize_lookup_transform(producer.lookup_transform(surface));

        let snapshot = gpu
            .wrap_texture_slot(slot, &self.image_desc)
            .map_err(|e| crate::texture_err!(
                "xtex::FrameUpdate",
                "{}: wrapping {} failed: {}", surface, slot, e
            ))?
            .map(|image| Arc::new(FrameSnapshot::new(image, transform)));

        crate::texture_trace!(
            "xtex::FrameUpdate",
            "{}: refreshed from {} (image: {})",
            surface, slot, snapshot.is_some()
        );

        Ok(ProcessedFrame { transform, snapshot })
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
