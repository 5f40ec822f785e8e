/// ExternalTexture - paints content produced by an external image surface
///
/// Composes the attachment state machine and the frame update pipeline to
/// answer "paint now": decide whether a refresh is due, run it, and draw the
/// cached image.
///
/// # Threading
///
/// Everything except frame notification runs on the render thread. The
/// producer thread only touches the pending-frame flag, an `AtomicBool` shared
/// through `FrameNotifier`. Any number of notifications between two paints
/// collapse into one refresh.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use glam::Mat3;
use crate::config::ExternalTextureConfig;
use crate::error::Result;
use crate::render::{
    DrawImageRect, GpuContext, PaintContext, Rect, SamplingOptions, TextureSlot,
};
use crate::surface::{SurfaceHandle, SurfaceProducer};
use crate::texture::{
    AttachmentState, AttachmentStateMachine, FrameSnapshot, FrameUpdatePipeline, Texture,
};

/// Cloneable handle producers use to announce new frames
///
/// Holds no reference to the texture itself, only to its pending flag.
#[derive(Debug, Clone)]
pub struct FrameNotifier {
    pending: Arc<AtomicBool>,
}

impl FrameNotifier {
    /// Flag a new frame; idempotent until the next refresh consumes it
    pub fn notify(&self) {
        self.pending.store(true, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Texture whose pixels come from an external producer surface
pub struct ExternalTexture {
    id: i64,
    config: ExternalTextureConfig,
    attachment: AttachmentStateMachine,
    pipeline: FrameUpdatePipeline,
    frame: Option<Arc<FrameSnapshot>>,
    // Last normalized transform; kept when a refresh yields no image, so it
    // can differ from a snapshot that has since been dropped
    transform: Mat3,
    pending: Arc<AtomicBool>,
}

impl ExternalTexture {
    /// Create a texture for `surface`
    ///
    /// The texture starts `Uninitialized` with no image and no pending frame.
    pub fn new(
        id: i64,
        surface: SurfaceHandle,
        producer: Arc<dyn SurfaceProducer>,
        config: ExternalTextureConfig,
    ) -> Self {
        let pipeline = FrameUpdatePipeline::new(config.image);
        Self {
            id,
            config,
            attachment: AttachmentStateMachine::new(surface, producer),
            pipeline,
            frame: None,
            transform: Mat3::IDENTITY,
            pending: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> AttachmentState {
        self.attachment.state()
    }

    pub fn surface(&self) -> SurfaceHandle {
        self.attachment.surface()
    }

    pub fn texture_slot(&self) -> Option<TextureSlot> {
        self.attachment.slot()
    }

    pub fn config(&self) -> &ExternalTextureConfig {
        &self.config
    }

    /// True once a refresh has produced an image that has not been dropped since
    pub fn has_image(&self) -> bool {
        self.frame.is_some()
    }

    /// Current frame snapshot, if any
    pub fn frame(&self) -> Option<&Arc<FrameSnapshot>> {
        self.frame.as_ref()
    }

    /// Image-space transform from the last successful refresh (identity before the first)
    ///
    /// Updated by every refresh that completes, including one where the
    /// backend could not wrap an image. Draws always use the transform stored
    /// in the snapshot they draw.
    pub fn transform(&self) -> Mat3 {
        self.transform
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Handle for producer threads
    pub fn frame_notifier(&self) -> FrameNotifier {
        FrameNotifier { pending: Arc::clone(&self.pending) }
    }

    fn label(&self) -> String {
        match &self.config.debug_name {
            Some(name) => format!("texture {} ({})", self.id, name),
            None => format!("texture {}", self.id),
        }
    }

    /// Run one refresh and swap in its result
    ///
    /// The pending flag is consumed before the refresh so a notification that
    /// arrives meanwhile stays pending; it is restored if the refresh fails.
    fn refresh(&mut self, gpu: &mut dyn GpuContext) -> Result<()> {
        let was_pending = self.pending.swap(false, Ordering::AcqRel);

        match self.pipeline.process_frame(&mut self.attachment, gpu) {
            Ok(processed) => {
                self.transform = processed.transform;
                self.frame = processed.snapshot;
                Ok(())
            }
            Err(e) => {
                if was_pending {
                    self.pending.store(true, Ordering::Release);
                }
                Err(e)
            }
        }
    }
}

impl Texture for ExternalTexture {
    fn id(&self) -> i64 {
        self.id
    }

    fn on_context_created(&mut self) {
        self.attachment.on_context_created();
        // An image left over without a destroy notification borrows a dead slot
        self.frame = None;
        crate::texture_debug!("xtex::ExternalTexture", "{}: context created", self.label());
    }

    fn on_context_destroyed(&mut self, gpu: &mut dyn GpuContext) -> Result<()> {
        let result = self.attachment.on_context_destroyed(gpu);
        // The image borrows the slot that was just released
        self.frame = None;
        crate::texture_debug!("xtex::ExternalTexture", "{}: context destroyed", self.label());
        result.map(|_| ())
    }

    fn mark_new_frame_available(&self) {
        self.pending.store(true, Ordering::Release);
    }

    fn on_texture_unregistered(&mut self) {}

    fn paint(
        &mut self,
        ctx: &mut PaintContext<'_>,
        bounds: Rect,
        freeze: bool,
        sampling: SamplingOptions,
    ) -> Result<()> {
        if self.attachment.state() == AttachmentState::Detached {
            return Ok(());
        }

        let should_refresh = (!freeze && self.has_pending_frame()) || self.frame.is_none();
        if should_refresh {
            self.refresh(ctx.gpu)?;
        }

        // Unreachable while the state machine keeps its contract: every
        // successful refresh ends Attached and a non-Detached texture with an
        // image was attached in this generation
        if self.attachment.state() != AttachmentState::Attached {
            crate::texture_fatal!(
                "xtex::ExternalTexture",
                "{}: expected Attached after refresh, found {:?}",
                self.label(), self.attachment.state()
            );
        }

        let Some(frame) = &self.frame else {
            crate::texture_warn!("xtex::ExternalTexture", "{}: no image available", self.label());
            return Ok(());
        };

        ctx.canvas.draw_image_rect(&DrawImageRect {
            image: Arc::clone(frame.image()),
            src: frame.bounds(),
            dst: bounds,
            transform: frame.transform(),
            sampling,
        })
    }
}

#[cfg(test)]
#[path = "external_texture_tests.rs"]
mod tests;
