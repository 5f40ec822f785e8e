/// Attachment state machine
///
/// Governs when the producer surface is bound to a GPU texture slot. Attach
/// happens at most once per context generation (on the first refresh after
/// the context appears); detach happens exactly once before the context goes
/// away.
///
/// ```text
///   context created          refresh             context destroyed
/// ------------------> Uninitialized ---> Attached ------------------> Detached
///                           |                                           ^
///                           +-------------------------------------------+
///                                       context destroyed
/// ```
///
/// `Detached` is terminal until the next context-created notification.

use std::sync::Arc;
use crate::error::{Error, Result};
use crate::render::{GpuContext, TextureSlot};
use crate::surface::{SurfaceHandle, SurfaceProducer};

/// Attachment lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentState {
    /// Entry state of every context generation; nothing bound yet
    Uninitialized,
    /// The surface is bound to a texture slot on the current context
    Attached,
    /// The context is gone; painting is a no-op until a new one appears
    Detached,
}

/// Owns the attachment state and the GPU texture slot of one external texture
pub struct AttachmentStateMachine {
    state: AttachmentState,
    slot: Option<TextureSlot>,
    surface: SurfaceHandle,
    producer: Arc<dyn SurfaceProducer>,
}

impl AttachmentStateMachine {
    /// Create a state machine for `surface`, in the `Uninitialized` state
    pub fn new(surface: SurfaceHandle, producer: Arc<dyn SurfaceProducer>) -> Self {
        Self {
            state: AttachmentState::Uninitialized,
            slot: None,
            surface,
            producer,
        }
    }

    pub fn state(&self) -> AttachmentState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.state == AttachmentState::Attached
    }

    /// Texture slot currently owned, if any
    pub fn slot(&self) -> Option<TextureSlot> {
        self.slot
    }

    pub fn surface(&self) -> SurfaceHandle {
        self.surface
    }

    pub fn producer(&self) -> &Arc<dyn SurfaceProducer> {
        &self.producer
    }

    /// A new rendering context is available
    ///
    /// Any slot remembered from a previous generation died with its context,
    /// so it is forgotten without being deleted.
    pub fn on_context_created(&mut self) {
        if let Some(stale) = self.slot.take() {
            crate::texture_debug!(
                "xtex::Attachment",
                "{}: dropping {} from previous context generation",
                self.surface, stale
            );
        }
        self.state = AttachmentState::Uninitialized;
    }

    /// Bind the surface to `slot`
    ///
    /// On success the state becomes `Attached` and the machine owns `slot`.
    /// On failure the state is unchanged.
    pub fn attach(&mut self, slot: TextureSlot) -> Result<()> {
        debug_assert!(
            self.state != AttachmentState::Attached,
            "attach called twice in one context generation"
        );
        if !slot.is_valid() {
            return Err(Error::InvalidResource(format!(
                "{}: cannot attach to reserved {}", self.surface, slot
            )));
        }

        self.producer
            .attach_to_context(self.surface, slot)
            .map_err(Error::into_producer_error)
            .inspect_err(|e| crate::texture_error!(
                "xtex::Attachment",
                "{}: attach to {} failed: {}", self.surface, slot, e
            ))?;

        self.slot = Some(slot);
        self.state = AttachmentState::Attached;
        crate::texture_debug!("xtex::Attachment", "{} attached to {}", self.surface, slot);
        Ok(())
    }

    /// Make sure the surface is attached, allocating a slot from `gpu` if needed
    ///
    /// Returns the slot the surface is bound to. A slot allocated by an
    /// earlier failed attempt in the same generation is reused.
    pub fn ensure_attached(&mut self, gpu: &mut dyn GpuContext) -> Result<TextureSlot> {
        match (self.state, self.slot) {
            (AttachmentState::Attached, Some(slot)) => return Ok(slot),
            (AttachmentState::Attached, None) => {
                return Err(Error::InvalidResource(format!(
                    "{}: attached without a texture slot", self.surface
                )));
            }
            (AttachmentState::Detached, _) => {
                return Err(Error::InvalidResource(format!(
                    "{}: detached until the next context is created", self.surface
                )));
            }
            (AttachmentState::Uninitialized, _) => {}
        }

        let slot = match self.slot {
            Some(slot) => slot,
            None => {
                let slot = gpu.create_texture_slot().map_err(|e| crate::texture_err!(
                    "xtex::Attachment",
                    "{}: texture slot creation failed: {}", self.surface, e
                ))?;
                self.slot = Some(slot);
                slot
            }
        };

        self.attach(slot)?;
        Ok(slot)
    }

    /// Unbind the surface and release the texture slot
    ///
    /// The state is `Detached` afterwards even when the producer reports a
    /// failure; the slot is deleted regardless because its context is about
    /// to disappear.
    pub fn detach(&mut self, gpu: &mut dyn GpuContext) -> Result<()> {
        let result = self
            .producer
            .detach_from_context(self.surface)
            .map_err(Error::into_producer_error)
            .inspect_err(|e| crate::texture_error!(
                "xtex::Attachment",
                "{}: detach failed: {}", self.surface, e
            ));

        if let Some(slot) = self.slot.take() {
            gpu.delete_texture_slot(slot);
        }
        self.state = AttachmentState::Detached;
        crate::texture_debug!("xtex::Attachment", "{} detached", self.surface);
        result
    }

    /// The rendering context is about to be destroyed
    ///
    /// Detaches if attached, then forces `Detached` whatever the prior state.
    /// Returns whether a detach was performed.
    pub fn on_context_destroyed(&mut self, gpu: &mut dyn GpuContext) -> Result<bool> {
        let result = match self.state {
            AttachmentState::Attached => self.detach(gpu).map(|_| true),
            AttachmentState::Uninitialized | AttachmentState::Detached => {
                // A slot allocated by a failed attach still belongs to this context
                if let Some(slot) = self.slot.take() {
                    gpu.delete_texture_slot(slot);
                }
                Ok(false)
            }
        };
        self.state = AttachmentState::Detached;
        result
    }
}

#[cfg(test)]
#[path = "attachment_tests.rs"]
mod tests;
