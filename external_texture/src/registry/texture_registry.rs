/// Texture registry - owner of all registered textures
///
/// The compositor registers one texture per external producer, forwards
/// context lifecycle events through the registry, and paints textures by id.

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::render::{GpuContext, PaintContext, Rect, SamplingOptions};
use crate::texture::Texture;

/// Registered textures keyed by id
pub struct TextureRegistry {
    textures: FxHashMap<i64, Box<dyn Texture>>,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Register a texture under its own id
    ///
    /// # Errors
    ///
    /// Returns `InvalidResource` if a texture with the same id is already registered.
    pub fn register_texture(&mut self, texture: Box<dyn Texture>) -> Result<()> {
        let id = texture.id();
        if self.textures.contains_key(&id) {
            crate::texture_error!("xtex::TextureRegistry", "Texture {} already registered", id);
            return Err(Error::InvalidResource(format!("texture {} already registered", id)));
        }

        self.textures.insert(id, texture);
        crate::texture_info!("xtex::TextureRegistry", "Registered texture {}", id);
        Ok(())
    }

    /// Unregister and drop a texture
    ///
    /// The texture is told it is being unregistered before it is dropped.
    pub fn unregister_texture(&mut self, id: i64) -> Result<()> {
        let Some(mut texture) = self.textures.remove(&id) else {
            return Err(Error::InvalidResource(format!("texture {} not registered", id)));
        };

        texture.on_texture_unregistered();
        crate::texture_info!("xtex::TextureRegistry", "Unregistered texture {}", id);
        Ok(())
    }

    pub fn get_texture(&self, id: i64) -> Option<&dyn Texture> {
        self.textures.get(&id).map(|t| &**t)
    }

    pub fn get_texture_mut(&mut self, id: i64) -> Option<&mut (dyn Texture + 'static)> {
        self.textures.get_mut(&id).map(|t| &mut **t)
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Broadcast a new rendering context to every texture
    pub fn on_context_created(&mut self) {
        for texture in self.textures.values_mut() {
            texture.on_context_created();
        }
        crate::texture_debug!(
            "xtex::TextureRegistry",
            "Context created ({} textures)", self.textures.len()
        );
    }

    /// Broadcast context teardown to every texture
    ///
    /// Every texture is notified even when an earlier one fails; the first
    /// error is returned.
    pub fn on_context_destroyed(&mut self, gpu: &mut dyn GpuContext) -> Result<()> {
        let mut first_error = None;
        for texture in self.textures.values_mut() {
            if let Err(e) = texture.on_context_destroyed(gpu) {
                first_error.get_or_insert(e);
            }
        }
        crate::texture_debug!(
            "xtex::TextureRegistry",
            "Context destroyed ({} textures)", self.textures.len()
        );

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Flag a new frame for texture `id`
    ///
    /// Returns false if no such texture is registered.
    pub fn mark_texture_frame_available(&self, id: i64) -> bool {
        match self.textures.get(&id) {
            Some(texture) => {
                texture.mark_new_frame_available();
                true
            }
            None => false,
        }
    }

    /// Paint texture `id` into `bounds`
    pub fn paint_texture(
        &mut self,
        id: i64,
        ctx: &mut PaintContext<'_>,
        bounds: Rect,
        freeze: bool,
        sampling: SamplingOptions,
    ) -> Result<()> {
        let Some(texture) = self.textures.get_mut(&id) else {
            crate::texture_warn!("xtex::TextureRegistry", "Paint requested for unknown texture {}", id);
            return Err(Error::InvalidResource(format!("texture {} not registered", id)));
        };
        texture.paint(ctx, bounds, freeze, sampling)
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "texture_registry_tests.rs"]
mod tests;
