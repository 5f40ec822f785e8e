/// Texture registry module
///
/// Owns registered textures and fans context and frame events out to them.

pub mod texture_registry;

pub use texture_registry::TextureRegistry;
