/// Texture module - the external texture core

// Module declarations
pub mod texture;
pub mod transform;
pub mod attachment;
pub mod frame;
pub mod external_texture;

// Re-export everything from texture.rs
pub use texture::*;

// Re-export from other modules
pub use transform::*;
pub use attachment::*;
pub use frame::*;
pub use external_texture::*;
