/// Render module - collaborator traits and types on the rendering side

// Module declarations
pub mod gpu_image;
pub mod gpu_context;
pub mod canvas;

// Re-export from modules
pub use gpu_image::*;
pub use gpu_context::*;
pub use canvas::*;
