/*!
# External Texture

A rendering-pipeline handle for pixel content produced outside the renderer.

An external texture wraps a streaming image surface (camera, video decoder,
platform view) that publishes frames on its own thread. The compositor paints
the texture every frame; the texture decides whether a refresh is due, binds
the producer's surface to a GPU texture slot when needed, pulls the newest
content and lookup transform, and issues the draw.

## Architecture

- **SurfaceProducer**: Producer-facing capability set (attach, detach, update, transform)
- **GpuContext**: Current rendering context (texture slots, image wrapping)
- **Canvas**: Draw command sink used by paint
- **AttachmentStateMachine**: Uninitialized / Attached / Detached lifecycle
- **FrameUpdatePipeline**: Pulls the latest frame into a `FrameSnapshot`
- **ExternalTexture**: Orchestrator answering "paint now"
- **TextureRegistry**: Owner dispatching context and registration events

Backends provide concrete types implementing the collaborator traits.
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod config;
pub mod render;
pub mod surface;
pub mod texture;
pub mod registry;

// Mock collaborators for tests (no GPU or platform surface required)
#[cfg(test)]
mod mock_collaborators;

// Main xtex namespace module
pub mod xtex {
    // Error types
    pub use crate::error::{Error, Result};

    // Global logger slot
    pub use crate::diagnostics::Diagnostics;

    // Configuration
    pub use crate::config::{ExternalTextureConfig, ImageDesc, ImageFormat, ImageOrigin};

    // Registry owning all textures
    pub use crate::registry::TextureRegistry;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Render-side collaborator traits and types
    pub mod render {
        pub use crate::render::*;
    }

    // Producer-facing collaborator traits and types
    pub mod surface {
        pub use crate::surface::*;
    }

    // Texture state machine, frame pipeline and orchestrator
    pub mod texture {
        pub use crate::texture::*;
    }
}

// Re-export math library at crate root
pub use glam;
