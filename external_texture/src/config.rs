/// Configuration for external textures

/// Pixel format the wrapped GPU image is declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// 8-bit RGBA, premultiplied alpha
    Rgba8Unorm,
    /// 8-bit BGRA, premultiplied alpha
    Bgra8Unorm,
}

/// Row origin of the wrapped GPU image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    TopLeft,
    BottomLeft,
}

/// Describes how a GPU texture slot is wrapped into an image
///
/// External samplers read normalized coordinates, so the declared size is
/// nominal: the default `1x1` image is stretched over the paint bounds and the
/// lookup transform selects the visible region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDesc {
    /// Declared width in pixels
    pub width: u32,
    /// Declared height in pixels
    pub height: u32,
    /// Declared pixel format
    pub format: ImageFormat,
    /// Declared row origin
    pub origin: ImageOrigin,
}

impl Default for ImageDesc {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            format: ImageFormat::Rgba8Unorm,
            origin: ImageOrigin::TopLeft,
        }
    }
}

/// Per-texture configuration supplied by the owner at registration
#[derive(Debug, Clone, Default)]
pub struct ExternalTextureConfig {
    /// Name used in diagnostics instead of the bare id
    pub debug_name: Option<String>,
    /// How the texture slot is wrapped into an image on each refresh
    pub image: ImageDesc,
}

impl ExternalTextureConfig {
    /// Set the diagnostics name
    pub fn with_debug_name(mut self, name: impl Into<String>) -> Self {
        self.debug_name = Some(name.into());
        self
    }

    /// Set the image wrapping descriptor
    pub fn with_image(mut self, image: ImageDesc) -> Self {
        self.image = image;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
