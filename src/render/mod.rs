//! Rendering seams and renderer implementations.
//!
//! This module defines the capability contracts the text renderers consume
//! ([`Texture`], [`QuadBackend`], [`BatchBackend`]) and the two renderer
//! implementations built on them. The crate never talks to a GPU itself:
//! the host application implements the backends against whatever pipeline
//! it owns and identifies its textures through [`TextureHandle`].

mod buffered;
mod immediate;
mod renderer;

pub use buffered::BufferedFontRenderer;
pub use immediate::ImmediateFontRenderer;
pub use renderer::{AdvanceMode, FontRenderer, LayoutError};

use image::GrayImage;

/// Opaque texture identity, sufficient for a backend to resolve the actual
/// resource when a draw is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// A texture whose pixel data is already resident wherever the backend
/// needs it. Fonts only read the dimensions and carry the handle through
/// to draw submission.
pub trait Texture {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn handle(&self) -> TextureHandle;
}

/// Issues one textured-rectangle draw. Consumed by
/// [`ImmediateFontRenderer`], one call per visible glyph.
pub trait QuadBackend {
    #[allow(clippy::too_many_arguments)]
    fn tex_rect(
        &mut self,
        texture: &dyn Texture,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        u: f32,
        v: f32,
        u2: f32,
        v2: f32,
    );
}

/// Uploads and draws one interleaved triangle batch. Consumed by
/// [`BufferedFontRenderer`], exactly one call per drawn string.
pub trait BatchBackend {
    fn draw_batch(&mut self, texture: &dyn Texture, vertices: &[Vertex]);
}

impl<B: QuadBackend + ?Sized> QuadBackend for &mut B {
    fn tex_rect(
        &mut self,
        texture: &dyn Texture,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        u: f32,
        v: f32,
        u2: f32,
        v2: f32,
    ) {
        (**self).tex_rect(texture, x1, y1, x2, y2, u, v, u2, v2);
    }
}

impl<B: BatchBackend + ?Sized> BatchBackend for &mut B {
    fn draw_batch(&mut self, texture: &dyn Texture, vertices: &[Vertex]) {
        (**self).draw_batch(texture, vertices);
    }
}

/// One batch vertex: position plus texture coordinates. `Pod` so backends
/// can cast a batch straight to bytes for upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

/// CPU-resident single-channel atlas, the product of TrueType baking. Also
/// serves as a texture stand-in where no GPU is involved; callers that do
/// upload the bitmap wrap their own [`Texture`] instead.
pub struct AtlasBitmap {
    image: GrayImage,
    handle: TextureHandle,
}

impl AtlasBitmap {
    pub fn new(image: GrayImage, handle: TextureHandle) -> Self {
        Self { image, handle }
    }

    /// The coverage bitmap, one byte per texel.
    pub fn image(&self) -> &GrayImage {
        &self.image
    }
}

impl Texture for AtlasBitmap {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn handle(&self) -> TextureHandle {
        self.handle
    }
}
