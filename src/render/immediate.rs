use crate::font::{Font, GlyphMetrics};

use super::renderer::{AdvanceMode, FontRenderer};
use super::QuadBackend;

/// Immediate mode font renderer. Issues one textured-rectangle draw per
/// visible glyph through the backend.
///
/// See [`super::BufferedFontRenderer`] for the batched implementation.
pub struct ImmediateFontRenderer<B> {
    backend: B,
    scale_x: f32,
    scale_y: f32,
    advance_mode: AdvanceMode,
}

impl<B: QuadBackend> ImmediateFontRenderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            scale_x: 1.0,
            scale_y: 1.0,
            advance_mode: AdvanceMode::default(),
        }
    }

    pub fn with_advance_mode(backend: B, advance_mode: AdvanceMode) -> Self {
        Self {
            advance_mode,
            ..Self::new(backend)
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: QuadBackend> FontRenderer for ImmediateFontRenderer<B> {
    fn draw_glyph(&mut self, font: &dyn Font, glyph: &GlyphMetrics, x: f32, y: f32) {
        let x1 = x + glyph.render_origin_x * self.scale_x;
        let y1 = y + glyph.render_origin_y * self.scale_y;
        let x2 = x1 + glyph.render_width * self.scale_x;
        let y2 = y1 + glyph.render_height * self.scale_y;

        self.backend.tex_rect(
            font.texture(),
            x1,
            y1,
            x2,
            y2,
            glyph.u,
            glyph.v,
            glyph.u2,
            glyph.v2,
        );
    }

    fn scale_x(&self) -> f32 {
        self.scale_x
    }

    fn scale_y(&self) -> f32 {
        self.scale_y
    }

    fn set_scale_x(&mut self, scale_x: f32) {
        self.scale_x = scale_x;
    }

    fn set_scale_y(&mut self, scale_y: f32) {
        self.scale_y = scale_y;
    }

    fn advance_mode(&self) -> AdvanceMode {
        self.advance_mode
    }
}
