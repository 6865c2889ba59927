#![allow(dead_code)]

use atlas_text::{
    AtlasBitmap, AtlasFont, BatchBackend, FontData, QuadBackend, Texture, TextureHandle, Vertex,
};
use image::GrayImage;

/// Backend that records every rectangle instead of drawing it.
#[derive(Default)]
pub struct RecordingQuad {
    pub rects: Vec<(TextureHandle, [f32; 8])>,
}

impl QuadBackend for RecordingQuad {
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
        self.rects
            .push((texture.handle(), [x1, y1, x2, y2, u, v, u2, v2]));
    }
}

/// Backend that records every submitted batch.
#[derive(Default)]
pub struct RecordingBatch {
    pub flushes: Vec<(TextureHandle, Vec<Vertex>)>,
}

impl BatchBackend for RecordingBatch {
    fn draw_batch(&mut self, texture: &dyn Texture, vertices: &[Vertex]) {
        self.flushes.push((texture.handle(), vertices.to_vec()));
    }
}

fn font_from_glyphs(name: &str, size: f32, glyphs: &str) -> AtlasFont<AtlasBitmap> {
    let json = format!(
        r#"{{ "name": "{name}", "size": {size}, "width": 64, "height": 64, "characters": {{ {glyphs} }} }}"#
    );
    let data = FontData::from_json(&json).expect("fixture parses");
    AtlasFont::new(
        AtlasBitmap::new(GrayImage::new(64, 64), TextureHandle(1)),
        data,
        1.0,
    )
}

/// Lowercase letters, space and sentence punctuation, every glyph a
/// zero-width box with advance 10. Both advance modes agree on it.
pub fn uniform_font() -> AtlasFont<AtlasBitmap> {
    let glyphs: String = "abcdefghijklmnopqrstuvwxyz ,.;:!?"
        .chars()
        .map(|c| {
            format!(
                r#""{c}": {{ "x": 0, "y": 0, "width": 0, "height": 8, "originX": 0.0, "originY": 8.0, "advance": 10.0 }}"#
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    font_from_glyphs("Uniform", 10.0, &glyphs)
}

/// Two glyphs whose box width and advance differ, so the two advance
/// modes measure them differently: 'x' is 4 wide with advance 6, 'y' is
/// 2 wide with advance 8.
pub fn boxy_font() -> AtlasFont<AtlasBitmap> {
    let glyphs = r#"
        "x": { "x": 0, "y": 0, "width": 4, "height": 8, "originX": 0.0, "originY": 8.0, "advance": 6.0 },
        "y": { "x": 5, "y": 0, "width": 2, "height": 8, "originX": 0.0, "originY": 8.0, "advance": 8.0 }
    "#;
    font_from_glyphs("Boxy", 10.0, glyphs)
}
