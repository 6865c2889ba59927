use std::collections::HashMap;

use log::{debug, warn};

use super::data::FontData;
use super::glyph::GlyphMetrics;
use super::Font;
use crate::render::Texture;

/// Font backed by a pre-baked atlas. The texture is supplied by the caller
/// and only referenced; this type never creates or uploads pixels.
///
/// Construction normalizes every glyph onto one shared baseline, chosen by
/// the tallest ascender in the set: the glyph with the maximal `origin_y`
/// ends up with `render_origin_y == 0` and everything else is pushed down
/// relative to it.
///
/// `descent` is derived from the glyph scan (`-max(height - origin_y)`,
/// scaled) and is therefore `<= 0`. [`super::TtfFont`] reports the font
/// file's vertical metric instead; the two are intentionally not unified.
pub struct AtlasFont<T> {
    texture: T,
    name: String,
    size: f32,
    height: f32,
    ascent: f32,
    descent: f32,
    glyphs: HashMap<char, GlyphMetrics>,
}

impl<T: Texture> AtlasFont<T> {
    pub fn new(texture: T, data: FontData, scale: f32) -> Self {
        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;

        let mut max_origin_x = 0.0f32;
        let mut max_origin_y = 0.0f32;
        let mut max_height = 0.0f32;
        let mut max_descent = 0.0f32;

        let mut glyphs: HashMap<char, GlyphMetrics> =
            HashMap::with_capacity(data.characters.len());

        for (key, mut glyph) in data.characters {
            let Some(codepoint) = key.chars().next() else {
                warn!("atlas '{}' maps an empty key, skipping entry", data.name);
                continue;
            };

            glyph.calc_uv(tex_width, tex_height);

            max_origin_x = max_origin_x.max(glyph.origin_x);
            max_origin_y = max_origin_y.max(glyph.origin_y);
            max_height = max_height.max(glyph.height as f32);
            max_descent = max_descent.max(glyph.height as f32 - glyph.origin_y);

            glyphs.insert(codepoint, glyph);
        }

        for glyph in glyphs.values_mut() {
            glyph.render_width = glyph.width as f32 * scale;
            glyph.render_height = glyph.height as f32 * scale;
            glyph.render_origin_x = (max_origin_x - glyph.origin_x) * scale;
            glyph.render_origin_y = (max_origin_y - glyph.origin_y) * scale;
            glyph.render_advance = glyph.advance * scale;
        }

        let ascent = max_origin_y * scale;
        let descent = -max_descent * scale;

        debug!(
            "atlas font '{}' ready: {} glyphs, ascent {ascent}, descent {descent}",
            data.name,
            glyphs.len()
        );

        Self {
            texture,
            name: data.name,
            size: data.size * scale,
            height: max_height * scale + descent,
            ascent,
            descent,
            glyphs,
        }
    }
}

impl<T: Texture> Font for AtlasFont<T> {
    fn texture(&self) -> &dyn Texture {
        &self.texture
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn line_gap(&self) -> f32 {
        self.size
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn descent(&self) -> f32 {
        self.descent
    }

    fn glyph(&self, codepoint: char) -> Option<&GlyphMetrics> {
        self.glyphs.get(&codepoint)
    }
}
