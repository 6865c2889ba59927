use std::collections::HashMap;

use fontdue::{Font as RasterFont, FontSettings};
use image::{GrayImage, Luma};
use log::debug;

use super::Font;
use super::error::FontError;
use super::glyph::GlyphMetrics;
use crate::render::{AtlasBitmap, Texture, TextureHandle};

/// Baking parameters for [`TtfFont`]. The defaults of [`TtfConfig::new`]
/// cover printable ASCII at scale 1.
#[derive(Debug, Clone)]
pub struct TtfConfig {
    /// Atlas pixel width
    pub atlas_width: u32,
    /// Atlas pixel height
    pub atlas_height: u32,
    /// Rasterization size in pixels
    pub pixel_height: f32,
    /// How many consecutive codepoints to bake
    pub glyph_count: u32,
    /// First codepoint of the baked range
    pub first_codepoint: u32,
    /// Global scale applied to every derived metric
    pub scale: f32,
    /// Display name. fontdue does not expose name-table strings, so the
    /// caller supplies one; absent, the font reports `unknown - {px}`.
    pub name: Option<String>,
}

impl TtfConfig {
    pub fn new(atlas_width: u32, atlas_height: u32, pixel_height: f32) -> Self {
        Self {
            atlas_width,
            atlas_height,
            pixel_height,
            glyph_count: 95,
            first_codepoint: 32,
            scale: 1.0,
            name: None,
        }
    }
}

/// Font baked from TrueType bytes at construction time. Rasterization is
/// delegated to fontdue; this type packs the coverage bitmaps into one
/// atlas and converts fontdue's metrics into the same [`GlyphMetrics`]
/// records the atlas-backed variant uses.
///
/// Unlike [`super::AtlasFont`], glyph origins are taken straight from the
/// rasterizer (no per-set baseline normalization) and `descent` comes from
/// the font file's vertical metrics rather than a glyph scan. Both
/// differences are load-bearing for existing callers; do not unify.
///
/// The rasterizer context lives and dies inside the constructor call, so
/// independent constructions may run concurrently.
pub struct TtfFont<T> {
    texture: T,
    name: String,
    size: f32,
    height: f32,
    ascent: f32,
    descent: f32,
    line_gap: f32,
    glyphs: HashMap<char, GlyphMetrics>,
}

impl TtfFont<AtlasBitmap> {
    /// Bakes a font whose atlas stays CPU-resident. Callers that upload
    /// the bitmap themselves use [`TtfFont::with_texture`].
    pub fn bake(ttf: &[u8], config: &TtfConfig) -> Result<Self, FontError> {
        Self::with_texture(ttf, config, |image| {
            Ok(AtlasBitmap::new(image, TextureHandle(0)))
        })
    }
}

impl<T: Texture> TtfFont<T> {
    /// Bakes a font, handing the finished atlas bitmap to `upload` to turn
    /// into whatever texture type the host renders from.
    ///
    /// Fails atomically: an unreadable face, a font without horizontal
    /// line metrics, or an atlas too small for the requested range all
    /// return an error with no partially-built font behind it.
    pub fn with_texture(
        ttf: &[u8],
        config: &TtfConfig,
        upload: impl FnOnce(GrayImage) -> Result<T, FontError>,
    ) -> Result<Self, FontError> {
        let raster =
            RasterFont::from_bytes(ttf, FontSettings::default()).map_err(FontError::UnreadableFont)?;
        let line = raster
            .horizontal_line_metrics(config.pixel_height)
            .ok_or(FontError::NoLineMetrics)?;

        // Shift glyph tops into y-down render space, below the ascender.
        let font_offset = (line.ascent + line.descent).ceil();

        let mut atlas = GrayImage::new(config.atlas_width, config.atlas_height);
        let mut glyphs: HashMap<char, GlyphMetrics> =
            HashMap::with_capacity(config.glyph_count as usize);
        let mut max_height = 0.0f32;

        // Row-based packing with a one-pixel gutter.
        let mut cursor_x = 0u32;
        let mut cursor_y = 0u32;
        let mut row_h = 0u32;

        for index in 0..config.glyph_count {
            let Some(codepoint) = char::from_u32(config.first_codepoint + index) else {
                continue;
            };

            let (metrics, bitmap) = raster.rasterize(codepoint, config.pixel_height);
            let w = metrics.width as u32;
            let h = metrics.height as u32;

            if cursor_x + w > config.atlas_width {
                cursor_x = 0;
                cursor_y += row_h + 1;
                row_h = 0;
            }
            if w > config.atlas_width || cursor_y + h > config.atlas_height {
                return Err(FontError::AtlasTooSmall {
                    width: config.atlas_width,
                    height: config.atlas_height,
                });
            }

            for py in 0..h {
                for px in 0..w {
                    let value = bitmap[(py * w + px) as usize];
                    atlas.put_pixel(cursor_x + px, cursor_y + py, Luma([value]));
                }
            }

            // fontdue reports ymin as the bottom edge above the baseline;
            // the render origin wants the top edge below the ascender.
            let origin_y = font_offset - (metrics.ymin + metrics.height as i32) as f32;

            let mut glyph = GlyphMetrics::scaled(
                metrics.width as i32,
                metrics.height as i32,
                metrics.xmin as f32,
                origin_y,
                metrics.advance_width,
                config.scale,
            );
            glyph.x = cursor_x as i32;
            glyph.y = cursor_y as i32;
            glyph.calc_uv(config.atlas_width as f32, config.atlas_height as f32);

            max_height = max_height.max(metrics.height as f32);

            glyphs.insert(codepoint, glyph);

            cursor_x += w + 1;
            row_h = row_h.max(h);
        }

        if glyphs.is_empty() {
            return Err(FontError::NoGlyphs);
        }

        let name = format!(
            "{} - {}",
            config.name.as_deref().unwrap_or("unknown"),
            config.pixel_height
        );

        debug!(
            "baked '{}': {} glyphs into a {}x{} atlas",
            name,
            glyphs.len(),
            config.atlas_width,
            config.atlas_height
        );

        let texture = upload(atlas)?;

        Ok(Self {
            texture,
            name,
            size: config.pixel_height * config.scale,
            height: max_height * config.scale,
            ascent: line.ascent * config.scale,
            descent: line.descent * config.scale,
            line_gap: line.line_gap * config.scale,
            glyphs,
        })
    }
}

impl<T: Texture> Font for TtfFont<T> {
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
        self.line_gap
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
