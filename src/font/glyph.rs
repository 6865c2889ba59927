use serde::Deserialize;

/// Geometry of one glyph: the pixel rectangle inside the atlas, the
/// pen-relative origin and advance in atlas space, plus the values derived
/// at font construction time (scale-premultiplied render fields and the
/// normalized UV rectangle).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphMetrics {
    /// Atlas pixel rect
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    pub width: i32,
    pub height: i32,

    /// Pen-relative anchor of the glyph's top-left within its advance box
    pub origin_x: f32,
    pub origin_y: f32,
    /// Horizontal pen displacement after this glyph
    pub advance: f32,

    /// Derived at font construction, premultiplied by the font scale
    #[serde(skip)]
    pub render_width: f32,
    #[serde(skip)]
    pub render_height: f32,
    #[serde(skip)]
    pub render_origin_x: f32,
    #[serde(skip)]
    pub render_origin_y: f32,
    #[serde(skip)]
    pub render_advance: f32,

    /// Normalized texture coordinates of the glyph rect
    #[serde(skip)]
    pub u: f32,
    #[serde(skip)]
    pub v: f32,
    #[serde(skip)]
    pub u2: f32,
    #[serde(skip)]
    pub v2: f32,
}

impl GlyphMetrics {
    /// Builds a glyph whose render fields are already premultiplied by
    /// `scale`, origins taken as-is from the rasterizer. The atlas rect and
    /// UVs are filled in afterwards by the baking code.
    pub fn scaled(
        width: i32,
        height: i32,
        origin_x: f32,
        origin_y: f32,
        advance: f32,
        scale: f32,
    ) -> Self {
        Self {
            width,
            height,
            origin_x,
            origin_y,
            advance,
            render_width: width as f32 * scale,
            render_height: height as f32 * scale,
            render_origin_x: origin_x * scale,
            render_origin_y: origin_y * scale,
            render_advance: advance * scale,
            ..Self::default()
        }
    }

    /// Derives the UV rectangle from the pixel rect and the atlas
    /// dimensions. The double flip matches the atlas format this crate
    /// consumes; do not simplify it to `x / w`.
    pub fn calc_uv(&mut self, tex_width: f32, tex_height: f32) {
        let u = (tex_width - self.x as f32) / tex_width;
        let v = (tex_height - self.y as f32) / tex_height;
        let u2 = (tex_width - (self.x + self.width) as f32) / tex_width;
        let v2 = (tex_height - (self.y + self.height) as f32) / tex_height;

        self.u = 1.0 - u;
        self.v = 1.0 - v;
        self.u2 = 1.0 - u2;
        self.v2 = 1.0 - v2;
    }
}
