use std::env;

use anyhow::Result;
use atlas_text::{
    AtlasBitmap, AtlasFont, Font, FontData, FontRenderer, ImmediateFontRenderer, QuadBackend,
    Texture, TextureHandle, TtfConfig, TtfFont, wrap_string,
};
use image::GrayImage;

/// Counts draws instead of talking to a GPU.
#[derive(Default)]
struct CountingQuad {
    rects: usize,
}

impl QuadBackend for CountingQuad {
    fn tex_rect(
        &mut self,
        _texture: &dyn Texture,
        _x1: f32,
        _y1: f32,
        _x2: f32,
        _y2: f32,
        _u: f32,
        _v: f32,
        _u2: f32,
        _v2: f32,
    ) {
        self.rects += 1;
    }
}

const DEMO_ATLAS: &str = r#"{
    "name": "Demo Mono",
    "size": 12,
    "width": 128,
    "height": 64,
    "characters": {
        "a": { "x": 0,  "y": 0, "width": 6, "height": 9, "originX": 0.0, "originY": 9.0, "advance": 7.0 },
        "b": { "x": 7,  "y": 0, "width": 6, "height": 9, "originX": 0.0, "originY": 9.0, "advance": 7.0 },
        "c": { "x": 14, "y": 0, "width": 6, "height": 9, "originX": 0.0, "originY": 9.0, "advance": 7.0 },
        "d": { "x": 21, "y": 0, "width": 6, "height": 9, "originX": 0.0, "originY": 9.0, "advance": 7.0 },
        "e": { "x": 28, "y": 0, "width": 6, "height": 9, "originX": 0.0, "originY": 9.0, "advance": 7.0 },
        "r": { "x": 35, "y": 0, "width": 6, "height": 9, "originX": 0.0, "originY": 9.0, "advance": 7.0 },
        "s": { "x": 42, "y": 0, "width": 6, "height": 9, "originX": 0.0, "originY": 9.0, "advance": 7.0 },
        "t": { "x": 49, "y": 0, "width": 6, "height": 9, "originX": 0.0, "originY": 9.0, "advance": 7.0 },
        " ": { "x": 56, "y": 0, "width": 0, "height": 0, "originX": 0.0, "originY": 0.0, "advance": 7.0 }
    }
}"#;

fn main() -> Result<()> {
    env_logger::init();

    let data = FontData::from_json(DEMO_ATLAS)?;
    let texture = AtlasBitmap::new(GrayImage::new(128, 64), TextureHandle(1));
    let font = AtlasFont::new(texture, data, 1.0);

    let mut renderer = ImmediateFontRenderer::new(CountingQuad::default());

    let text = "abc cba d e rest started stressed";
    let wrapped = wrap_string(&font, &renderer, text, 120.0);
    println!("wrapped to 120 px:");
    for line in wrapped.lines() {
        let width = renderer.width(&font, line)?;
        println!("  {line:<12} ({width} px)");
    }

    let end_x = renderer.draw(&font, &wrapped, 0.0, 0.0)?;
    println!(
        "drew {} glyph quads, rightmost pen position {end_x}",
        renderer.backend().rects
    );

    // Bake a TrueType font when one is passed on the command line.
    let args: Vec<String> = env::args().collect();
    if let Some(path) = args.get(1) {
        let bytes = std::fs::read(path)?;
        let config = TtfConfig::new(512, 512, 32.0);
        let ttf = TtfFont::bake(&bytes, &config)?;
        println!(
            "baked '{}': ascent {}, descent {}, line gap {}, tallest glyph {}",
            ttf.name(),
            ttf.ascent(),
            ttf.descent(),
            ttf.line_gap(),
            ttf.height()
        );
    }

    Ok(())
}
