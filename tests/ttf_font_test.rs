use atlas_text::{Font, FontError, Texture, TtfConfig, TtfFont};

fn system_font_bytes() -> Option<Vec<u8>> {
    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ];

    candidates
        .iter()
        .find_map(|path| std::fs::read(path).ok())
}

#[test]
fn bakes_printable_ascii_from_a_system_font() {
    let Some(bytes) = system_font_bytes() else {
        eprintln!("skipping TtfFont bake test: no system font found");
        return;
    };

    let mut config = TtfConfig::new(512, 512, 32.0);
    config.name = Some("System".to_string());
    let font = TtfFont::bake(&bytes, &config).expect("bake");

    assert_eq!(font.name(), "System - 32");
    assert_eq!(font.size(), 32.0);
    assert_eq!(font.texture().width(), 512);
    assert_eq!(font.texture().height(), 512);

    // Vertical metrics come from the font file, not a glyph scan.
    assert!(font.ascent() > 0.0);
    assert!(font.descent() < 0.0);
    assert!(font.height() > 0.0);

    // Printable ASCII is covered; 'A' has a visible box, space has an
    // advance but no box.
    let a = font.glyph('A').expect("glyph A");
    assert!(a.width > 0 && a.height > 0);
    assert!(a.render_advance > 0.0);
    let space = font.glyph(' ').expect("glyph space");
    assert_eq!(space.width, 0);
    assert!(space.render_advance > 0.0);

    // Outside the baked range.
    assert!(font.glyph('\u{3042}').is_none());

    // UVs stay inside the atlas.
    for cp in ' '..='~' {
        let glyph = font.glyph(cp).expect("baked glyph");
        for value in [glyph.u, glyph.v, glyph.u2, glyph.v2] {
            assert!((0.0..=1.0).contains(&value));
        }
    }
}

#[test]
fn scale_doubles_every_derived_metric() {
    let Some(bytes) = system_font_bytes() else {
        eprintln!("skipping TtfFont scale test: no system font found");
        return;
    };

    let base_config = TtfConfig::new(512, 512, 32.0);
    let mut doubled_config = TtfConfig::new(512, 512, 32.0);
    doubled_config.scale = 2.0;

    let base = TtfFont::bake(&bytes, &base_config).expect("bake");
    let doubled = TtfFont::bake(&bytes, &doubled_config).expect("bake");

    assert_eq!(doubled.ascent(), base.ascent() * 2.0);
    assert_eq!(doubled.descent(), base.descent() * 2.0);
    assert_eq!(doubled.size(), base.size() * 2.0);

    let g1 = base.glyph('M').expect("glyph");
    let g2 = doubled.glyph('M').expect("glyph");
    assert_eq!(g2.render_width, g1.render_width * 2.0);
    assert_eq!(g2.render_advance, g1.render_advance * 2.0);
    assert_eq!(g2.render_origin_y, g1.render_origin_y * 2.0);
}

#[test]
fn a_tiny_atlas_fails_cleanly() {
    let Some(bytes) = system_font_bytes() else {
        eprintln!("skipping TtfFont atlas-overflow test: no system font found");
        return;
    };

    let config = TtfConfig::new(16, 16, 64.0);
    let result = TtfFont::bake(&bytes, &config);

    assert!(matches!(
        result,
        Err(FontError::AtlasTooSmall {
            width: 16,
            height: 16
        })
    ));
}

#[test]
fn garbage_bytes_never_yield_a_font() {
    let config = TtfConfig::new(128, 128, 16.0);
    let result = TtfFont::bake(b"definitely not a font", &config);

    assert!(matches!(result, Err(FontError::UnreadableFont(_))));
}
