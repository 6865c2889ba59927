mod common;

use atlas_text::{
    FontRenderer, ImmediateFontRenderer, draw_centered_string, wrap_string, wrap_string_advance,
};
use common::{RecordingQuad, uniform_font};

#[test]
fn short_input_comes_back_unchanged() {
    let font = uniform_font();
    let renderer = ImmediateFontRenderer::new(RecordingQuad::default());

    assert_eq!(wrap_string(&font, &renderer, "hi", 10000.0), "hi");
}

#[test]
fn pinned_breakpoint_for_uniform_advances() {
    let font = uniform_font();
    let renderer = ImmediateFontRenderer::new(RecordingQuad::default());

    // Every character measures 10. "aaaa " reaches 50 at the space; the
    // look-ahead overflows 45 on the first 'b', so the space becomes the
    // break.
    assert_eq!(
        wrap_string(&font, &renderer, "aaaa bbbb", 45.0),
        "aaaa\nbbbb"
    );

    // At 100 everything fits on one line.
    assert_eq!(
        wrap_string(&font, &renderer, "aaaa bbbb", 100.0),
        "aaaa bbbb"
    );
}

#[test]
fn wrapped_text_fits_the_measured_height() {
    let font = uniform_font();
    let renderer = ImmediateFontRenderer::new(RecordingQuad::default());

    let wrapped = wrap_string(&font, &renderer, "aaaa bbbb cccc", 45.0);
    assert_eq!(wrapped, "aaaa\nbbbb\ncccc");

    // Three lines tall once wrapped.
    assert_eq!(renderer.height(&font, &wrapped).expect("height"), 30.0);
}

#[test]
fn renderer_scale_moves_the_breakpoints() {
    let font = uniform_font();
    let mut renderer = ImmediateFontRenderer::new(RecordingQuad::default());

    // Doubled advances halve what fits on a line.
    renderer.set_scale(2.0, 1.0);
    assert_eq!(
        wrap_string(&font, &renderer, "aa bb", 45.0),
        "aa\nbb"
    );
}

#[test]
fn advance_variant_needs_no_renderer() {
    let font = uniform_font();

    assert_eq!(wrap_string_advance(&font, "aaaa bbbb", 45.0), "aaaa\nbbbb");
}

#[test]
fn centered_drawing_centers_each_line_independently() {
    let font = uniform_font();
    let mut renderer = ImmediateFontRenderer::new(RecordingQuad::default());

    draw_centered_string(&mut renderer, &font, "aa\nbbbb", 100.0, 0.0).expect("draw");

    let rects = &renderer.backend().rects;
    assert_eq!(rects.len(), 6);
    // "aa" is 20 wide: starts at 90 on the first line.
    assert_eq!(rects[0].1[0], 90.0);
    assert_eq!(rects[0].1[1], 0.0);
    // "bbbb" is 40 wide: starts at 80, one line height down.
    assert_eq!(rects[2].1[0], 80.0);
    assert_eq!(rects[2].1[1], 10.0);
}
