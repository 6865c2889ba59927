//! Greedy line wrapping and centered drawing over per-glyph advances.

use crate::font::Font;
use crate::render::{FontRenderer, LayoutError};

/// Word-wraps `text` to `max_width` using the renderer's advance policy,
/// without rendering anything.
///
/// The policy is a deliberate heuristic and callers depend on its exact
/// breakpoints:
///
/// - an existing newline passes through unchanged and resets the running
///   width;
/// - at a space, the upcoming word is measured up to the next space; if the
///   line plus that word would overflow, the space becomes a newline,
///   otherwise it stays;
/// - a non-space character that itself pushes the line past `max_width`
///   gets a hyphen and newline inserted before it, unless it is one of
///   `, . ; : ! ?`.
pub fn wrap_string(
    font: &dyn Font,
    renderer: &dyn FontRenderer,
    text: &str,
    max_width: f32,
) -> String {
    wrap_with(text, max_width, &|codepoint| {
        renderer.char_advance(font.glyph(codepoint))
    })
}

/// [`wrap_string`] without a renderer: widths come straight from the
/// glyphs' render advances, with no renderer scale or advance policy
/// applied.
pub fn wrap_string_advance(font: &dyn Font, text: &str, max_width: f32) -> String {
    wrap_with(text, max_width, &|codepoint| {
        font.glyph(codepoint).map_or(0.0, |g| g.render_advance)
    })
}

fn wrap_with(text: &str, max_width: f32, advance: &dyn Fn(char) -> f32) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut width = 0.0f32;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        // Already wrapped; reset and move on.
        if c == '\n' {
            out.push(c);
            width = 0.0;
            i += 1;
            continue;
        }

        width += advance(c);

        if c == ' ' {
            // Measure the upcoming word, up to the next space.
            let mut extra = 0.0f32;
            let mut j = i + 1;
            while j < chars.len() {
                let next = chars[j];
                extra += advance(next);
                if next == ' ' || width + extra > max_width {
                    break;
                }
                j += 1;
            }

            // Break in place of the space when the word would not fit.
            if width + extra > max_width {
                width = 0.0;
                out.push('\n');
            } else {
                out.push(c);
            }
        } else if width > max_width && !matches!(c, ',' | '.' | ';' | ':' | '!' | '?') {
            width = 0.0;
            out.push('-');
            out.push('\n');
            out.push(c);
        } else {
            out.push(c);
        }

        i += 1;
    }

    out
}

/// Draws `text` with each line centered horizontally around `x`. Lines are
/// measured with the renderer's own width function before being drawn, so
/// the result is consistent with [`FontRenderer::width_range`].
pub fn draw_centered_string(
    renderer: &mut dyn FontRenderer,
    font: &dyn Font,
    text: &str,
    x: f32,
    y: f32,
) -> Result<(), LayoutError> {
    let chars: Vec<char> = text.chars().collect();
    let mut y = y;
    let mut line_start = 0;

    loop {
        let line_end = chars[line_start..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(chars.len(), |offset| line_start + offset);

        let line_width = renderer.width_range(font, &chars, line_start, line_end)?;
        renderer.draw_range(font, &chars, x - line_width / 2.0, y, line_start, line_end)?;

        if line_end == chars.len() {
            return Ok(());
        }
        y += renderer.line_height(font);
        line_start = line_end + 1;
    }
}
