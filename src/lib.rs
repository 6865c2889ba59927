//! Bitmap-atlas and TrueType font resources, glyph-metric text layout,
//! greedy line wrapping, and immediate/batched text renderers over an
//! abstract textured-quad backend.
//!
//! The crate has three layers:
//!
//! - [`font`]: font resources. [`font::AtlasFont`] wraps a pre-baked atlas
//!   description plus an externally supplied texture; [`font::TtfFont`]
//!   bakes a TrueType face into its own atlas at construction time. Both
//!   expose the same read-only [`font::Font`] contract.
//! - [`render`]: the layout algorithm ([`render::FontRenderer`]) and the
//!   two renderer implementations, talking to the host application through
//!   the [`render::QuadBackend`] / [`render::BatchBackend`] seams.
//! - [`wrap`]: greedy line wrapping and centered drawing on top of the
//!   same per-glyph advance metrics.

pub mod font;
pub mod render;
pub mod wrap;

pub use font::{AtlasFont, Font, FontData, FontError, GlyphMetrics, TtfConfig, TtfFont};
pub use render::{
    AdvanceMode, AtlasBitmap, BatchBackend, BufferedFontRenderer, FontRenderer,
    ImmediateFontRenderer, LayoutError, QuadBackend, Texture, TextureHandle, Vertex,
};
pub use wrap::{draw_centered_string, wrap_string, wrap_string_advance};
