/// Font construction failures. Construction is atomic: on any of these the
/// caller gets no partially-built font.
#[derive(Debug)]
pub enum FontError {
    // Atlas description
    InvalidDescription(String),

    // TrueType baking
    UnreadableFont(&'static str),
    NoLineMetrics,
    AtlasTooSmall { width: u32, height: u32 },
    NoGlyphs,
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use FontError::*;
        match self {
            InvalidDescription(detail) => write!(f, "invalid atlas description: {detail}"),

            UnreadableFont(detail) => write!(f, "unreadable font data: {detail}"),
            NoLineMetrics => write!(f, "font has no horizontal line metrics"),
            AtlasTooSmall { width, height } => {
                write!(f, "{width}x{height} atlas too small for the requested glyphs")
            }
            NoGlyphs => write!(f, "no glyphs baked"),
        }
    }
}

impl std::error::Error for FontError {}
