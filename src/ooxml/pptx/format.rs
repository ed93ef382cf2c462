//! Format types for PPTX presentations.

/// English Metric Units per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// Text formatting properties copied from a template paragraph.
///
/// Every field is independent: `None` means "not set on the source", and an
/// unset field is left to the output's defaults rather than forced to a value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextFormat {
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
}

impl TextFormat {
    /// Check whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.bold.is_none() && self.italic.is_none()
    }

    /// Fill every unset attribute from `fallback`.
    pub fn or(self, fallback: TextFormat) -> TextFormat {
        TextFormat {
            size: self.size.or(fallback.size),
            bold: self.bold.or(fallback.bold),
            italic: self.italic.or(fallback.italic),
        }
    }

    /// Font size in hundredths of a point, the unit of the `sz` attribute.
    pub fn size_centipoints(&self) -> Option<u32> {
        self.size
            .filter(|size| size.is_finite() && *size > 0.0)
            .map(|size| (size * 100.0).round() as u32)
    }
}

/// Position and size of a shape, in EMUs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Geometry {
    /// X position (left edge)
    pub x: i64,
    /// Y position (top edge)
    pub y: i64,
    /// Width
    pub cx: i64,
    /// Height
    pub cy: i64,
}

impl Geometry {
    pub fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }
}

/// Slide dimensions, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSize {
    pub width: i64,
    pub height: i64,
}

impl Default for SlideSize {
    /// 10" x 7.5" (standard 4:3 aspect ratio).
    fn default() -> Self {
        Self {
            width: 10 * EMU_PER_INCH,
            height: EMU_PER_INCH * 15 / 2,
        }
    }
}
