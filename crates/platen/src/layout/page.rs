//! Page geometry for a single PDF page.
//!
//! A [`PageLayout`] couples the full page dimensions with the writable
//! content area derived from horizontal and vertical padding. All distances
//! share one linear unit — the built-in presets use PostScript points
//! (1/72 in), but nothing here depends on the choice.

use serde::Serialize;

use crate::errors::{Error, Result};

/// One page layout: full page dimensions plus the content-area bounds.
///
/// Immutable after construction. Built either through [`PageLayout::new`]
/// (validated, bounds derived from padding) or as one of the literal
/// presets in [`crate::layout::presets`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageLayout {
    width: f64,
    height: f64,
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    content_width: f64,
    content_height: f64,
}

impl PageLayout {
    /// Builds a layout from full page dimensions and symmetric padding.
    ///
    /// `width` and `height` must be positive, padding must not be negative,
    /// and each dimension must be strictly larger than twice its padding —
    /// otherwise the content area would be empty or inverted.
    ///
    /// On success the content area starts at `(pad_h, pad_v)` and spans
    /// `(width - 2*pad_h, height - 2*pad_v)`.
    pub fn new(width: f64, height: f64, pad_h: f64, pad_v: f64) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "page dimensions must be positive, got {width}x{height}"
            )));
        }
        if pad_h < 0.0 || pad_v < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "padding must not be negative, got {pad_h}/{pad_v}"
            )));
        }
        if width <= 2.0 * pad_h || height <= 2.0 * pad_v {
            return Err(Error::InvalidParameter(format!(
                "padding {pad_h}/{pad_v} leaves no content area on a {width}x{height} page"
            )));
        }

        let content_width = width - 2.0 * pad_h;
        let content_height = height - 2.0 * pad_v;
        Ok(PageLayout {
            width,
            height,
            start_x: pad_h,
            start_y: pad_v,
            end_x: pad_h + content_width,
            end_y: pad_v + content_height,
            content_width,
            content_height,
        })
    }

    /// Literal constructor for the built-in presets, which store measured
    /// template values rather than re-deriving bounds from padding (several
    /// templates have asymmetric margins).
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn from_parts(
        width: f64,
        height: f64,
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
        content_width: f64,
        content_height: f64,
    ) -> Self {
        PageLayout {
            width,
            height,
            start_x,
            start_y,
            end_x,
            end_y,
            content_width,
            content_height,
        }
    }

    /// Full page dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Top-left corner of the content area — where body content starts.
    pub fn start(&self) -> (f64, f64) {
        (self.start_x, self.start_y)
    }

    /// Bottom-right corner of the content area.
    pub fn end(&self) -> (f64, f64) {
        (self.end_x, self.end_y)
    }

    /// Content-area dimensions as `(width, height)`.
    pub fn content_size(&self) -> (f64, f64) {
        (self.content_width, self.content_height)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
