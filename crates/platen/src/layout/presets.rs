//! Built-in page layouts for the print stocks the suite ships on.
//!
//! These are measured template values, not padding arithmetic — several
//! stocks have asymmetric margins (the A4 delivery-note form leaves 40 pt on
//! the left and 48 pt on the right), so the bounds are stored literally via
//! [`PageLayout::from_parts`].

use crate::layout::page::PageLayout;

/// ISO A-series paper dimensions in PostScript points (1/72 in).
///
/// These compose with [`PageLayout::new`] for standard stock:
/// `PageLayout::new(paper::A4.0, paper::A4.1, 90.14, 72.0)`.
pub mod paper {
    pub const A0: (f64, f64) = (2383.94, 3370.39);
    pub const A1: (f64, f64) = (1683.78, 2383.94);
    pub const A2: (f64, f64) = (1190.55, 1683.78);
    pub const A3: (f64, f64) = (841.89, 1190.55);
    pub const A4: (f64, f64) = (595.28, 841.89);
    pub const A5: (f64, f64) = (419.53, 595.28);
}

/// ISO A3 stock.
pub const A3: PageLayout =
    PageLayout::from_parts(841.89, 1190.55, 90.14, 72.0, 751.76, 1118.55, 661.62, 1046.55);

/// The 688×780 delivery-note form stock. Registered as "A4" because it
/// replaced ISO A4 in the print templates; the ISO dimensions live in
/// [`paper::A4`].
pub const A4: PageLayout =
    PageLayout::from_parts(688.0, 780.0, 40.0, 40.0, 640.0, 720.0, 600.0, 680.0);

/// Three-part carbonless form, 765×595 landscape.
pub const TRIPLET: PageLayout =
    PageLayout::from_parts(765.0, 595.0, 80.14, 72.0, 750.0, 550.0, 580.0, 450.0);

/// US letter (612×792).
pub const LETTER: PageLayout =
    PageLayout::from_parts(612.0, 792.0, 90.14, 72.0, 521.86, 720.0, 431.72, 648.0);

/// Seed table for [`crate::layout::registry::PageLayoutRegistry`].
pub(crate) const BUILTIN: &[(&str, PageLayout)] = &[
    ("A3", A3),
    ("A4", A4),
    ("Triplet", TRIPLET),
    ("LTR", LETTER),
];
