//! Page-layout presets and Code-128 label rendering for the PDF pipeline.
//!
//! Two independent utilities live here:
//!
//! - [`layout`] — the core: [`PageLayout`] describes a page's dimensions and
//!   its writable content area, and [`PageLayoutRegistry`] maps size
//!   identifiers to layouts, seeded with the built-in print stocks.
//! - [`barcode`] — a thin wrapper that renders text as a Code-128 barcode
//!   PNG at a requested pixel size.
//!
//! ```
//! use platen::{PageLayout, PageLayoutRegistry};
//!
//! let mut registry = PageLayoutRegistry::with_builtin();
//!
//! // Built-ins are available immediately.
//! let a4 = registry.lookup("A4").expect("built-in");
//! let (start_x, start_y) = a4.start();
//! assert!(start_x > 0.0 && start_y > 0.0);
//!
//! // Custom stock: 600x800 page with 40pt padding on every side.
//! let receipt = PageLayout::new(600.0, 800.0, 40.0, 40.0)?;
//! registry.register("Receipt", receipt)?;
//! assert_eq!(registry.lookup("Receipt").unwrap().end(), (560.0, 760.0));
//! # Ok::<(), platen::Error>(())
//! ```

pub mod barcode;
pub mod errors;
pub mod layout;

pub use errors::{Error, Result};
pub use layout::{PageLayout, PageLayoutRegistry};
