//! Named page-layout registry.
//!
//! One registry is constructed at startup — seeded with the built-in
//! formats — and owned by whatever component lays out pages. Registration
//! after startup is a rare, operator-driven configuration change, not a hot
//! path.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::errors::{Error, Result};
use crate::layout::page::PageLayout;
use crate::layout::presets;

/// Mapping from page-size identifier ("A4", "Triplet", …) to its layout.
///
/// Lookups take `&self` and registration takes `&mut self`, so exclusive
/// access during mutation is enforced by the borrow checker; an application
/// sharing one registry across threads wraps it in an `RwLock`.
///
/// There is no removal and no overwrite: registering an identifier twice is
/// a configuration error and is rejected with [`Error::DuplicateSize`].
#[derive(Debug, Clone, Serialize)]
pub struct PageLayoutRegistry {
    sizes: HashMap<String, PageLayout>,
}

impl Default for PageLayoutRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl PageLayoutRegistry {
    /// Registry seeded with the built-in formats ("A3", "A4", "Triplet",
    /// "LTR").
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        for (size, layout) in presets::BUILTIN {
            // Built-in identifiers are distinct, so seeding cannot collide.
            registry.sizes.insert((*size).to_string(), *layout);
        }
        registry
    }

    /// Registry with no entries, for fully custom layout sets.
    pub fn empty() -> Self {
        PageLayoutRegistry {
            sizes: HashMap::new(),
        }
    }

    /// Registers a custom page size.
    ///
    /// The identifier must be non-empty and not yet registered. A duplicate
    /// is reported as [`Error::DuplicateSize`] and leaves the registry
    /// untouched — the caller decides whether that aborts startup.
    pub fn register(&mut self, size: impl Into<String>, layout: PageLayout) -> Result<()> {
        let size = size.into();
        if size.is_empty() {
            return Err(Error::InvalidParameter(
                "page size identifier must not be empty".to_string(),
            ));
        }
        if self.sizes.contains_key(&size) {
            return Err(Error::DuplicateSize(size));
        }
        debug!(%size, "registered page layout");
        self.sizes.insert(size, layout);
        Ok(())
    }

    /// Looks up a layout by its identifier.
    pub fn lookup(&self, size: &str) -> Option<&PageLayout> {
        self.sizes.get(size)
    }

    /// Whether the identifier is registered.
    pub fn contains(&self, size: &str) -> bool {
        self.sizes.contains_key(size)
    }

    /// Registered identifiers, in no particular order.
    pub fn sizes(&self) -> impl Iterator<Item = &str> {
        self.sizes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
