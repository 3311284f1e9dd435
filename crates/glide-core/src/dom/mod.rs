//! Document model the scroll animator runs against
//!
//! `Dom` is the environment contract: element geometry, scroll positions,
//! document queries and computed-style lookup. `MemoryDocument` is an
//! in-memory implementation used by the CLI and the tests.

mod memory;
mod selector;

pub use memory::{ElementSpec, MemoryDocument, ScrollWrite};
pub use selector::Selector;

use std::fmt;

/// Handle to an element in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// scrollLeft / offsetLeft / widths
    Horizontal,
    /// scrollTop / offsetTop / heights
    Vertical,
}

impl Axis {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        self == Axis::Horizontal
    }
}

/// DOM-like environment exposing element geometry and scroll state
///
/// Setters take `&self`: scroll position is shared mutable state owned by
/// the document, as in a browser.
pub trait Dom: Send + Sync {
    /// First element in document order matching `selector`
    fn query_selector(&self, selector: &str) -> Option<ElementId>;

    /// Element that scrolls the document itself
    fn scrolling_element(&self) -> Option<ElementId>;

    fn body(&self) -> ElementId;

    fn parent_element(&self, el: ElementId) -> Option<ElementId>;

    /// Ancestor that establishes `el`'s offset coordinate origin
    fn offset_parent(&self, el: ElementId) -> Option<ElementId>;

    /// offsetLeft / offsetTop
    fn offset(&self, el: ElementId, axis: Axis) -> f64;

    /// offsetWidth / offsetHeight
    fn offset_size(&self, el: ElementId, axis: Axis) -> f64;

    /// clientWidth / clientHeight
    fn client_size(&self, el: ElementId, axis: Axis) -> f64;

    /// scrollWidth / scrollHeight
    fn scroll_size(&self, el: ElementId, axis: Axis) -> f64;

    /// scrollLeft / scrollTop
    fn scroll_position(&self, el: ElementId, axis: Axis) -> f64;

    fn set_scroll_position(&self, el: ElementId, axis: Axis, value: f64);

    /// innerWidth / innerHeight of the window
    fn viewport_size(&self, axis: Axis) -> f64;

    /// Computed value of a (custom) style property
    fn computed_style(&self, el: ElementId, property: &str) -> Option<String>;
}
