//! In-memory document
//!
//! An arena of elements with fixed geometry. Scroll positions are clamped
//! the way a browser clamps them, and every scroll write is recorded so
//! callers can replay an animation frame by frame.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Axis, Dom, ElementId, Selector};

const HTML: ElementId = ElementId(0);
const BODY: ElementId = ElementId(1);

/// Description of an element to append to a `MemoryDocument`
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Establishes an offset parent for its descendants
    pub positioned: bool,
    /// Right-to-left: horizontal scroll positions run from -max to 0
    pub rtl: bool,
    /// (offsetLeft, offsetTop) relative to the offset parent
    pub offset: (f64, f64),
    /// (offsetWidth, offsetHeight)
    pub offset_size: (f64, f64),
    /// (clientWidth, clientHeight)
    pub client_size: (f64, f64),
    /// (scrollWidth, scrollHeight)
    pub scroll_size: (f64, f64),
    /// Computed style properties, including custom properties
    pub styles: HashMap<String, String>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn positioned(mut self) -> Self {
        self.positioned = true;
        self
    }

    pub fn rtl(mut self) -> Self {
        self.rtl = true;
        self
    }

    pub fn offset(mut self, left: f64, top: f64) -> Self {
        self.offset = (left, top);
        self
    }

    /// Sets both the offset size and the client size
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.offset_size = (width, height);
        self.client_size = (width, height);
        // Content is at least as large as the box
        self.scroll_size = (
            self.scroll_size.0.max(width),
            self.scroll_size.1.max(height),
        );
        self
    }

    pub fn client_size(mut self, width: f64, height: f64) -> Self {
        self.client_size = (width, height);
        self
    }

    pub fn scroll_size(mut self, width: f64, height: f64) -> Self {
        self.scroll_size = (width, height);
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }
}

/// A recorded scroll position write
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWrite {
    pub element: ElementId,
    pub axis: Axis,
    /// Position after clamping
    pub value: f64,
}

#[derive(Debug)]
struct Node {
    spec: ElementSpec,
    parent: Option<ElementId>,
    scroll: (f64, f64),
}

#[derive(Debug, Default)]
struct Tree {
    nodes: Vec<Node>,
    writes: Vec<ScrollWrite>,
}

impl Tree {
    fn node(&self, el: ElementId) -> Option<&Node> {
        self.nodes.get(el.0)
    }
}

/// Document held entirely in memory
#[derive(Debug)]
pub struct MemoryDocument {
    tree: RwLock<Tree>,
    viewport: (f64, f64),
}

impl MemoryDocument {
    /// Create a document with `html` and `body` sized to the viewport
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let root = |tag: &str, parent| Node {
            spec: ElementSpec::new(tag).size(viewport_width, viewport_height),
            parent,
            scroll: (0.0, 0.0),
        };
        let tree = Tree {
            nodes: vec![root("html", None), root("body", Some(HTML))],
            writes: Vec::new(),
        };
        Self {
            tree: RwLock::new(tree),
            viewport: (viewport_width, viewport_height),
        }
    }

    /// Root element; it scrolls the document
    pub fn html(&self) -> ElementId {
        HTML
    }

    /// Append a child element and return its handle
    pub fn append(&self, parent: ElementId, spec: ElementSpec) -> ElementId {
        let mut tree = self.write();
        let id = ElementId(tree.nodes.len());
        tree.nodes.push(Node {
            spec,
            parent: Some(parent),
            scroll: (0.0, 0.0),
        });
        id
    }

    /// Mutate an element's description in place
    pub fn update(&self, el: ElementId, f: impl FnOnce(&mut ElementSpec)) {
        if let Some(node) = self.write().nodes.get_mut(el.0) {
            f(&mut node.spec);
        }
    }

    /// Set the scrollable size of the whole document
    pub fn set_document_size(&self, width: f64, height: f64) {
        self.update(HTML, |spec| spec.scroll_size = (width, height));
    }

    /// Every scroll write since creation (or the last `clear_writes`)
    pub fn writes(&self) -> Vec<ScrollWrite> {
        self.read().writes.clone()
    }

    /// Written positions of one element along one axis
    pub fn scroll_history(&self, el: ElementId, axis: Axis) -> Vec<f64> {
        self.read()
            .writes
            .iter()
            .filter(|w| w.element == el && w.axis == axis)
            .map(|w| w.value)
            .collect()
    }

    pub fn clear_writes(&self) {
        self.write().writes.clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, Tree> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tree> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn pick(pair: (f64, f64), axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => pair.0,
            Axis::Vertical => pair.1,
        }
    }

    fn geometry(&self, el: ElementId, axis: Axis, f: impl Fn(&Node) -> (f64, f64)) -> f64 {
        self.read()
            .node(el)
            .map(|node| Self::pick(f(node), axis))
            .unwrap_or(0.0)
    }
}

impl Dom for MemoryDocument {
    fn query_selector(&self, selector: &str) -> Option<ElementId> {
        let selector = Selector::parse(selector)?;
        let tree = self.read();
        tree.nodes
            .iter()
            .position(|node| {
                selector.matches(&node.spec.tag, node.spec.id.as_deref(), &node.spec.classes)
            })
            .map(ElementId)
    }

    fn scrolling_element(&self) -> Option<ElementId> {
        Some(HTML)
    }

    fn body(&self) -> ElementId {
        BODY
    }

    fn parent_element(&self, el: ElementId) -> Option<ElementId> {
        self.read().node(el)?.parent
    }

    fn offset_parent(&self, el: ElementId) -> Option<ElementId> {
        if el == HTML || el == BODY {
            return None;
        }
        let tree = self.read();
        let mut current = tree.node(el)?.parent;
        while let Some(id) = current {
            let node = tree.node(id)?;
            if id == BODY || node.spec.positioned {
                return Some(id);
            }
            current = node.parent;
        }
        None
    }

    fn offset(&self, el: ElementId, axis: Axis) -> f64 {
        self.geometry(el, axis, |node| node.spec.offset)
    }

    fn offset_size(&self, el: ElementId, axis: Axis) -> f64 {
        self.geometry(el, axis, |node| node.spec.offset_size)
    }

    fn client_size(&self, el: ElementId, axis: Axis) -> f64 {
        self.geometry(el, axis, |node| node.spec.client_size)
    }

    fn scroll_size(&self, el: ElementId, axis: Axis) -> f64 {
        self.geometry(el, axis, |node| node.spec.scroll_size)
    }

    fn scroll_position(&self, el: ElementId, axis: Axis) -> f64 {
        self.geometry(el, axis, |node| node.scroll)
    }

    fn set_scroll_position(&self, el: ElementId, axis: Axis, value: f64) {
        let mut tree = self.write();
        let Some(node) = tree.nodes.get_mut(el.0) else {
            return;
        };

        let range = (Self::pick(node.spec.scroll_size, axis)
            - Self::pick(node.spec.client_size, axis))
        .max(0.0);
        let (min, max) = if axis.is_horizontal() && node.spec.rtl {
            (-range, 0.0)
        } else {
            (0.0, range)
        };
        let value = value.max(min).min(max);

        match axis {
            Axis::Horizontal => node.scroll.0 = value,
            Axis::Vertical => node.scroll.1 = value,
        }
        tree.writes.push(ScrollWrite {
            element: el,
            axis,
            value,
        });
    }

    fn viewport_size(&self, axis: Axis) -> f64 {
        Self::pick(self.viewport, axis)
    }

    fn computed_style(&self, el: ElementId, property: &str) -> Option<String> {
        self.read().node(el)?.spec.styles.get(property).cloned()
    }
}
