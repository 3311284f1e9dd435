//! L4 Atomic Layer: Scroll target descriptors and their resolution

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dom::{Dom, ElementId};

/// Handle to a component whose root element may or may not be mounted
///
/// Clones share mount state, so a handle captured before mounting sees the
/// root element once the component mounts.
#[derive(Clone, Default)]
pub struct ComponentHandle {
    root: Arc<RwLock<Option<ElementId>>>,
}

impl ComponentHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounted(el: ElementId) -> Self {
        let handle = Self::new();
        handle.mount(el);
        handle
    }

    pub fn mount(&self, el: ElementId) {
        *self.root.write().unwrap_or_else(PoisonError::into_inner) = Some(el);
    }

    pub fn unmount(&self) {
        *self.root.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Root element, if mounted
    pub fn element(&self) -> Option<ElementId> {
        *self.root.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentHandle")
            .field("root", &self.element())
            .finish()
    }
}

/// What to scroll to
#[derive(Debug, Clone)]
pub enum Target {
    /// Raw pixel offset along the scroll axis
    Offset(f64),
    Element(ElementId),
    /// Selector; the first match in document order is used
    Selector(String),
    Component(ComponentHandle),
}

impl From<f64> for Target {
    fn from(offset: f64) -> Self {
        Target::Offset(offset)
    }
}

impl From<i32> for Target {
    fn from(offset: i32) -> Self {
        Target::Offset(offset as f64)
    }
}

impl From<ElementId> for Target {
    fn from(el: ElementId) -> Self {
        Target::Element(el)
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Target::Selector(selector.to_string())
    }
}

impl From<String> for Target {
    fn from(selector: String) -> Self {
        Target::Selector(selector)
    }
}

impl From<ComponentHandle> for Target {
    fn from(handle: ComponentHandle) -> Self {
        Target::Component(handle)
    }
}

impl From<&ComponentHandle> for Target {
    fn from(handle: &ComponentHandle) -> Self {
        Target::Component(handle.clone())
    }
}

/// A target after resolution against a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedTarget {
    Offset(f64),
    Element(ElementId),
}

/// Which container to scroll
#[derive(Debug, Clone)]
pub enum Container {
    /// The target element's parent element
    Parent,
    Target(Target),
}

impl From<Target> for Container {
    fn from(target: Target) -> Self {
        Container::Target(target)
    }
}

impl From<&str> for Container {
    fn from(selector: &str) -> Self {
        if selector == PARENT {
            Container::Parent
        } else {
            Container::Target(Target::from(selector))
        }
    }
}

impl From<ElementId> for Container {
    fn from(el: ElementId) -> Self {
        Container::Target(Target::Element(el))
    }
}

impl From<ComponentHandle> for Container {
    fn from(handle: ComponentHandle) -> Self {
        Container::Target(Target::Component(handle))
    }
}

const PARENT: &str = "parent";

impl Serialize for Container {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Container::Parent => serializer.serialize_str(PARENT),
            Container::Target(Target::Selector(selector)) => serializer.serialize_str(selector),
            Container::Target(_) => Err(serde::ser::Error::custom(
                "only selector containers can be serialized",
            )),
        }
    }
}

// "parent" is the sentinel, anything else a selector
impl<'de> Deserialize<'de> for Container {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Container::from(value.as_str()))
    }
}

/// Resolve a descriptor to an element
///
/// Numeric offsets, selectors without a match and unmounted components
/// resolve to `None`.
pub fn get_target<D: Dom + ?Sized>(dom: &D, target: &Target) -> Option<ElementId> {
    match target {
        Target::Offset(_) => None,
        Target::Element(el) => Some(*el),
        Target::Selector(selector) => dom.query_selector(selector),
        Target::Component(handle) => handle.element(),
    }
}

/// Resolve a descriptor to an element or a raw offset; missing targets become offset 0
pub fn resolve_target<D: Dom + ?Sized>(dom: &D, target: &Target) -> ResolvedTarget {
    match target {
        Target::Offset(offset) => ResolvedTarget::Offset(*offset),
        other => get_target(dom, other)
            .map(ResolvedTarget::Element)
            .unwrap_or(ResolvedTarget::Offset(0.0)),
    }
}

/// Resolve a container override, defaulting to the document scroller
pub fn get_container<D: Dom + ?Sized>(dom: &D, container: Option<&Target>) -> ElementId {
    if let Some(el) = container.and_then(|target| get_target(dom, target)) {
        return el;
    }
    dom.scrolling_element().unwrap_or_else(|| {
        warn!("Document has no scrolling element, falling back to body");
        dom.body()
    })
}
