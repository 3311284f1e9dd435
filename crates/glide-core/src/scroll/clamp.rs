//! L4 Atomic Layer: Bounding a scroll target to the container's range

use crate::dom::{Axis, Dom, ElementId};

/// Visible size of a container along an axis
///
/// The document scroller is bounded by the viewport, other containers by
/// their offset box.
fn outer_size<D: Dom + ?Sized>(dom: &D, container: ElementId, axis: Axis) -> f64 {
    if dom.scrolling_element() == Some(container) {
        dom.viewport_size(axis)
    } else {
        dom.offset_size(container, axis)
    }
}

/// Valid scroll range `(min, max)` of a container
///
/// For degenerate containers `min` may exceed `max`.
pub fn scroll_range<D: Dom + ?Sized>(
    dom: &D,
    container: ElementId,
    rtl: bool,
    horizontal: bool,
) -> (f64, f64) {
    let axis = Axis::from_horizontal(horizontal);
    let overflow = dom.scroll_size(container, axis) - outer_size(dom, container, axis);
    if horizontal && rtl {
        (-overflow, 0.0)
    } else {
        (0.0, overflow)
    }
}

/// Bound `value` into the container's valid scroll range
pub fn clamp_target<D: Dom + ?Sized>(
    dom: &D,
    container: ElementId,
    value: f64,
    rtl: bool,
    horizontal: bool,
) -> f64 {
    let (min, max) = scroll_range(dom, container, rtl, horizontal);
    // Not f64::clamp: it panics when min > max
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementSpec, MemoryDocument};

    fn pane(doc: &MemoryDocument) -> ElementId {
        doc.append(
            doc.body(),
            ElementSpec::new("div").size(400.0, 300.0).scroll_size(1000.0, 900.0),
        )
    }

    #[test]
    fn test_horizontal_rtl_range() {
        let doc = MemoryDocument::new(800.0, 600.0);
        let pane = pane(&doc);

        assert_eq!(scroll_range(&doc, pane, true, true), (-600.0, 0.0));
        assert_eq!(clamp_target(&doc, pane, 500.0, true, true), 0.0);
        assert_eq!(clamp_target(&doc, pane, -250.0, true, true), -250.0);
        assert_eq!(clamp_target(&doc, pane, -900.0, true, true), -600.0);
    }

    #[test]
    fn test_horizontal_ltr_and_vertical() {
        let doc = MemoryDocument::new(800.0, 600.0);
        let pane = pane(&doc);

        assert_eq!(clamp_target(&doc, pane, 700.0, false, true), 600.0);
        assert_eq!(clamp_target(&doc, pane, -5.0, false, true), 0.0);
        assert_eq!(clamp_target(&doc, pane, 700.0, false, false), 600.0);
        // Direction does not affect the vertical axis
        assert_eq!(clamp_target(&doc, pane, 700.0, true, false), 600.0);
    }

    #[test]
    fn test_document_scroller_uses_viewport() {
        let doc = MemoryDocument::new(800.0, 600.0);
        doc.set_document_size(800.0, 2600.0);
        let html = doc.html();

        assert_eq!(clamp_target(&doc, html, 5000.0, false, false), 2000.0);
    }

    #[test]
    fn test_clamp_idempotent() {
        let doc = MemoryDocument::new(800.0, 600.0);
        let pane = pane(&doc);

        for rtl in [false, true] {
            for horizontal in [false, true] {
                for v in [-1000.0, -600.0, -1.0, 0.0, 250.5, 600.0, 10_000.0] {
                    let once = clamp_target(&doc, pane, v, rtl, horizontal);
                    let twice = clamp_target(&doc, pane, once, rtl, horizontal);
                    assert_eq!(once, twice, "v={} rtl={} horizontal={}", v, rtl, horizontal);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_container() {
        let doc = MemoryDocument::new(800.0, 600.0);
        let empty = doc.append(doc.body(), ElementSpec::new("div"));
        assert_eq!(clamp_target(&doc, empty, 120.0, false, false), 0.0);

        // Content smaller than the box: range collapses without panicking
        let small = doc.append(
            doc.body(),
            ElementSpec::new("div").size(400.0, 300.0).scroll_size(100.0, 100.0),
        );
        assert_eq!(clamp_target(&doc, small, 50.0, false, false), 0.0);
        assert_eq!(clamp_target(&doc, small, 50.0, true, true), 300.0);
    }
}
