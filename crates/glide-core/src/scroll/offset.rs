//! L4 Atomic Layer: Offset calculation along a scroll axis

use crate::dom::{Axis, Dom, ElementId};

use super::target::{get_target, Target};

/// Custom property reporting fixed layout chrome (e.g. an app bar) above content
pub const LAYOUT_TOP_PROPERTY: &str = "--layout-top";

/// Offset of a target along the requested axis
///
/// Numbers are returned as-is, negated for right-to-left horizontal axes.
/// Elements report their position relative to the document origin.
/// Anything that resolves to nothing is offset 0.
pub fn get_offset<D: Dom + ?Sized>(dom: &D, target: &Target, horizontal: bool, rtl: bool) -> f64 {
    if let Target::Offset(offset) = target {
        return if horizontal && rtl { -offset } else { *offset };
    }

    get_target(dom, target)
        .map(|el| element_offset(dom, el, Axis::from_horizontal(horizontal)))
        .unwrap_or(0.0)
}

/// Sum of offsetLeft/offsetTop across the element and its offset parents
pub fn element_offset<D: Dom + ?Sized>(dom: &D, el: ElementId, axis: Axis) -> f64 {
    let mut total = 0.0;
    let mut current = Some(el);
    while let Some(el) = current {
        total += dom.offset(el, axis);
        current = dom.offset_parent(el);
    }
    total
}

/// Fixed layout offset reported by the element's computed style, in pixels
pub fn layout_offset<D: Dom + ?Sized>(dom: &D, el: ElementId) -> Option<f64> {
    dom.computed_style(el, LAYOUT_TOP_PROPERTY)
        .and_then(|value| parse_css_int(&value))
}

/// Leading integer of a CSS value: "64px" → 64, "-8.5px" → -8, "auto" → None
pub fn parse_css_int(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let (sign, digits) = match value.as_bytes().first() {
        Some(b'-') => (-1.0, &value[1..]),
        Some(b'+') => (1.0, &value[1..]),
        _ => (1.0, value),
    };
    let len = digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if len == 0 {
        return None;
    }
    digits[..len].parse::<f64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementSpec, MemoryDocument};

    #[test]
    fn test_numeric_offsets() {
        let doc = MemoryDocument::new(800.0, 600.0);
        let fifty = Target::from(50.0);
        assert_eq!(get_offset(&doc, &fifty, true, true), -50.0);
        assert_eq!(get_offset(&doc, &fifty, true, false), 50.0);
        assert_eq!(get_offset(&doc, &fifty, false, true), 50.0);
    }

    #[test]
    fn test_nested_offsets_accumulate() {
        let doc = MemoryDocument::new(800.0, 600.0);
        let outer = doc.append(
            doc.body(),
            ElementSpec::new("div").positioned().offset(3.0, 30.0),
        );
        let middle = doc.append(outer, ElementSpec::new("div").positioned().offset(2.0, 20.0));
        let inner = doc.append(middle, ElementSpec::new("div").id("inner").offset(1.0, 10.0));

        assert_eq!(get_offset(&doc, &Target::from(inner), false, false), 60.0);
        assert_eq!(get_offset(&doc, &Target::from("#inner"), true, false), 6.0);
        // Element offsets are not mirrored for rtl
        assert_eq!(get_offset(&doc, &Target::from(inner), true, true), 6.0);
    }

    #[test]
    fn test_static_ancestors_do_not_count_twice() {
        let doc = MemoryDocument::new(800.0, 600.0);
        let positioned = doc.append(doc.body(), ElementSpec::new("div").positioned().offset(0.0, 100.0));
        // Static wrapper: its own offset is already folded into the child's
        let wrapper = doc.append(positioned, ElementSpec::new("div").offset(0.0, 40.0));
        let leaf = doc.append(wrapper, ElementSpec::new("p").offset(0.0, 55.0));

        assert_eq!(element_offset(&doc, leaf, Axis::Vertical), 155.0);
    }

    #[test]
    fn test_unresolved_target_is_zero() {
        let doc = MemoryDocument::new(800.0, 600.0);
        assert_eq!(get_offset(&doc, &Target::from("#ghost"), false, false), 0.0);
    }

    #[test]
    fn test_layout_offset() {
        let doc = MemoryDocument::new(800.0, 600.0);
        let el = doc.append(
            doc.body(),
            ElementSpec::new("div").style(LAYOUT_TOP_PROPERTY, "64px"),
        );
        let bare = doc.append(doc.body(), ElementSpec::new("div"));

        assert_eq!(layout_offset(&doc, el), Some(64.0));
        assert_eq!(layout_offset(&doc, bare), None);
    }

    #[test]
    fn test_parse_css_int() {
        assert_eq!(parse_css_int("64px"), Some(64.0));
        assert_eq!(parse_css_int("  12"), Some(12.0));
        assert_eq!(parse_css_int("-8.5px"), Some(-8.0));
        assert_eq!(parse_css_int("+3"), Some(3.0));
        assert_eq!(parse_css_int("auto"), None);
        assert_eq!(parse_css_int(""), None);
        assert_eq!(parse_css_int("-"), None);
    }
}
