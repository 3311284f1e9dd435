//! Minimal compound selector: `tag`, `#id`, `.class` and combinations
//! such as `section#intro.wide`. Combinators, attributes and pseudo-classes
//! are not supported and fail to parse.

/// Parsed compound selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Parse a selector, returning `None` for empty or unsupported syntax
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let mut selector = Selector::default();
        let mut rest = input;

        let tag_len = rest.find(['#', '.']).unwrap_or(rest.len());
        if tag_len > 0 {
            let tag = &rest[..tag_len];
            if !is_ident(tag) {
                return None;
            }
            selector.tag = Some(tag.to_ascii_lowercase());
            rest = &rest[tag_len..];
        }

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let len = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..len];
            if !is_ident(name) {
                return None;
            }
            match marker {
                '#' if selector.id.is_none() => selector.id = Some(name.to_string()),
                '.' => selector.classes.push(name.to_string()),
                _ => return None,
            }
            rest = &body[len..];
        }

        Some(selector)
    }

    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(ref want) = self.tag {
            if !tag.eq_ignore_ascii_case(want) {
                return false;
            }
        }
        if let Some(ref want) = self.id {
            if id != Some(want.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| classes.contains(class))
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_simple() {
        let sel = Selector::parse("#intro").unwrap();
        assert!(sel.matches("div", Some("intro"), &[]));
        assert!(!sel.matches("div", Some("outro"), &[]));

        let sel = Selector::parse(".card").unwrap();
        assert!(sel.matches("div", None, &classes(&["card", "wide"])));
        assert!(!sel.matches("div", None, &classes(&["wide"])));

        let sel = Selector::parse("SECTION").unwrap();
        assert!(sel.matches("section", None, &[]));
    }

    #[test]
    fn test_parse_compound() {
        let sel = Selector::parse("section#intro.wide.dark").unwrap();
        assert!(sel.matches("section", Some("intro"), &classes(&["dark", "wide"])));
        assert!(!sel.matches("div", Some("intro"), &classes(&["dark", "wide"])));
        assert!(!sel.matches("section", Some("intro"), &classes(&["wide"])));
    }

    #[test]
    fn test_parse_unsupported() {
        assert!(Selector::parse("").is_none());
        assert!(Selector::parse("div > p").is_none());
        assert!(Selector::parse("a[href]").is_none());
        assert!(Selector::parse("#a#b").is_none());
        assert!(Selector::parse("#").is_none());
        assert!(Selector::parse("li:first-child").is_none());
    }
}
