//! L4 Atomic Layer: Scroll options and their layered merge
//!
//! `GoToOptions` is a fully resolved record. `GoToOverrides` is one partial
//! layer on top of it. Layers merge in order (defaults, shared instance,
//! facade, call site) and the later layer wins per key. Easing patterns
//! merge per entry.

use serde::{Deserialize, Serialize};

use super::easing::{Easing, EasingFn, EasingPatterns};
use super::target::Container;
use crate::Result;

pub const DEFAULT_DURATION_MS: u64 = 300;

/// Resolved scroll options
#[derive(Debug, Clone)]
pub struct GoToOptions {
    /// Container to scroll; `None` scrolls the document
    pub container: Option<Container>,
    /// Animation length in milliseconds; 0 jumps on the first frame
    pub duration_ms: u64,
    /// Subtract the fixed layout offset reported by the target's style
    pub layout: bool,
    /// Additive pixel adjustment
    pub offset: f64,
    pub easing: Easing,
    pub patterns: EasingPatterns,
}

impl Default for GoToOptions {
    fn default() -> Self {
        Self {
            container: None,
            duration_ms: DEFAULT_DURATION_MS,
            layout: false,
            offset: 0.0,
            easing: Easing::default(),
            patterns: EasingPatterns::builtin(),
        }
    }
}

impl GoToOptions {
    /// Copy of these options with `overrides` applied on top
    pub fn merged(&self, overrides: &GoToOverrides) -> GoToOptions {
        let mut merged = self.clone();
        if let Some(ref container) = overrides.container {
            merged.container = Some(container.clone());
        }
        if let Some(duration_ms) = overrides.duration_ms {
            merged.duration_ms = duration_ms;
        }
        if let Some(layout) = overrides.layout {
            merged.layout = layout;
        }
        if let Some(offset) = overrides.offset {
            merged.offset = offset;
        }
        if let Some(ref easing) = overrides.easing {
            merged.easing = easing.clone();
        }
        merged.patterns.merge(&overrides.patterns);
        merged
    }

    /// Resolve the configured easing against the merged patterns
    pub fn resolve_easing(&self) -> Result<EasingFn> {
        self.easing.resolve(&self.patterns)
    }
}

/// One partial layer of scroll options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoToOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    /// Extra named curves; functions cannot come from a config file
    #[serde(skip)]
    pub patterns: EasingPatterns,
}

impl GoToOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(mut self, container: impl Into<Container>) -> Self {
        self.container = Some(container.into());
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn layout(mut self, layout: bool) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn easing(mut self, easing: impl Into<Easing>) -> Self {
        self.easing = Some(easing.into());
        self
    }

    /// Register an extra named curve
    pub fn pattern(
        mut self,
        name: impl Into<String>,
        easing: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.patterns = self.patterns.with(name, easing);
        self
    }

    /// Combine two layers; `other` wins per key
    pub fn merge(&self, other: &GoToOverrides) -> GoToOverrides {
        let mut patterns = self.patterns.clone();
        patterns.merge(&other.patterns);
        GoToOverrides {
            container: other.container.clone().or_else(|| self.container.clone()),
            duration_ms: other.duration_ms.or(self.duration_ms),
            layout: other.layout.or(self.layout),
            offset: other.offset.or(self.offset),
            easing: other.easing.clone().or_else(|| self.easing.clone()),
            patterns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::easing::Curve;
    use crate::scroll::target::Target;

    #[test]
    fn test_defaults() {
        let options = GoToOptions::default();
        assert!(options.container.is_none());
        assert_eq!(options.duration_ms, 300);
        assert!(!options.layout);
        assert_eq!(options.offset, 0.0);
        assert_eq!(options.easing.label(), "easeInOutCubic");
        assert_eq!(options.patterns.len(), Curve::ALL.len());
    }

    #[test]
    fn test_later_layers_win() {
        let shared = GoToOverrides::new().duration_ms(500).offset(-10.0);
        let facade = GoToOverrides::new().offset(20.0).easing("linear");
        let call = GoToOverrides::new().easing(Curve::EaseOutQuad).layout(true);

        let options = GoToOptions::default()
            .merged(&shared)
            .merged(&facade.merge(&call));

        assert_eq!(options.duration_ms, 500);
        assert_eq!(options.offset, 20.0);
        assert!(options.layout);
        assert_eq!(options.easing.label(), "easeOutQuad");
    }

    #[test]
    fn test_merge_does_not_mutate_layers() {
        let base = GoToOptions::default().merged(&GoToOverrides::new().duration_ms(100));
        let _ = base.merged(&GoToOverrides::new().duration_ms(0).pattern("snap", |_| 1.0));

        assert_eq!(base.duration_ms, 100);
        assert!(!base.patterns.contains("snap"));
    }

    #[test]
    fn test_patterns_merge_deeply() {
        let shared = GoToOverrides::new().pattern("gentle", |t| t * 0.5);
        let call = GoToOverrides::new().pattern("snap", |_| 1.0).easing("gentle");

        let options = GoToOptions::default().merged(&shared.merge(&call));
        assert!(options.patterns.contains("gentle"));
        assert!(options.patterns.contains("snap"));
        assert!(options.patterns.contains("easeInOutCubic"));

        let ease = options.resolve_easing().unwrap();
        assert_eq!(ease(1.0), 0.5);
    }

    #[test]
    fn test_unknown_easing_fails_to_resolve() {
        let options = GoToOptions::default().merged(&GoToOverrides::new().easing("doesNotExist"));
        assert!(options.resolve_easing().is_err());
    }

    #[test]
    fn test_overrides_from_toml() {
        let overrides: GoToOverrides = toml::from_str(
            r#"
            container = "parent"
            duration_ms = 150
            easing = "easeOutQuint"
            "#,
        )
        .unwrap();

        assert!(matches!(overrides.container, Some(Container::Parent)));
        assert_eq!(overrides.duration_ms, Some(150));
        assert!(overrides.offset.is_none());
        assert_eq!(overrides.easing.as_ref().map(|e| e.label()), Some("easeOutQuint"));

        let selector = GoToOverrides::new().container("#main");
        assert!(matches!(
            selector.container,
            Some(Container::Target(Target::Selector(ref s))) if s == "#main"
        ));
    }
}
