//! L4 Atomic Layer: Easing curves for scroll animations
//!
//! Provides the built-in curves that map progress [0, 1] to output [0, 1],
//! the name → curve pattern table, and resolution of a configured easing.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A time-to-progress curve
pub type EasingFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Built-in easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Curve {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
}

impl Curve {
    pub const ALL: [Curve; 13] = [
        Curve::Linear,
        Curve::EaseInQuad,
        Curve::EaseOutQuad,
        Curve::EaseInOutQuad,
        Curve::EaseInCubic,
        Curve::EaseOutCubic,
        Curve::EaseInOutCubic,
        Curve::EaseInQuart,
        Curve::EaseOutQuart,
        Curve::EaseInOutQuart,
        Curve::EaseInQuint,
        Curve::EaseOutQuint,
        Curve::EaseInOutQuint,
    ];

    /// Pattern name of the curve (camelCase, as used in configuration)
    pub fn name(&self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::EaseInQuad => "easeInQuad",
            Curve::EaseOutQuad => "easeOutQuad",
            Curve::EaseInOutQuad => "easeInOutQuad",
            Curve::EaseInCubic => "easeInCubic",
            Curve::EaseOutCubic => "easeOutCubic",
            Curve::EaseInOutCubic => "easeInOutCubic",
            Curve::EaseInQuart => "easeInQuart",
            Curve::EaseOutQuart => "easeOutQuart",
            Curve::EaseInOutQuart => "easeInOutQuart",
            Curve::EaseInQuint => "easeInQuint",
            Curve::EaseOutQuint => "easeOutQuint",
            Curve::EaseInOutQuint => "easeInOutQuint",
        }
    }

    pub fn from_name(name: &str) -> Option<Curve> {
        Curve::ALL.into_iter().find(|curve| curve.name() == name)
    }

    /// Apply the curve to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value, clamped to [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => linear(t),
            Curve::EaseInQuad => ease_in_quad(t),
            Curve::EaseOutQuad => ease_out_quad(t),
            Curve::EaseInOutQuad => ease_in_out_quad(t),
            Curve::EaseInCubic => ease_in_cubic(t),
            Curve::EaseOutCubic => ease_out_cubic(t),
            Curve::EaseInOutCubic => ease_in_out_cubic(t),
            Curve::EaseInQuart => ease_in_quart(t),
            Curve::EaseOutQuart => ease_out_quart(t),
            Curve::EaseInOutQuart => ease_in_out_quart(t),
            Curve::EaseInQuint => ease_in_quint(t),
            Curve::EaseOutQuint => ease_out_quint(t),
            Curve::EaseInOutQuint => ease_in_out_quint(t),
        }
    }

    pub fn to_fn(self) -> EasingFn {
        Arc::new(move |t| self.apply(t))
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
pub fn linear(t: f64) -> f64 {
    t
}

#[inline]
pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

#[inline]
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

#[inline]
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[inline]
pub fn ease_in_cubic(t: f64) -> f64 {
    t.powi(3)
}

/// Cubic ease-out: f(t) = (t-1)³ + 1
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    (t - 1.0).powi(3) + 1.0
}

#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t.powi(3)
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

#[inline]
pub fn ease_in_quart(t: f64) -> f64 {
    t.powi(4)
}

#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (t - 1.0).powi(4)
}

#[inline]
pub fn ease_in_out_quart(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - 8.0 * (t - 1.0).powi(4)
    }
}

#[inline]
pub fn ease_in_quint(t: f64) -> f64 {
    t.powi(5)
}

/// Quintic ease-out: f(t) = 1 + (t-1)⁵
#[inline]
pub fn ease_out_quint(t: f64) -> f64 {
    1.0 + (t - 1.0).powi(5)
}

#[inline]
pub fn ease_in_out_quint(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t.powi(5)
    } else {
        1.0 + 16.0 * (t - 1.0).powi(5)
    }
}

/// Name → curve table consulted when the easing is given by name
#[derive(Clone, Default)]
pub struct EasingPatterns {
    entries: HashMap<String, EasingFn>,
}

impl EasingPatterns {
    /// Table holding every built-in curve
    pub fn builtin() -> Self {
        let mut patterns = Self::default();
        for curve in Curve::ALL {
            patterns.insert(curve.name(), curve.to_fn());
        }
        patterns
    }

    /// Add or replace a named curve
    pub fn insert(&mut self, name: impl Into<String>, easing: EasingFn) {
        self.entries.insert(name.into(), easing);
    }

    pub fn with(mut self, name: impl Into<String>, easing: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.insert(name, Arc::new(easing));
        self
    }

    pub fn get(&self, name: &str) -> Option<&EasingFn> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted pattern names
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Merge entries from `other` into this table; `other` wins on name clashes
    pub fn merge(&mut self, other: &EasingPatterns) {
        for (name, easing) in &other.entries {
            self.entries.insert(name.clone(), Arc::clone(easing));
        }
    }
}

impl fmt::Debug for EasingPatterns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Configured easing: a pattern name or a curve supplied directly
#[derive(Clone)]
pub enum Easing {
    Named(String),
    Custom(EasingFn),
}

impl Easing {
    pub fn custom(easing: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Easing::Custom(Arc::new(easing))
    }

    /// Human readable label for logs
    pub fn label(&self) -> &str {
        match self {
            Easing::Named(name) => name,
            Easing::Custom(_) => "<custom>",
        }
    }

    /// Resolve to a callable curve, looking names up in `patterns`
    pub fn resolve(&self, patterns: &EasingPatterns) -> Result<EasingFn> {
        match self {
            Easing::Custom(easing) => Ok(Arc::clone(easing)),
            Easing::Named(name) => patterns
                .get(name)
                .cloned()
                .ok_or_else(|| Error::EasingNotFound(name.clone())),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::from(Curve::EaseInOutCubic)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Easing::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<&str> for Easing {
    fn from(name: &str) -> Self {
        Easing::Named(name.to_string())
    }
}

impl From<String> for Easing {
    fn from(name: String) -> Self {
        Easing::Named(name)
    }
}

impl From<Curve> for Easing {
    fn from(curve: Curve) -> Self {
        Easing::Named(curve.name().to_string())
    }
}

impl Serialize for Easing {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Easing::Named(name) => serializer.serialize_str(name),
            Easing::Custom(_) => Err(serde::ser::Error::custom(
                "a custom easing function cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Easing::Named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for curve in Curve::ALL {
            assert!(curve.apply(0.0).abs() < 0.001, "{:?} at t=0", curve);
            assert!((curve.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", curve);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for curve in Curve::ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = curve.apply(t);
                assert!(v >= prev - 1e-9, "{:?} not monotonic at t={}", curve, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_in_out_midpoint() {
        for curve in [
            Curve::EaseInOutQuad,
            Curve::EaseInOutCubic,
            Curve::EaseInOutQuart,
            Curve::EaseInOutQuint,
        ] {
            assert!((curve.apply(0.5) - 0.5).abs() < 1e-9, "{:?}", curve);
        }
        assert!(Curve::EaseInCubic.apply(0.5) < 0.5);
        assert!(Curve::EaseOutCubic.apply(0.5) > 0.5);
    }

    #[test]
    fn test_names_round_trip() {
        for curve in Curve::ALL {
            assert_eq!(Curve::from_name(curve.name()), Some(curve));
        }
        assert_eq!(Curve::from_name("bounce"), None);
    }

    #[test]
    fn test_resolve_named_and_custom() {
        let patterns = EasingPatterns::builtin();
        let cubic = Easing::from("easeInCubic").resolve(&patterns).unwrap();
        assert!((cubic(0.5) - 0.125).abs() < 1e-9);

        let half = Easing::custom(|t| t / 2.0).resolve(&patterns).unwrap();
        assert!((half(1.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_unknown_name() {
        let Err(err) = Easing::from("doesNotExist").resolve(&EasingPatterns::builtin()) else {
            panic!("expected EasingNotFound");
        };
        assert!(matches!(err, Error::EasingNotFound(ref name) if name == "doesNotExist"));
        assert_eq!(err.to_string(), "Easing function \"doesNotExist\" not found.");
    }

    #[test]
    fn test_user_patterns_override_builtins() {
        let mut patterns = EasingPatterns::builtin();
        let user = EasingPatterns::default()
            .with("linear", |_| 1.0)
            .with("snap", |t| if t < 1.0 { 0.0 } else { 1.0 });
        patterns.merge(&user);

        assert_eq!(patterns.len(), Curve::ALL.len() + 1);
        let linear = Easing::from("linear").resolve(&patterns).unwrap();
        assert_eq!(linear(0.2), 1.0);
        assert!(patterns.contains("snap"));
    }
}
