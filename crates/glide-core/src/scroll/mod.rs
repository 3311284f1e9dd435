//! Smooth programmatic scrolling
//!
//! Animates a container's scroll position to an element, selector,
//! component or raw offset over a configurable duration and easing curve.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Built-in curves and the name → curve pattern table
//! - `timing` - Progress and interpolation helpers
//! - `options` - Scroll options and their layered merge
//! - `target` - Target descriptors and resolution
//! - `offset` - Cumulative element offsets
//! - `clamp` - Bounding targets to the scrollable range
//! - `frame` - Injected frame scheduling
//!
//! ## L3 Molecular Layer
//! - `animation` - Planning and the per-frame state machine
//!
//! # Usage
//!
//! ```ignore
//! use glide_core::dom::MemoryDocument;
//! use glide_core::scroll::{scroll_to, GoToOverrides, SteppedFrames};
//!
//! let doc = MemoryDocument::new(1280.0, 720.0);
//! let frames = SteppedFrames::with_fps(60);
//!
//! let overrides = GoToOverrides::new().duration_ms(200).easing("easeOutQuad");
//! let position = scroll_to(&doc, &frames, "#pricing", &overrides, false, None).await?;
//! ```

// L4 Atomic Layer
pub mod clamp;
pub mod easing;
pub mod frame;
pub mod offset;
pub mod options;
pub mod target;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

// Re-exports for convenient access
pub use animation::{plan_scroll, scroll_to, AnimationState, ScrollPlan, ScrollRun};
pub use clamp::{clamp_target, scroll_range};
pub use easing::{Curve, Easing, EasingFn, EasingPatterns};
pub use frame::{FrameScheduler, SteppedFrames, TokioFrames};
pub use offset::{element_offset, get_offset, layout_offset, LAYOUT_TOP_PROPERTY};
pub use options::{GoToOptions, GoToOverrides};
pub use target::{get_container, get_target, resolve_target, ComponentHandle, Container, ResolvedTarget, Target};
