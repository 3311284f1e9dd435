//! L3 Molecular Layer: Scroll animation
//!
//! Combines target resolution, offsets, clamping, easing and timing into
//! a per-frame state machine. `plan_scroll` does all validation and
//! geometry up front, so a bad easing name fails before any frame is
//! requested. `ScrollPlan::run` then drives frames until the animation
//! settles.

use std::fmt;

use tracing::{debug, trace};

use crate::dom::{Axis, Dom, ElementId};
use crate::goto::GoToInstance;
use crate::Result;

use super::clamp::clamp_target;
use super::easing::EasingFn;
use super::frame::FrameScheduler;
use super::offset::{element_offset, get_offset, layout_offset};
use super::options::{GoToOptions, GoToOverrides};
use super::target::{get_container, resolve_target, Container, ResolvedTarget, Target};
use super::timing::{progress, scroll_location};

/// One running animation
#[derive(Clone)]
pub struct ScrollRun {
    /// Animation start time on the scheduler's clock
    start_time: f64,
    /// Starting scroll position
    from: f64,
    /// Target scroll position
    to: f64,
    duration_ms: u64,
    easing: EasingFn,
    axis: Axis,
    container: ElementId,
}

impl fmt::Debug for ScrollRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollRun")
            .field("start_time", &self.start_time)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration_ms", &self.duration_ms)
            .field("axis", &self.axis)
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}

/// Animation state machine
#[derive(Debug, Clone, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Running(ScrollRun),
    /// Finished with the final scroll position
    Settled(f64),
}

impl AnimationState {
    /// Advance one frame at time `now`
    ///
    /// Writes the interpolated position to the container. Idle and settled
    /// states are left untouched.
    pub fn advance<D: Dom + ?Sized>(self, dom: &D, now: f64) -> AnimationState {
        match self {
            AnimationState::Running(run) => run.step(dom, now),
            other => other,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, AnimationState::Running(_))
    }

    pub fn settled(&self) -> Option<f64> {
        match self {
            AnimationState::Settled(value) => Some(*value),
            _ => None,
        }
    }
}

impl ScrollRun {
    fn step<D: Dom + ?Sized>(self, dom: &D, now: f64) -> AnimationState {
        let t = progress(now - self.start_time, self.duration_ms);
        let location = scroll_location(self.from, self.to, (self.easing)(t));
        dom.set_scroll_position(self.container, self.axis, location);
        trace!(progress = t, location, target_location = self.to, "Scroll frame");

        if t >= 1.0 {
            return AnimationState::Settled(self.to);
        }

        // Only forward travel is checked; a backward run finishes by time
        let current = dom.scroll_position(self.container, self.axis);
        let reached_end = dom.client_size(self.container, self.axis) + current
            >= dom.scroll_size(self.container, self.axis);
        if reached_end && self.to > current {
            debug!(
                position = current,
                target_location = self.to,
                "Scroll boundary reached before target"
            );
            return AnimationState::Settled(self.to);
        }

        AnimationState::Running(self)
    }
}

/// A validated scroll, ready to animate
#[derive(Clone)]
pub struct ScrollPlan {
    container: ElementId,
    axis: Axis,
    start: f64,
    target: f64,
    duration_ms: u64,
    easing: EasingFn,
}

impl fmt::Debug for ScrollPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollPlan")
            .field("container", &self.container)
            .field("axis", &self.axis)
            .field("start", &self.start)
            .field("target", &self.target)
            .field("duration_ms", &self.duration_ms)
            .finish_non_exhaustive()
    }
}

impl ScrollPlan {
    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn start_location(&self) -> f64 {
        self.start
    }

    pub fn target_location(&self) -> f64 {
        self.target
    }

    /// Already at the target; running schedules no frames
    pub fn is_noop(&self) -> bool {
        self.target == self.start
    }

    /// Leave the idle state, starting the clock at `start_time`
    pub fn begin(self, start_time: f64) -> AnimationState {
        if self.is_noop() {
            return AnimationState::Settled(self.target);
        }
        AnimationState::Running(ScrollRun {
            start_time,
            from: self.start,
            to: self.target,
            duration_ms: self.duration_ms,
            easing: self.easing,
            axis: self.axis,
            container: self.container,
        })
    }

    /// Drive frames until the animation settles; resolves with the final position
    pub async fn run<D, F>(self, dom: &D, frames: &F) -> f64
    where
        D: Dom + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let target = self.target;
        let mut state = self.begin(frames.now());

        loop {
            match state {
                AnimationState::Settled(value) => {
                    debug!(position = value, "Scroll settled");
                    return value;
                }
                AnimationState::Idle => return target,
                running @ AnimationState::Running(_) => {
                    let now = frames.next_frame().await;
                    state = running.advance(dom, now);
                }
            }
        }
    }
}

/// Resolve target, container, easing and positions for one scroll
///
/// Fails only when the easing name is not in the merged patterns.
pub fn plan_scroll<D: Dom + ?Sized>(
    dom: &D,
    target: &Target,
    options: &GoToOptions,
    axis: Axis,
    rtl: bool,
) -> Result<ScrollPlan> {
    let horizontal = axis.is_horizontal();
    let resolved = resolve_target(dom, target);
    let container = match (&options.container, resolved) {
        (Some(Container::Parent), ResolvedTarget::Element(el)) => dom
            .parent_element(el)
            .unwrap_or_else(|| get_container(dom, None)),
        (Some(Container::Target(container)), _) => get_container(dom, Some(container)),
        _ => get_container(dom, None),
    };

    let easing = options.resolve_easing()?;

    let mut target_location = match resolved {
        ResolvedTarget::Offset(offset) => {
            get_offset(dom, &Target::Offset(offset), horizontal, rtl)
        }
        ResolvedTarget::Element(el) => {
            let mut location = element_offset(dom, el, axis) - element_offset(dom, container, axis);
            if options.layout && !horizontal {
                if let Some(layout) = layout_offset(dom, el) {
                    location -= layout;
                }
            }
            location
        }
    };
    target_location += options.offset;
    let target_location = clamp_target(dom, container, target_location, rtl, horizontal);

    let start = dom.scroll_position(container, axis);

    debug!(
        axis = ?axis,
        container = %container,
        start,
        target_location,
        duration_ms = options.duration_ms,
        easing = options.easing.label(),
        "Planned scroll"
    );

    Ok(ScrollPlan {
        container,
        axis,
        start,
        target: target_location,
        duration_ms: options.duration_ms,
        easing,
    })
}

/// Animate a container to `target`
///
/// Options merge as library defaults < instance options < `overrides`.
/// Without an instance the defaults apply and the layout is left-to-right.
pub async fn scroll_to<D, F>(
    dom: &D,
    frames: &F,
    target: impl Into<Target>,
    overrides: &GoToOverrides,
    horizontal: bool,
    instance: Option<&GoToInstance>,
) -> Result<f64>
where
    D: Dom + ?Sized,
    F: FrameScheduler + ?Sized,
{
    let options = match instance {
        Some(instance) => instance.options().merged(overrides),
        None => GoToOptions::default().merged(overrides),
    };
    let rtl = instance.is_some_and(|instance| instance.rtl());
    let plan = plan_scroll(
        dom,
        &target.into(),
        &options,
        Axis::from_horizontal(horizontal),
        rtl,
    )?;
    Ok(plan.run(dom, frames).await)
}
