//! Public scroll facade
//!
//! A `GoToInstance` is created once per application scope and shared by
//! every call site. `Scope` is the explicit provider: components receive it
//! and call `use_go_to` to get a `GoTo` bound to the provided instance.
//!
//! ```ignore
//! let instance = create_go_to(&GoToOverrides::new().duration_ms(200), &locale);
//! let scope = Scope::new(dom, frames).provide(instance);
//!
//! let go_to = use_go_to(&scope, GoToOverrides::new().offset(-16.0))?;
//! go_to.go("#comments", None).await?;
//! go_to.horizontal(320.0, None).await?;
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::dom::{Axis, Dom};
use crate::locale::{Locale, RtlFlag};
use crate::scroll::{plan_scroll, FrameScheduler, GoToOptions, GoToOverrides, Target};
use crate::{Error, Result};

/// Shared scroll configuration: direction plus resolved options
#[derive(Debug, Clone)]
pub struct GoToInstance {
    rtl: RtlFlag,
    options: GoToOptions,
}

impl GoToInstance {
    pub fn new(rtl: RtlFlag, options: GoToOptions) -> Self {
        Self { rtl, options }
    }

    /// Current text direction
    pub fn rtl(&self) -> bool {
        self.rtl.get()
    }

    pub fn options(&self) -> &GoToOptions {
        &self.options
    }
}

/// Build the shared instance from caller options layered over the defaults
pub fn create_go_to(overrides: &GoToOverrides, locale: &Locale) -> GoToInstance {
    GoToInstance::new(locale.is_rtl(), GoToOptions::default().merged(overrides))
}

/// Provider scope handed to components
pub struct Scope<D: ?Sized, F: ?Sized> {
    dom: Arc<D>,
    frames: Arc<F>,
    rtl: Option<RtlFlag>,
    go_to: Option<Arc<GoToInstance>>,
}

impl<D: ?Sized, F: ?Sized> Scope<D, F> {
    pub fn new(dom: Arc<D>, frames: Arc<F>) -> Self {
        Self {
            dom,
            frames,
            rtl: None,
            go_to: None,
        }
    }

    /// Provide the shared instance to everything using this scope
    pub fn provide(mut self, instance: impl Into<Arc<GoToInstance>>) -> Self {
        self.go_to = Some(instance.into());
        self
    }

    /// Text direction of the component using this scope
    pub fn with_rtl(mut self, rtl: RtlFlag) -> Self {
        self.rtl = Some(rtl);
        self
    }

    pub fn instance(&self) -> Option<&Arc<GoToInstance>> {
        self.go_to.as_ref()
    }

    pub fn dom(&self) -> &Arc<D> {
        &self.dom
    }

    pub fn frames(&self) -> &Arc<F> {
        &self.frames
    }
}

/// Bind a scroll function to the scope's shared instance
///
/// `overrides` sit between the instance options and per-call options.
pub fn use_go_to<D: ?Sized, F: ?Sized>(
    scope: &Scope<D, F>,
    overrides: GoToOverrides,
) -> Result<GoTo<D, F>> {
    let instance = scope.instance().cloned().ok_or(Error::MissingInstance)?;
    Ok(GoTo {
        instance,
        local_rtl: scope.rtl.clone(),
        overrides,
        dom: Arc::clone(&scope.dom),
        frames: Arc::clone(&scope.frames),
    })
}

/// Scroll function bound to a shared instance
pub struct GoTo<D: ?Sized, F: ?Sized> {
    instance: Arc<GoToInstance>,
    local_rtl: Option<RtlFlag>,
    overrides: GoToOverrides,
    dom: Arc<D>,
    frames: Arc<F>,
}

impl<D: ?Sized, F: ?Sized> Clone for GoTo<D, F> {
    fn clone(&self) -> Self {
        Self {
            instance: Arc::clone(&self.instance),
            local_rtl: self.local_rtl.clone(),
            overrides: self.overrides.clone(),
            dom: Arc::clone(&self.dom),
            frames: Arc::clone(&self.frames),
        }
    }
}

impl<D: ?Sized, F: ?Sized> fmt::Debug for GoTo<D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoTo")
            .field("instance", &self.instance)
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}

impl<D, F> GoTo<D, F>
where
    D: Dom + ?Sized,
    F: FrameScheduler + ?Sized,
{
    /// Right-to-left if either the instance or the local scope says so
    pub fn is_rtl(&self) -> bool {
        self.instance.rtl() || self.local_rtl.as_ref().is_some_and(RtlFlag::get)
    }

    /// Scroll vertically; resolves with the final scroll position
    pub async fn go(
        &self,
        target: impl Into<Target>,
        overrides: Option<GoToOverrides>,
    ) -> Result<f64> {
        self.scroll(target.into(), overrides, Axis::Vertical).await
    }

    /// Scroll horizontally; resolves with the final scroll position
    pub async fn horizontal(
        &self,
        target: impl Into<Target>,
        overrides: Option<GoToOverrides>,
    ) -> Result<f64> {
        self.scroll(target.into(), overrides, Axis::Horizontal).await
    }

    async fn scroll(
        &self,
        target: Target,
        overrides: Option<GoToOverrides>,
        axis: Axis,
    ) -> Result<f64> {
        let layer = match overrides {
            Some(call) => self.overrides.merge(&call),
            None => self.overrides.clone(),
        };
        let options = self.instance.options().merged(&layer);
        let rtl = self.is_rtl();
        debug!(scroll_target = ?target, rtl, "Scroll requested");

        let plan = plan_scroll(self.dom.as_ref(), &target, &options, axis, rtl)?;
        Ok(plan.run(self.dom.as_ref(), self.frames.as_ref()).await)
    }
}
