//! Text direction state shared with the scroll facade

use tokio::sync::watch;

/// Reactive right-to-left flag
///
/// Reads always see the latest value published by the owning `Locale`,
/// and keep the last value once the locale is gone.
#[derive(Debug, Clone)]
pub struct RtlFlag(watch::Receiver<bool>);

impl RtlFlag {
    /// Flag that never changes
    pub fn fixed(rtl: bool) -> Self {
        let (_tx, rx) = watch::channel(rtl);
        Self(rx)
    }

    #[inline]
    pub fn get(&self) -> bool {
        *self.0.borrow()
    }
}

/// Owner of the current text direction
#[derive(Debug)]
pub struct Locale {
    rtl: watch::Sender<bool>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Locale {
    pub fn new(rtl: bool) -> Self {
        let (rtl, _) = watch::channel(rtl);
        Self { rtl }
    }

    /// Switch direction; every `RtlFlag` handed out observes the change
    pub fn set_rtl(&self, rtl: bool) {
        self.rtl.send_replace(rtl);
    }

    pub fn is_rtl(&self) -> RtlFlag {
        RtlFlag(self.rtl.subscribe())
    }
}
