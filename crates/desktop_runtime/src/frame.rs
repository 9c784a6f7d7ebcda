//! Rate limiting for pointer-driven gestures.

/// Tracks whether an animation-frame callback is already scheduled for the current gesture.
///
/// High-frequency pointer events only record their latest sample; the first one in a frame asks
/// the host for a callback and later ones reuse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Marks a frame as wanted. Returns `true` when the caller must schedule one.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Consumes the pending frame. Returns `false` for stray callbacks.
    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    /// Drops the pending frame. Returns `true` when the host must cancel its callback.
    pub fn cancel(&mut self) -> bool {
        self.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Wall-clock throttle for hover detection, driven by event timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverThrottle {
    last_ms: Option<f64>,
}

impl HoverThrottle {
    /// Returns `true` and records `now_ms` when at least `interval_ms` passed since the last
    /// check.
    pub fn ready(&mut self, now_ms: f64, interval_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
