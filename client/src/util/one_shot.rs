//! Run-once latch for listeners that should fire on the first event only.

#[cfg(test)]
#[path = "one_shot_test.rs"]
mod one_shot_test;

/// Fires once, then runs every registered teardown.
///
/// Teardowns registered after the latch fired run immediately.
#[derive(Default)]
pub struct OneShot {
    fired: bool,
    teardown: Vec<Box<dyn FnOnce()>>,
}

impl OneShot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `f` to run when the latch fires.
    pub fn on_fire(&mut self, f: impl FnOnce() + 'static) {
        if self.fired {
            f();
        } else {
            self.teardown.push(Box::new(f));
        }
    }

    /// Fire the latch. Returns `true` only for the first call.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        for f in self.teardown.drain(..) {
            f();
        }
        true
    }

    #[must_use]
    pub fn fired(&self) -> bool {
        self.fired
    }
}
