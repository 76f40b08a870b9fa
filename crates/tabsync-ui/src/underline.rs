use tabsync_core::{Underline, UnderlineRenderer};

use crate::signal::{Signal, signal};

/// Selected-tab indicator position.
pub struct UnderlineState {
    left: Signal<f32>,
    width: Signal<f32>,
}

impl Default for UnderlineState {
    fn default() -> Self {
        Self::new()
    }
}

impl UnderlineState {
    pub fn new() -> Self {
        Self {
            left: signal(0.0),
            width: signal(0.0),
        }
    }

    pub fn get(&self) -> Underline {
        Underline {
            left: self.left.get(),
            width: self.width.get(),
        }
    }

    pub fn left(&self) -> &Signal<f32> {
        &self.left
    }

    pub fn width(&self) -> &Signal<f32> {
        &self.width
    }
}

impl UnderlineRenderer for UnderlineState {
    fn set_underline(&self, left: f32, width: f32) {
        self.left.set_if_changed(left);
        self.width.set_if_changed(width.max(0.0));
    }
}
