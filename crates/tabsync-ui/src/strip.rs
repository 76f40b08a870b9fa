use std::cell::Cell;

use tabsync_core::StripView;

use crate::signal::{Signal, signal};

/// Horizontal scroll state of the tab strip.
///
/// Offsets are clamped to `[0, content_width - viewport_width]`. The
/// synchronizer drives it through [`StripView::scroll_to`]; user drags go
/// through [`StripState::scroll_immediate`].
pub struct StripState {
    scroll_offset: Signal<f32>,
    viewport_width: Signal<f32>,
    content_width: Signal<f32>,
    last_animated: Cell<bool>,
}

impl Default for StripState {
    fn default() -> Self {
        Self::new()
    }
}

impl StripState {
    pub fn new() -> Self {
        Self {
            scroll_offset: signal(0.0),
            viewport_width: signal(0.0),
            content_width: signal(0.0),
            last_animated: Cell::new(false),
        }
    }

    pub fn set_viewport_width(&self, w: f32) {
        self.viewport_width.set(w.max(0.0));
        self.clamp();
    }

    pub fn set_content_width(&self, w: f32) {
        self.content_width.set(w.max(0.0));
        self.clamp();
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_width.get() - self.viewport_width.get()).max(0.0)
    }

    pub fn set_offset(&self, off: f32) {
        let max_off = self.max_offset();
        self.scroll_offset.set_if_changed(off.clamp(0.0, max_off));
    }

    fn clamp(&self) {
        let max_off = self.max_offset();
        self.scroll_offset.update(|o| {
            *o = o.clamp(0.0, max_off);
        });
    }

    pub fn get(&self) -> f32 {
        self.scroll_offset.get()
    }

    /// Offset signal, for renderers that want to follow the strip.
    pub fn offset(&self) -> &Signal<f32> {
        &self.scroll_offset
    }

    /// Whether the last programmatic scroll asked for animation.
    pub fn last_animated(&self) -> bool {
        self.last_animated.get()
    }

    /// Consume dx (pixels), clamp to bounds, return leftover.
    pub fn scroll_immediate(&self, dx: f32) -> f32 {
        let before = self.scroll_offset.get();
        let new_off = (before + dx).clamp(0.0, self.max_offset());
        self.scroll_offset.set_if_changed(new_off);
        dx - (new_off - before)
    }
}

impl StripView for StripState {
    fn scroll_to(&self, offset: f32, animated: bool) {
        self.last_animated.set(animated);
        self.set_offset(offset);
    }
}
