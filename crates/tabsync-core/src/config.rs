use web_time::Duration;

/// Tunables for [`ScrollSynchronizer`](crate::ScrollSynchronizer).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SyncConfig {
    /// How long a tab press keeps steering the strip after the last pager update.
    pub press_debounce: Duration,
    /// Strip jumps at least this large (px) that move away from the target are treated as noise.
    pub jitter_threshold: f32,
    /// Distance (px) under which the strip counts as having reached the press target.
    pub settle_tolerance: f32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            press_debounce: Duration::from_millis(50),
            jitter_threshold: 100.0,
            settle_tolerance: 0.1,
        }
    }
}

impl SyncConfig {
    pub fn with_press_debounce(mut self, window: Duration) -> Self {
        self.press_debounce = window;
        self
    }

    pub fn with_jitter_threshold(mut self, px: f32) -> Self {
        self.jitter_threshold = px.max(0.0);
        self
    }

    pub fn with_settle_tolerance(mut self, px: f32) -> Self {
        self.settle_tolerance = px.max(0.0);
        self
    }
}
