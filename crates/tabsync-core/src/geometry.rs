//! # Strip geometry
//!
//! Pure mapping between pager positions and strip scroll offsets.
//!
//! A *position* is a fractional tab index: `2.25` means a quarter of the way
//! from tab 2 to tab 3. The strip offset for a position keeps the blend of the
//! two tabs centered in the viewport:
//!
//! ```text
//! centering = (container - (1 - f) * width[i] - f * width[i + 1]) / 2
//! offset    = left[i] + f * width[i] - centering
//! ```
//!
//! which is linear in `f`, so the strip slides smoothly even when adjacent tabs
//! have very different widths. [`TabLayout::position_for_offset`] is the exact
//! inverse away from the clamped ends of the strip.

use crate::error::GeometryError;

/// Horizontal extent of one tab inside the strip content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabRect {
    pub left: f32,
    pub width: f32,
    pub right: f32,
}

impl TabRect {
    pub fn new(left: f32, width: f32) -> Self {
        Self {
            left,
            width,
            right: left + width,
        }
    }
}

/// Left edge and width of the selected-tab underline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Underline {
    pub left: f32,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanDirection {
    Ascending,
    Descending,
}

/// Measurements reported by the layout pass. Any piece may still be missing.
#[derive(Clone, Debug, Default)]
pub struct TabLayout {
    tabs: Vec<Option<TabRect>>,
    container_width: Option<f32>,
    strip_width: Option<f32>,
}

impl TabLayout {
    pub fn new(tab_count: usize) -> Self {
        Self {
            tabs: vec![None; tab_count],
            container_width: None,
            strip_width: None,
        }
    }

    /// Fully measured layout from tab widths laid out edge to edge.
    pub fn from_widths(widths: &[f32], container_width: f32) -> Self {
        let mut left = 0.0;
        let tabs: Vec<Option<TabRect>> = widths
            .iter()
            .map(|&w| {
                let rect = TabRect::new(left, w);
                left = rect.right;
                Some(rect)
            })
            .collect();
        Self {
            tabs,
            container_width: Some(container_width),
            strip_width: Some(left),
        }
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.tabs.len().checked_sub(1)
    }

    /// Resizes the tab list; measurements of surviving tabs are kept.
    pub fn set_tab_count(&mut self, count: usize) {
        self.tabs.resize(count, None);
    }

    /// Records a tab measurement. Indices past the tab count are dropped;
    /// only [`TabLayout::set_tab_count`] changes the count.
    pub fn set_tab(&mut self, index: usize, rect: TabRect) -> bool {
        let count = self.tabs.len();
        let Some(slot) = self.tabs.get_mut(index) else {
            log::trace!("measurement for tab {index} dropped ({count} tabs)");
            return false;
        };
        *slot = Some(rect);
        true
    }

    pub fn set_container_width(&mut self, w: f32) {
        self.container_width = Some(w.max(0.0));
    }

    pub fn set_strip_width(&mut self, w: f32) {
        self.strip_width = Some(w.max(0.0));
    }

    pub fn tab(&self, index: usize) -> Option<&TabRect> {
        self.tabs.get(index).and_then(Option::as_ref)
    }

    pub fn container_width(&self) -> Option<f32> {
        self.container_width
    }

    pub fn strip_width(&self) -> Option<f32> {
        self.strip_width
    }

    /// Largest valid strip offset; zero until both widths are known.
    pub fn right_bound_scroll(&self) -> f32 {
        match (self.strip_width, self.container_width) {
            (Some(strip), Some(container)) => (strip - container).max(0.0),
            _ => 0.0,
        }
    }

    /// True when everything needed to place `index` (and blend toward the
    /// following tab) has been measured.
    pub fn measurements_complete(&self, index: usize, is_last_tab: bool) -> bool {
        self.tab(index).is_some()
            && (is_last_tab || self.tab(index + 1).is_some())
            && self.container_width.is_some()
            && self.strip_width.is_some()
    }

    fn measured_tab(&self, index: usize) -> Result<&TabRect, GeometryError> {
        if index >= self.tabs.len() {
            return Err(GeometryError::TabOutOfRange {
                index,
                count: self.tabs.len(),
            });
        }
        self.tab(index).ok_or(GeometryError::TabNotMeasured(index))
    }

    /// Strip offset that centers the blend of tab `index` and `index + 1`.
    pub fn offset_for_position(&self, index: usize, fraction: f32) -> Result<f32, GeometryError> {
        let container = self
            .container_width
            .ok_or(GeometryError::ContainerNotMeasured)?;
        if self.strip_width.is_none() {
            return Err(GeometryError::StripNotMeasured);
        }
        let offset = self.unclamped_offset(index, fraction, container)?;
        Ok(offset.clamp(0.0, self.right_bound_scroll()))
    }

    fn unclamped_offset(
        &self,
        index: usize,
        fraction: f32,
        container: f32,
    ) -> Result<f32, GeometryError> {
        let tab = self.measured_tab(index)?;
        let next_width = self.tab(index + 1).map_or(0.0, |t| t.width);

        let absolute_page_offset = fraction * tab.width;
        let centering = (container - (1.0 - fraction) * tab.width - fraction * next_width) / 2.0;
        Ok(tab.left + absolute_page_offset - centering)
    }

    /// Maps a strip offset back to a fractional position.
    ///
    /// Tab `i` owns the offsets between its own centered offset and the next
    /// tab's. The scan starts at `start` and walks toward the direction of
    /// motion, so tracking a live scroll only visits the tabs it crossed.
    /// Unmeasured tabs are skipped.
    pub fn position_for_offset(&self, offset: f32, start: usize, direction: ScanDirection) -> f32 {
        let Some(last) = self.last_index() else {
            return 0.0;
        };
        let Some(container) = self.container_width else {
            return 0.0;
        };
        let start = start.min(last);

        let found = match direction {
            ScanDirection::Ascending => (start..=last).find_map(|i| {
                let (from, span) = self.centered_span(i, container)?;
                (offset < from + span).then(|| i as f32 + (offset - from) / span)
            }),
            ScanDirection::Descending => (0..=start).rev().find_map(|i| {
                let (from, span) = self.centered_span(i, container)?;
                (from <= offset).then(|| i as f32 + (offset - from) / span)
            }),
        };

        let fallback = match direction {
            ScanDirection::Ascending => last as f32,
            ScanDirection::Descending => 0.0,
        };
        found.unwrap_or(fallback).clamp(0.0, last as f32)
    }

    fn centered_span(&self, index: usize, container: f32) -> Option<(f32, f32)> {
        let tab = self.tab(index)?;
        let next_width = self.tab(index + 1).map_or(0.0, |t| t.width);
        let span = (tab.width + next_width) / 2.0;
        if span <= 0.0 {
            return None;
        }
        let from = self.unclamped_offset(index, 0.0, container).ok()?;
        Some((from, span))
    }

    /// Underline for a position: blended between tab `index` and the next
    /// one, or pinned to the last tab.
    pub fn underline_at(&self, index: usize, fraction: f32) -> Result<Underline, GeometryError> {
        let tab = self.measured_tab(index)?;
        if Some(index) == self.last_index() {
            return Ok(Underline {
                left: tab.left,
                width: tab.right - tab.left,
            });
        }
        let next = self.measured_tab(index + 1)?;
        let left = fraction * next.left + (1.0 - fraction) * tab.left;
        let right = fraction * next.right + (1.0 - fraction) * tab.right;
        Ok(Underline {
            left,
            width: right - left,
        })
    }
}
