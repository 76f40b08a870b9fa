//! # Reconciliation
//!
//! [`ScrollSynchronizer`] sits between the pager and the tab strip. It listens
//! to three event streams and issues strip/underline/pager commands:
//!
//! - `on_pager_position_update`: continuous pager position. Drives the strip
//!   and the underline, unless a tab press is steering the transition.
//! - `on_tab_press`: the user tapped a tab. Starts a press-driven transition
//!   and asks the pager to animate there.
//! - `on_strip_scrolled`: the strip moved (either because we told it to or
//!   because the user dragged it). Bookkeeping only.
//!
//! A press stays in effect until the pager has been quiet for
//! [`SyncConfig::press_debounce`]; every pager update during a press pushes
//! that deadline back.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::collab::Collaborators;
use crate::config::SyncConfig;
use crate::debounce::Debounce;
use crate::geometry::{ScanDirection, TabLayout, TabRect};
use crate::state::{OffsetState, Tracked, TransitionPhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    NoTabs,
    OutOfRange,
    /// Exact ±1 jump from the last report; the pager occasionally emits these
    /// between two ordinary updates.
    Glitch,
}

/// What a pager position update ended up doing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PagerUpdate {
    Dropped(DropReason),
    /// Layout not measured far enough; only the reference position moved.
    Deferred,
    /// A press is steering the strip; no scroll was issued.
    Suppressed,
    /// The offset looked like a jitter jump and was not sent to the strip.
    Ignored { offset: f32 },
    Scrolled { offset: f32, interpolated: bool },
}

pub struct ScrollSynchronizer {
    layout: TabLayout,
    config: SyncConfig,
    clock: Arc<dyn Clock>,
    collab: Collaborators,
    phase: TransitionPhase,
    press_timer: Debounce,
    positions: Tracked,
    offsets: OffsetState,
}

impl ScrollSynchronizer {
    pub fn new(layout: TabLayout, collab: Collaborators) -> Self {
        Self::with_config(layout, collab, SyncConfig::default())
    }

    pub fn with_config(layout: TabLayout, collab: Collaborators, config: SyncConfig) -> Self {
        Self {
            layout,
            config,
            clock: Arc::new(SystemClock),
            collab,
            phase: TransitionPhase::Idle,
            press_timer: Debounce::new(config.press_debounce),
            positions: Tracked::default(),
            offsets: OffsetState::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn layout(&self) -> &TabLayout {
        &self.layout
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_page_press(&self) -> bool {
        self.phase.is_page_press()
    }

    pub fn positions(&self) -> &Tracked {
        &self.positions
    }

    pub fn offsets(&self) -> &OffsetState {
        &self.offsets
    }

    pub fn press_deadline(&self) -> Option<web_time::Instant> {
        self.press_timer.deadline()
    }

    /// Closes the press window if its deadline passed. Returns true on the
    /// tick that closed it.
    pub fn tick(&mut self) -> bool {
        self.expire_press()
    }

    /// Unmount: drops any pending press window.
    pub fn dispose(&mut self) {
        self.press_timer.cancel();
        self.phase = TransitionPhase::Idle;
    }

    pub fn on_tab_press(&mut self, page: usize) -> bool {
        self.expire_press();

        let count = self.layout.tab_count();
        if page >= count {
            log::warn!("tab press on page {page} ignored ({count} tabs)");
            return false;
        }

        self.phase = TransitionPhase::PressDriven;
        self.press_timer.arm(self.clock.now());

        let next = match self.layout.offset_for_position(page, 0.0) {
            Ok(offset) => offset,
            Err(e) => {
                log::trace!("press target not placed yet: {e}");
                self.offsets.reference
            }
        };
        self.positions.next = page as f32;
        self.offsets.begin_transition(next);
        log::debug!(
            "tab press -> page {page}: next offset {next:.1}, to_next {:?}",
            self.offsets.to_next
        );

        self.collab.pager.go_to_page(page);
        true
    }

    pub fn on_pager_position_update(&mut self, value: f32) -> PagerUpdate {
        self.expire_press();

        let Some(last) = self.layout.last_index() else {
            return PagerUpdate::Dropped(DropReason::NoTabs);
        };
        if !(0.0..=last as f32).contains(&value) {
            return PagerUpdate::Dropped(DropReason::OutOfRange);
        }
        if (value - self.positions.reference).abs() == 1.0 {
            log::trace!(
                "pager glitch {} -> {value} dropped",
                self.positions.reference
            );
            return PagerUpdate::Dropped(DropReason::Glitch);
        }

        if self.phase.is_page_press() {
            self.press_timer.arm(self.clock.now());
        }
        self.refresh_phase();

        let outcome = self.apply_position(value, last);
        self.positions.reference = value;
        self.mirror_reference_when_idle();
        log::trace!("pager {value:.3}: {outcome:?}");
        outcome
    }

    /// Strip scrolled to `offset`; updates `current` only.
    pub fn on_strip_scrolled(&mut self, offset: f32) -> bool {
        self.expire_press();

        // Some platforms report transient negative offsets while bouncing.
        if offset.is_nan() || offset < 0.0 {
            return false;
        }
        let direction = if offset > self.offsets.current {
            ScanDirection::Ascending
        } else {
            ScanDirection::Descending
        };
        let start = self.positions.current.max(0.0).floor() as usize;
        self.positions.current = self.layout.position_for_offset(offset, start, direction);
        self.offsets.current = offset;
        self.refresh_phase();
        true
    }

    pub fn on_tab_measured(&mut self, index: usize, rect: TabRect) {
        if self.layout.set_tab(index, rect) {
            self.remeasured();
        }
    }

    pub fn on_container_measured(&mut self, width: f32) {
        self.layout.set_container_width(width);
        self.remeasured();
    }

    pub fn on_strip_measured(&mut self, width: f32) {
        self.layout.set_strip_width(width);
        self.remeasured();
    }

    pub fn set_tab_count(&mut self, count: usize) {
        self.layout.set_tab_count(count);
        self.remeasured();
    }

    /// Re-applies the last pager position against the new measurements.
    fn remeasured(&mut self) {
        let Some(last) = self.layout.last_index() else {
            return;
        };
        let value = self.positions.reference;
        if !(0.0..=last as f32).contains(&value) {
            return;
        }
        let outcome = self.apply_position(value, last);
        self.mirror_reference_when_idle();
        log::trace!("layout changed, re-applied {value:.3}: {outcome:?}");
    }

    fn apply_position(&mut self, value: f32, last: usize) -> PagerUpdate {
        let index = (value.floor() as usize).min(last);
        let fraction = value - index as f32;

        if !self.layout.measurements_complete(index, index == last) {
            return PagerUpdate::Deferred;
        }
        let offset = match self.layout.offset_for_position(index, fraction) {
            Ok(offset) => offset,
            Err(e) => {
                log::trace!("pager {value:.3} deferred: {e}");
                return PagerUpdate::Deferred;
            }
        };

        let press = self.phase.is_page_press();
        let next_at_middle = self.offsets.is_next_at_middle(offset);
        let settled = self
            .offsets
            .is_current_at_next(self.config.settle_tolerance);
        // Hold still while the pager catches up with a press the strip has
        // already reached, or while its report sits behind the strip.
        let hold = press
            && (settled || (!next_at_middle && self.offsets.is_current_at_middle(offset)));

        let outcome = if hold {
            self.offsets.reference = self.offsets.current;
            PagerUpdate::Suppressed
        } else {
            self.update_tab_panel(offset, press && next_at_middle)
        };

        self.update_underline(index, fraction);
        outcome
    }

    fn update_tab_panel(&mut self, offset: f32, next_at_middle: bool) -> PagerUpdate {
        let converging = self.offsets.is_converging(offset);

        let (emitted, baseline) = if next_at_middle {
            (
                self.interpolate_offset(offset),
                self.offsets.reference_interpolated,
            )
        } else {
            (offset, self.offsets.reference)
        };
        let jump = (baseline - emitted).abs() >= self.config.jitter_threshold;

        let o = &mut self.offsets;
        // A jump right after an ignored one is taken as real motion.
        o.ignored = !o.ignored && !converging && jump;
        o.reference = offset;
        if next_at_middle {
            o.reference_interpolated = emitted;
        }

        if o.ignored {
            return PagerUpdate::Ignored { offset: emitted };
        }
        o.current = (o.current + emitted) / 2.0;
        self.collab.strip.scroll_to(emitted, false);
        PagerUpdate::Scrolled {
            offset: emitted,
            interpolated: next_at_middle,
        }
    }

    /// Moves the strip by how far the pager has progressed toward the press
    /// target, applied to the distance the strip itself still has to cover.
    fn interpolate_offset(&self, offset: f32) -> f32 {
        let o = &self.offsets;
        let bound = self.layout.right_bound_scroll();
        if o.to_next.reference <= f32::EPSILON {
            return o.next.clamp(0.0, bound);
        }
        let reference_ratio = ((o.next - offset) / o.to_next.reference).abs();
        (o.next + o.to_next.current * reference_ratio).clamp(0.0, bound)
    }

    fn update_underline(&self, index: usize, fraction: f32) {
        match self.layout.underline_at(index, fraction) {
            Ok(line) => self.collab.underline.set_underline(line.left, line.width),
            Err(e) => log::trace!("underline skipped: {e}"),
        }
    }

    fn refresh_phase(&mut self) {
        if self.phase == TransitionPhase::PressDriven
            && self
                .offsets
                .is_current_at_next(self.config.settle_tolerance)
        {
            log::debug!("strip reached press target at {:.1}", self.offsets.next);
            self.phase = TransitionPhase::Settling;
        }
    }

    fn expire_press(&mut self) -> bool {
        if !self.press_timer.fire_if_due(self.clock.now()) {
            return false;
        }
        log::debug!("press window closed ({:?})", self.phase);
        self.phase = TransitionPhase::Idle;
        self.mirror_reference_when_idle();
        true
    }

    fn mirror_reference_when_idle(&mut self) {
        if self.phase == TransitionPhase::Idle {
            self.positions.next = self.positions.reference;
            self.offsets.next = self.offsets.reference;
        }
    }
}
