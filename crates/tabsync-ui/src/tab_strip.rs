use std::rc::Rc;
use std::sync::Arc;

use tabsync_core::{
    Clock, Collaborators, PagerUpdate, ScrollSynchronizer, SyncConfig, TabLayout, TabRect,
};

use crate::pager::PagerState;
use crate::strip::StripState;
use crate::underline::UnderlineState;

/// A synchronizer wired to signal-backed strip, underline and pager state.
///
/// Strip movement caused by a command is fed back into the synchronizer the
/// same way a platform scroll view would report it.
pub struct TabStrip {
    sync: ScrollSynchronizer,
    strip: Rc<StripState>,
    underline: Rc<UnderlineState>,
    pager: Rc<PagerState>,
    reported_offset: f32,
}

impl TabStrip {
    /// Tabs laid out edge to edge with the given widths.
    pub fn new(tab_widths: &[f32], viewport_width: f32) -> Self {
        Self::with_config(tab_widths, viewport_width, SyncConfig::default())
    }

    pub fn with_config(tab_widths: &[f32], viewport_width: f32, config: SyncConfig) -> Self {
        let layout = TabLayout::from_widths(tab_widths, viewport_width);

        let strip = Rc::new(StripState::new());
        strip.set_viewport_width(viewport_width);
        strip.set_content_width(layout.strip_width().unwrap_or(0.0));
        let underline = Rc::new(UnderlineState::new());
        let pager = Rc::new(PagerState::new());

        let collab = Collaborators::new(pager.clone(), strip.clone(), underline.clone());
        Self {
            sync: ScrollSynchronizer::with_config(layout, collab, config),
            strip,
            underline,
            pager,
            reported_offset: 0.0,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.sync = self.sync.with_clock(clock);
        self
    }

    pub fn sync(&self) -> &ScrollSynchronizer {
        &self.sync
    }

    pub fn strip(&self) -> &Rc<StripState> {
        &self.strip
    }

    pub fn underline(&self) -> &Rc<UnderlineState> {
        &self.underline
    }

    pub fn pager(&self) -> &Rc<PagerState> {
        &self.pager
    }

    pub fn pager_moved(&mut self, position: f32) -> PagerUpdate {
        let out = self.sync.on_pager_position_update(position);
        self.report_strip();
        out
    }

    pub fn press(&mut self, page: usize) -> bool {
        self.sync.on_tab_press(page)
    }

    /// User drag on the strip; returns the part of `dx` that hit a bound.
    pub fn drag_strip(&mut self, dx: f32) -> f32 {
        let leftover = self.strip.scroll_immediate(dx);
        self.report_strip();
        leftover
    }

    pub fn measure_tab(&mut self, index: usize, rect: TabRect) {
        self.sync.on_tab_measured(index, rect);
        self.report_strip();
    }

    /// New content width of the strip, e.g. after a tab label grew.
    pub fn measure_strip(&mut self, width: f32) {
        self.strip.set_content_width(width);
        self.sync.on_strip_measured(width);
        self.report_strip();
    }

    pub fn resize_viewport(&mut self, width: f32) {
        self.strip.set_viewport_width(width);
        self.sync.on_container_measured(width);
        self.report_strip();
    }

    pub fn tick(&mut self) -> bool {
        self.sync.tick()
    }

    pub fn dispose(&mut self) {
        self.sync.dispose();
    }

    fn report_strip(&mut self) {
        let offset = self.strip.get();
        if offset != self.reported_offset {
            self.reported_offset = offset;
            self.sync.on_strip_scrolled(offset);
        }
    }
}
