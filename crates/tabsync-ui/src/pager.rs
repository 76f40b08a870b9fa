use tabsync_core::Pager;

use crate::signal::{Signal, signal};

/// Holds the page the synchronizer last asked the pager to show.
///
/// The host subscribes to [`PagerState::requested`] and starts its page
/// animation from there; the animation reports back through
/// `ScrollSynchronizer::on_pager_position_update`.
pub struct PagerState {
    requested: Signal<Option<usize>>,
}

impl Default for PagerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PagerState {
    pub fn new() -> Self {
        Self {
            requested: signal(None),
        }
    }

    pub fn requested(&self) -> &Signal<Option<usize>> {
        &self.requested
    }

    pub fn requested_page(&self) -> Option<usize> {
        self.requested.get()
    }
}

impl Pager for PagerState {
    fn go_to_page(&self, index: usize) {
        log::debug!("pager -> page {index}");
        self.requested.set(Some(index));
    }
}
