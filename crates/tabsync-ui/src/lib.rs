//! Reference collaborators for `tabsync-core`.
//!
//! - [`StripState`]: clamped horizontal scroll offset of the tab strip.
//! - [`UnderlineState`]: left/width of the selected-tab indicator.
//! - [`PagerState`]: the page most recently requested from the pager.
//! - [`TabStrip`]: all three wired to a `ScrollSynchronizer`.
//!
//! Each keeps its values in a [`Signal`], so a renderer can subscribe instead
//! of polling.
//!
//! ```rust
//! use tabsync_ui::*;
//!
//! let mut tabs = TabStrip::new(&[100.0, 140.0, 80.0, 220.0], 240.0);
//! tabs.underline().left().subscribe(|x| log::trace!("underline at {x}"));
//!
//! tabs.pager_moved(0.5);
//! assert!(tabs.underline().get().left > 0.0);
//!
//! tabs.press(3);
//! assert_eq!(tabs.pager().requested_page(), Some(3));
//! ```

pub mod pager;
pub mod signal;
pub mod strip;
pub mod tab_strip;
pub mod underline;

pub use pager::PagerState;
pub use signal::{Signal, signal};
pub use strip::StripState;
pub use tab_strip::TabStrip;
pub use underline::UnderlineState;
