//! # Tab strip / pager synchronization
//!
//! A paged screen has two scroll surfaces that must agree: the content pager
//! and the strip of tabs above it. Swiping the pager should slide the strip
//! and its underline along; tapping a tab should animate the pager there
//! without the strip being dragged around by the pager's in-flight reports.
//!
//! The pieces:
//!
//! - [`TabLayout`]: measured tab rectangles and the pure position ↔ offset
//!   geometry.
//! - [`ScrollSynchronizer`]: the event-driven core. Owned by the hosting
//!   component, constructed with its [`Collaborators`].
//! - [`Clock`] / [`TestClock`]: time source for the press debounce.
//!
//! ```rust
//! use std::rc::Rc;
//! use tabsync_core::*;
//!
//! struct Log;
//! impl Pager for Log {
//!     fn go_to_page(&self, index: usize) { log::info!("page {index}"); }
//! }
//! impl StripView for Log {
//!     fn scroll_to(&self, offset: f32, _animated: bool) { log::info!("strip {offset}"); }
//! }
//! impl UnderlineRenderer for Log {
//!     fn set_underline(&self, left: f32, width: f32) { log::info!("line {left} {width}"); }
//! }
//!
//! let sink = Rc::new(Log);
//! let layout = TabLayout::from_widths(&[80.0, 120.0, 60.0, 200.0], 180.0);
//! let mut sync = ScrollSynchronizer::new(
//!     layout,
//!     Collaborators::new(sink.clone(), sink.clone(), sink),
//! );
//!
//! sync.on_pager_position_update(0.5);
//! sync.on_tab_press(3);
//! assert!(sync.is_page_press());
//! ```

pub mod clock;
pub mod collab;
pub mod config;
pub mod debounce;
pub mod error;
pub mod geometry;
pub mod state;
pub mod sync;

pub use clock::*;
pub use collab::*;
pub use config::*;
pub use debounce::*;
pub use error::*;
pub use geometry::*;
pub use state::*;
pub use sync::*;
