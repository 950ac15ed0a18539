//! Window Locator - finds the target application's window and parks the
//! companion directly beneath it
//!
//! Split into a DTO layer over the window server, pure placement math, and
//! the side-effecting apply/schedule pieces:
//!
//! - **types**: window descriptors and the computed rectangle
//! - **source**: window-server queries (xcap) behind a mockable trait
//! - **locator**: owner-name lookup, coordinate conversion, apply
//! - **schedule**: the deferred re-placement pass

mod locator;
mod schedule;
mod source;
mod types;

pub use locator::{apply, compute_placement, find_window_bounds, place_below, resolve_placement};
pub use schedule::schedule_place_below;
pub use source::{WindowSource, XcapSource};
pub use types::{Bounds, Placement, WindowInfo};
