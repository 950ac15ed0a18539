//! Window-server queries behind a mockable seam

use tracing::debug;
use xcap::{Monitor, Window};

use super::types::WindowInfo;

/// Source of on-screen window descriptors and screen geometry
///
/// The production implementation queries the window server through xcap;
/// tests feed the locator synthetic window lists instead.
#[cfg_attr(test, mockall::automock)]
pub trait WindowSource: Send + Sync {
    /// Currently on-screen windows, in the window server's front-to-back
    /// z-order
    fn windows(&self) -> Vec<WindowInfo>;

    /// Height of the primary screen in pixels, if one is available
    fn primary_screen_height(&self) -> Option<u32>;
}

/// Production source backed by the CG window enumeration (via xcap)
pub struct XcapSource;

impl WindowSource for XcapSource {
    fn windows(&self) -> Vec<WindowInfo> {
        let windows = match Window::all() {
            Ok(windows) => windows,
            Err(e) => {
                debug!("Window enumeration failed: {}", e);
                return Vec::new();
            }
        };

        windows
            .iter()
            .filter_map(|w| {
                Some(WindowInfo {
                    app_name: w.app_name().ok()?,
                    title: w.title().unwrap_or_default(),
                    x: w.x().ok()?,
                    y: w.y().ok()?,
                    width: w.width().ok()?,
                    height: w.height().ok()?,
                    is_minimized: w.is_minimized().unwrap_or(false),
                })
            })
            .collect()
    }

    fn primary_screen_height(&self) -> Option<u32> {
        let monitors = match Monitor::all() {
            Ok(monitors) => monitors,
            Err(e) => {
                debug!("Monitor enumeration failed: {}", e);
                return None;
            }
        };

        monitors
            .into_iter()
            .find(|m| m.is_primary().unwrap_or(false))?
            .height()
            .ok()
    }
}
