//! Locating the target window and computing the companion rectangle

use tauri::{PhysicalPosition, PhysicalSize, Position, Size, WebviewWindow};
use tracing::debug;

use super::source::WindowSource;
use super::types::{Bounds, Placement, WindowInfo};

/// Returns the bounds of the first on-screen window owned by `owner_name`
///
/// `windows` is expected in the window server's front-to-back z-order, so
/// when several windows share the owner the frontmost one wins. Minimized
/// windows never match. The owner name must match exactly.
pub fn find_window_bounds(windows: &[WindowInfo], owner_name: &str) -> Option<Bounds> {
    windows
        .iter()
        .find(|w| !w.is_minimized && w.app_name == owner_name)
        .map(WindowInfo::bounds)
}

/// Computes the companion rectangle sitting flush beneath `target`
///
/// `target` is in the window server's top-left-origin space; the result is
/// in bottom-left-origin display coordinates, so the vertical axis flips:
/// the companion's lower edge ends up `own_height` below the target's
/// bottom edge, measured from the bottom of the screen.
pub fn compute_placement(target: Bounds, screen_height: u32, own_height: u32) -> Placement {
    Placement {
        x: target.x,
        y: screen_height as i32 - target.y - target.height as i32 - own_height as i32,
        width: target.width,
        height: own_height,
    }
}

/// Resolves the companion rectangle for the current screen contents
///
/// `None` when no primary screen is available or no on-screen window is
/// owned by `owner_name`; the caller must then leave its window alone.
/// Also returns the screen height the placement was computed against.
pub fn resolve_placement(
    source: &dyn WindowSource,
    owner_name: &str,
    own_height: u32,
) -> Option<(Placement, u32)> {
    let screen_height = source.primary_screen_height()?;
    let target = find_window_bounds(&source.windows(), owner_name)?;
    let placement = compute_placement(target, screen_height, own_height);
    Some((placement, screen_height))
}

/// One full locate-and-place pass
///
/// Looks up the target window and the primary screen through `source` and
/// moves `window` directly beneath the target. When either lookup comes
/// back empty the window is left exactly where it was.
pub fn place_below(
    window: &WebviewWindow,
    source: &dyn WindowSource,
    owner_name: &str,
    own_height: u32,
) {
    match resolve_placement(source, owner_name, own_height) {
        Some((placement, screen_height)) => apply(window, placement, screen_height),
        None => debug!("No window owned by {:?} or no primary screen, leaving companion in place", owner_name),
    }
}

/// Moves `window` to `placement`, pins it above normal windows, and brings
/// it forward
///
/// Not a pure function: this reorders the window stacking. `placement` is
/// in bottom-left-origin display coordinates; the toolkit positions windows
/// from the top-left, so the vertical axis flips back here.
pub fn apply(window: &WebviewWindow, placement: Placement, screen_height: u32) {
    let top = screen_height as i32 - placement.y - placement.height as i32;

    let _ = window.set_size(Size::Physical(PhysicalSize {
        width: placement.width,
        height: placement.height,
    }));
    let _ = window.set_position(Position::Physical(PhysicalPosition {
        x: placement.x,
        y: top,
    }));
    let _ = window.set_always_on_top(true);
    let _ = window.set_focus();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::source::MockWindowSource;

    fn window(app_name: &str, x: i32, y: i32, width: u32, height: u32) -> WindowInfo {
        WindowInfo {
            app_name: app_name.to_string(),
            title: String::new(),
            x,
            y,
            width,
            height,
            is_minimized: false,
        }
    }

    #[test]
    fn test_find_matches_exact_owner_name() {
        let windows = vec![
            window("Safari", 0, 0, 1024, 768),
            window("Finder", 100, 50, 800, 600),
        ];

        let bounds = find_window_bounds(&windows, "Finder").unwrap();
        assert_eq!(
            bounds,
            Bounds {
                x: 100,
                y: 50,
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn test_find_returns_none_without_match() {
        let windows = vec![window("Safari", 0, 0, 1024, 768)];
        assert!(find_window_bounds(&windows, "Finder").is_none());
        assert!(find_window_bounds(&[], "Finder").is_none());
    }

    #[test]
    fn test_find_does_not_match_substrings() {
        let windows = vec![window("Finder Helper", 0, 0, 100, 100)];
        assert!(find_window_bounds(&windows, "Finder").is_none());
    }

    #[test]
    fn test_find_takes_frontmost_of_duplicates() {
        let windows = vec![
            window("Finder", 10, 10, 400, 300),
            window("Finder", 500, 500, 400, 300),
        ];

        let bounds = find_window_bounds(&windows, "Finder").unwrap();
        assert_eq!(bounds.x, 10);
        assert_eq!(bounds.y, 10);
    }

    #[test]
    fn test_find_skips_minimized_windows() {
        let mut minimized = window("Finder", 10, 10, 400, 300);
        minimized.is_minimized = true;
        let windows = vec![minimized, window("Finder", 500, 500, 400, 300)];

        let bounds = find_window_bounds(&windows, "Finder").unwrap();
        assert_eq!(bounds.x, 500);
    }

    #[test]
    fn test_compute_placement_flips_vertical_axis() {
        let target = Bounds {
            x: 100,
            y: 50,
            width: 800,
            height: 600,
        };

        let placement = compute_placement(target, 1200, 100);
        assert_eq!(
            placement,
            Placement {
                x: 100,
                y: 450,
                width: 800,
                height: 100
            }
        );
    }

    #[test]
    fn test_compute_placement_spans_target_width() {
        let target = Bounds {
            x: 0,
            y: 0,
            width: 1440,
            height: 900,
        };

        let placement = compute_placement(target, 900, 80);
        assert_eq!(placement.width, 1440);
        assert_eq!(placement.height, 80);
        assert_eq!(placement.x, 0);
        // Target fills the screen, so the companion's lower edge pokes
        // below the bottom of the display.
        assert_eq!(placement.y, -80);
    }

    #[test]
    fn test_resolve_placement_happy_path() {
        let mut source = MockWindowSource::new();
        source.expect_primary_screen_height().returning(|| Some(1200));
        source
            .expect_windows()
            .returning(|| vec![window("Finder", 100, 50, 800, 600)]);

        let (placement, screen_height) = resolve_placement(&source, "Finder", 100).unwrap();
        assert_eq!(screen_height, 1200);
        assert_eq!(placement.y, 450);
    }

    #[test]
    fn test_resolve_placement_none_without_target_window() {
        let mut source = MockWindowSource::new();
        source.expect_primary_screen_height().returning(|| Some(1200));
        source
            .expect_windows()
            .returning(|| vec![window("Safari", 0, 0, 1024, 768)]);

        assert!(resolve_placement(&source, "Finder", 100).is_none());
    }

    #[test]
    fn test_resolve_placement_none_without_primary_screen() {
        let mut source = MockWindowSource::new();
        source.expect_primary_screen_height().returning(|| None);

        assert!(resolve_placement(&source, "Finder", 100).is_none());
    }
}
