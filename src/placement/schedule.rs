//! Deferred re-placement
//!
//! The folder chooser drags the foreground away from the target window, so
//! the placement pass re-runs once shortly after the chooser opens. A
//! generation counter makes sure that when several passes get scheduled in
//! quick succession only the most recent one applies.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tauri::WebviewWindow;

use super::locator;
use super::source::XcapSource;

static GENERATION: AtomicU64 = AtomicU64::new(0);

fn next_generation() -> u64 {
    GENERATION.fetch_add(1, Ordering::SeqCst) + 1
}

fn generation_matches(token: u64) -> bool {
    GENERATION.load(Ordering::SeqCst) == token
}

/// Schedules one locate-and-place pass after `delay_ms`, then shows the
/// companion again
///
/// Superseded by any later call: only the most recently scheduled pass
/// runs. The placement itself still no-ops when the target window is gone.
pub fn schedule_place_below(
    window: WebviewWindow,
    owner_name: String,
    own_height: u32,
    delay_ms: u64,
) {
    let token = next_generation();

    tauri::async_runtime::spawn(async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        if !generation_matches(token) {
            return;
        }

        locator::place_below(&window, &XcapSource, &owner_name, own_height);
        let _ = window.show();
        let _ = window.set_focus();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_generation_supersedes_earlier() {
        let first = next_generation();
        let second = next_generation();

        assert!(!generation_matches(first));
        assert!(generation_matches(second));
    }
}
