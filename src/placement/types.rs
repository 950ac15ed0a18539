//! Window and placement geometry types

use serde::{Deserialize, Serialize};

/// An on-screen window as reported by the window server
///
/// Thin DTO over the CG window enumeration (via xcap): the owning
/// application's name plus global bounds in top-left-origin coordinates.
/// Constructed in `placement::source`, consumed by the locator logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
    /// Application name that owns this window
    pub app_name: String,
    /// Window title
    pub title: String,
    /// Global x position (top-left origin)
    pub x: i32,
    /// Global y position (top-left origin)
    pub y: i32,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Whether the window is minimized
    pub is_minimized: bool,
}

impl WindowInfo {
    /// Returns just the window's rectangle
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// A window rectangle in the window server's top-left-origin space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// The computed companion rectangle
///
/// Expressed in bottom-left-origin display coordinates: `y` is the distance
/// from the bottom of the screen to the companion's lower edge. [`apply`]
/// flips the axis back before handing the rectangle to the windowing
/// toolkit.
///
/// [`apply`]: super::apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}
