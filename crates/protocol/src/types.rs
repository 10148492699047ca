use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// The visible window over the page document, in logical pixels.
///
/// `scroll_y` is the document offset at the top of the window. The fixed
/// navigation bar overlays the first `NAV_HEIGHT` pixels of the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, width: f64, height: f64) -> Self {
        Self {
            scroll_y,
            width,
            height,
        }
    }
}

/// One visibility report for one section, pushed by the viewport observer.
///
/// Transient: consumed by the navigation controller in the batch it
/// arrived in, never stored. `intersection_ratio` is the fraction of the
/// section's area inside the observation region (viewport minus the nav
/// bar overlay), in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityObservation {
    pub section: SharedStr,
    pub intersection_ratio: f64,
    pub is_intersecting: bool,
}

impl VisibilityObservation {
    pub fn new(section: impl Into<SharedStr>, intersection_ratio: f64) -> Self {
        Self {
            section: section.into(),
            intersection_ratio,
            is_intersecting: intersection_ratio > 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edges() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(29.9, 29.9)));
        assert!(!r.contains(Point::new(30.0, 30.0)));
        assert!(!r.contains(Point::new(9.9, 15.0)));
    }

    #[test]
    fn observation_intersecting_follows_ratio() {
        assert!(VisibilityObservation::new("home", 0.25).is_intersecting);
        assert!(!VisibilityObservation::new("home", 0.0).is_intersecting);
    }
}
