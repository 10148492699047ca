use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for each frame of the page.
/// Renderers consume the list sequentially — each command carries all
/// the data it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle, optionally with a text label and a hit
    /// identifier (for click hit-testing, e.g. nav entries and buttons).
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
        label: Option<SharedStr>,
        hit_id: Option<SharedStr>,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: SharedStr,
        color: ThemeToken,
        size: f64,
        align: TextAlign,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Begin a logical group (one page section). Renderers may use this
    /// for clipping, layering, or accessibility.
    BeginGroup {
        id: SharedStr,
        label: Option<SharedStr>,
    },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A scroll request issued by the navigation controller for the host to
/// execute. `smooth` asks for an animated scroll, not an instant jump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScrollCommand {
    /// Bring the named section into view.
    IntoView { section: SharedStr, smooth: bool },
    /// Scroll the document to an absolute top offset.
    ToOffset { top: f64, smooth: bool },
}

/// Work the host must run later, after a fixed delay.
///
/// The corrective scroll carries the section rather than a precomputed
/// offset: the target is resolved against the layout at fire time, which
/// may have settled since the navigation was issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeferredTask {
    /// Re-align the section's top edge just below the nav bar.
    CorrectiveScroll { section: SharedStr },
}

/// An effect emitted by a navigation action, in execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavEffect {
    Scroll(ScrollCommand),
    /// Fire-and-forget: no handle, no cancellation. Overlapping timers
    /// from rapid re-navigation all fire.
    Defer { delay_ms: u64, task: DeferredTask },
}
