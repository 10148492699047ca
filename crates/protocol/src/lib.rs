pub mod commands;
pub mod shared_str;
pub mod theme;
pub mod types;

pub use commands::{DeferredTask, NavEffect, RenderCommand, ScrollCommand, TextAlign};
pub use shared_str::SharedStr;
pub use theme::ThemeToken;
pub use types::{Point, Rect, Viewport, VisibilityObservation};

/// Height of the fixed navigation bar in logical pixels.
///
/// The viewport observer subtracts this from the top of the observation
/// region, and scroll targets are offset by it so a section's top edge
/// lands just below the bar.
pub const NAV_HEIGHT: f64 = 64.0;

/// Viewport width (logical pixels) at and above which the layout is
/// "desktop": the collapsible menu is force-closed and nav entries are
/// rendered inline.
pub const DESKTOP_BREAKPOINT: f64 = 768.0;
