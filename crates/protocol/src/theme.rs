use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
///
/// The protocol never carries raw colors; each renderer maps tokens to
/// its own palette (terminal colors, SVG hex values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,
    TextInverse,

    Accent,
    AccentHover,
    AccentSoft,

    // Navigation bar
    NavBackground,
    NavText,
    NavActive,
    MenuBackground,
    MenuBackdrop,

    // Section content
    HeroOverlay,
    HeroText,
    CardBackground,
    CardBorder,
    BadgePopular,
    RatingStar,

    // Contact form
    FieldBackground,
    FieldBorder,
    ButtonPrimary,
    ButtonDisabled,
    StatusSuccess,
    StatusError,
}
