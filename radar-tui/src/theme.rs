//! Parrot/neon theme tokens for the radar dashboard.
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (focus, selection, headers)
//! - **Positive**: Neon green (Completed, success)
//! - **Negative**: Hot pink (errors, delete prompts)
//! - **Warning**: Neon orange (On Hold, warnings)
//! - **Neutral**: Cool purple (In Progress, secondary info)
//! - **Muted**: Steel blue (hints, disabled)
//!
//! Tag colours come from the tag catalog's CSS-style strings
//! (`rgba(r,g,b,a)` or `#rrggbb`) and are parsed by [`tag_color`].

use ratatui::style::{Color, Modifier, Style};

use radar_core::domain::Status;

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

/// Parrot/neon theme for the dashboard
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: BACKGROUND,
            accent: ACCENT,
            positive: POSITIVE,
            negative: NEGATIVE,
            warning: WARNING,
            neutral: NEUTRAL,
            muted: MUTED,
            text_primary: Color::White,
            text_secondary: TEXT_SECONDARY,
        }
    }

    /// Colour for a record status.
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::InProgress => self.neutral,
            Status::Completed => self.positive,
            Status::OnHold => self.warning,
        }
    }
}

// ─── Style shorthands ───────────────────────────────────────────────

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn selected() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

pub fn status_style(status: Status) -> Style {
    Style::default().fg(Theme::default().status_color(status))
}

/// Parse a catalog style string into a terminal colour.
///
/// Catalog alphas are tuned for light web backgrounds (0.2), so the alpha is
/// ignored and the base colour used as-is. Returns `None` for anything that
/// is neither `rgba(...)`/`rgb(...)` nor `#rrggbb`.
pub fn tag_color(style: &str) -> Option<Color> {
    let s = style.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }
    let inner = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Style for a tag chip; unknown styles fall back to secondary text.
pub fn tag_style(style: &str) -> Style {
    Style::default().fg(tag_color(style).unwrap_or(TEXT_SECONDARY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_status_color() {
        let theme = Theme::default();
        assert_eq!(theme.status_color(Status::Completed), theme.positive);
        assert_eq!(theme.status_color(Status::OnHold), theme.warning);
        assert_eq!(theme.status_color(Status::InProgress), theme.neutral);
    }

    #[test]
    fn test_tag_color_parsing() {
        assert_eq!(tag_color("rgba(255,99,71,0.2)"), Some(Color::Rgb(255, 99, 71)));
        assert_eq!(tag_color("rgb(1, 2, 3)"), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(tag_color("#808080"), Some(Color::Rgb(128, 128, 128)));
        assert_eq!(tag_color("#80808"), None);
        assert_eq!(tag_color("background-color: red"), None);
        assert_eq!(tag_color("rgba(300,0,0,1)"), None);
    }

    #[test]
    fn test_tag_style_fallback() {
        assert_eq!(tag_style("nonsense").fg, Some(TEXT_SECONDARY));
    }
}
