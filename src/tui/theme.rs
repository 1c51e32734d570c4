//! Dark and light palettes. The theme toggle swaps the whole palette,
//! mirroring the original widget's `dark-mode` CSS class; nothing is
//! persisted across runs.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    /// Border color for user message bubbles.
    pub user: Color,
    /// Border color for bot message bubbles.
    pub bot: Color,
    pub warning: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 24),
            panel: Color::Rgb(30, 30, 40),
            text: Color::Rgb(230, 230, 235),
            dim: Color::DarkGray,
            accent: Color::Rgb(232, 117, 0), // UTD orange
            user: Color::Cyan,
            bot: Color::Green,
            warning: Color::Yellow,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 248),
            panel: Color::Rgb(228, 228, 235),
            text: Color::Rgb(25, 25, 30),
            dim: Color::Gray,
            accent: Color::Rgb(199, 91, 18),
            user: Color::Blue,
            bot: Color::Rgb(0, 120, 60),
            warning: Color::Rgb(160, 110, 0),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_mode_selects_palette() {
        assert_eq!(Theme::for_mode(true), Theme::dark());
        assert_eq!(Theme::for_mode(false), Theme::light());
    }
}
