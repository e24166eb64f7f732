//! Light and dark palettes for the user screen.

use ratatui::style::{Color, Modifier, Style};
use userdeck_types::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub card_bg: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub skeleton: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(0xEF, 0xF6, 0xFF),
            card_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
            border: Color::Rgb(0xE5, 0xE7, 0xEB),
            text: Color::Rgb(0x11, 0x18, 0x27),
            muted: Color::Rgb(0x6B, 0x72, 0x80),
            accent: Color::Rgb(0x3B, 0x82, 0xF6),
            on_accent: Color::Rgb(0xFF, 0xFF, 0xFF),
            skeleton: Color::Rgb(0xE5, 0xE7, 0xEB),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(0x11, 0x18, 0x27),
            card_bg: Color::Rgb(0x37, 0x41, 0x51),
            border: Color::Rgb(0x4B, 0x55, 0x63),
            text: Color::Rgb(0xFF, 0xFF, 0xFF),
            muted: Color::Rgb(0x9C, 0xA3, 0xAF),
            accent: Color::Rgb(0x3B, 0x82, 0xF6),
            on_accent: Color::Rgb(0xFF, 0xFF, 0xFF),
            skeleton: Color::Rgb(0x4B, 0x55, 0x63),
        }
    }

    pub fn screen(&self) -> Style {
        Style::default().bg(self.bg).fg(self.text)
    }

    pub fn card(&self) -> Style {
        Style::default().bg(self.card_bg).fg(self.text)
    }

    pub fn title(&self) -> Style {
        self.card().add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::ITALIC)
    }

    pub fn button(&self, enabled: bool) -> Style {
        let style = Style::default().bg(self.accent).fg(self.on_accent);
        if enabled {
            style.add_modifier(Modifier::BOLD)
        } else {
            style.add_modifier(Modifier::DIM)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_use_distinct_backgrounds() {
        let light = Theme::for_mode(ThemeMode::Light);
        let dark = Theme::for_mode(ThemeMode::Dark);
        assert_ne!(light.bg, dark.bg);
        assert_eq!(light.accent, dark.accent);
    }

    #[test]
    fn test_disabled_button_is_dimmed() {
        let theme = Theme::dark();
        assert!(theme.button(false).add_modifier.contains(Modifier::DIM));
        assert!(!theme.button(true).add_modifier.contains(Modifier::DIM));
    }
}
