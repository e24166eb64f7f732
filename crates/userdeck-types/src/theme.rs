use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Guesses the terminal's scheme from a `COLORFGBG` value such as `15;0`.
    ///
    /// The last field is the background palette index; 0-6 and 8 are dark.
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        match background {
            0..=6 | 8 => Some(ThemeMode::Dark),
            7 | 9..=15 => Some(ThemeMode::Light),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_from_colorfgbg() {
        assert_eq!(ThemeMode::from_colorfgbg("15;0"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_colorfgbg("0;15"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_colorfgbg("12;default;8"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_colorfgbg("0;7"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_colorfgbg("0;default"), None);
        assert_eq!(ThemeMode::from_colorfgbg("0;200"), None);
        assert_eq!(ThemeMode::from_colorfgbg(""), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
