//! Colour themes: presets, custom colours and the saved preference.

use std::fmt;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

pub const THEME_KEY: &str = "excelTheme";
pub const CUSTOM_THEME_KEY: &str = "customTheme";
pub const CUSTOM_THEME_NAME: &str = "custom";

pub const PRIMARY_VAR: &str = "--excel-green";
pub const DARK_PRIMARY_VAR: &str = "--excel-dark-green";
pub const ACCENT_VAR: &str = "--excel-accent";
pub const BACKGROUND_VAR: &str = "--excel-gray";
pub const GRID_VAR: &str = "--excel-grid";

const CUSTOM_DARKEN_PERCENT: f64 = 20.0;
const GRID_LIGHTEN_PERCENT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Moves every channel by `round(2.55 * percent)`, clamped to 0..=255.
    fn shift(self, percent: f64) -> Self {
        let amount = (2.55 * percent).round() as i32;
        let channel = |c: u8| (i32::from(c) + amount).clamp(0, 255) as u8;
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }

    pub fn darken(self, percent: f64) -> Self {
        self.shift(-percent)
    }

    pub fn lighten(self, percent: f64) -> Self {
        self.shift(percent)
    }
}

impl FromStr for Rgb {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Rgb::from_u32)
            .map_err(|_| DomainError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

pub fn darken_color(hex: &str, percent: f64) -> Result<String, DomainError> {
    Ok(hex.parse::<Rgb>()?.darken(percent).to_hex())
}

pub fn lighten_color(hex: &str, percent: f64) -> Result<String, DomainError> {
    Ok(hex.parse::<Rgb>()?.lighten(percent).to_hex())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary: Rgb,
    pub dark_primary: Rgb,
    pub accent: Rgb,
    pub background: Rgb,
}

impl ThemePalette {
    pub fn custom(colors: &CustomColors) -> Result<Self, DomainError> {
        let primary: Rgb = colors.primary.parse()?;
        Ok(Self {
            primary,
            dark_primary: primary.darken(CUSTOM_DARKEN_PERCENT),
            accent: colors.accent.parse()?,
            background: colors.background.parse()?,
        })
    }

    pub fn grid(&self) -> Rgb {
        self.background.lighten(GRID_LIGHTEN_PERCENT)
    }

    /// CSS custom properties to set on the document root.
    pub fn css_variables(&self) -> [(&'static str, String); 5] {
        [
            (PRIMARY_VAR, self.primary.to_hex()),
            (DARK_PRIMARY_VAR, self.dark_primary.to_hex()),
            (ACCENT_VAR, self.accent.to_hex()),
            (BACKGROUND_VAR, self.background.to_hex()),
            (GRID_VAR, self.grid().to_hex()),
        ]
    }

    /// `:root { ... }` block with the same variables.
    pub fn to_css(&self) -> String {
        let body: String = self
            .css_variables()
            .iter()
            .map(|(name, value)| format!("    {}: {};\n", name, value))
            .collect();
        format!(":root {{\n{}}}\n", body)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum ThemePreset {
    #[default]
    #[display("excel")]
    Excel,
    #[display("blue")]
    Blue,
    #[display("purple")]
    Purple,
    #[display("orange")]
    Orange,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 4] = [
        ThemePreset::Excel,
        ThemePreset::Blue,
        ThemePreset::Purple,
        ThemePreset::Orange,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Excel => "Excel Green",
            ThemePreset::Blue => "Ocean Blue",
            ThemePreset::Purple => "Royal Purple",
            ThemePreset::Orange => "Sunset Orange",
        }
    }

    pub fn palette(self) -> ThemePalette {
        let [primary, dark_primary, accent, background] = match self {
            ThemePreset::Excel => [0x217346, 0x1a5c38, 0x4472c4, 0xf3f3f3],
            ThemePreset::Blue => [0x2171b5, 0x08519c, 0x6baed6, 0xf0f8ff],
            ThemePreset::Purple => [0x6a51a3, 0x54278f, 0x9e9ac8, 0xf8f7ff],
            ThemePreset::Orange => [0xfd8d3c, 0xe6550d, 0xfdae6b, 0xfff5eb],
        };
        ThemePalette {
            primary: Rgb::from_u32(primary),
            dark_primary: Rgb::from_u32(dark_primary),
            accent: Rgb::from_u32(accent),
            background: Rgb::from_u32(background),
        }
    }
}

impl FromStr for ThemePreset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemePreset::ALL
            .into_iter()
            .find(|preset| preset.to_string() == s)
            .ok_or_else(|| DomainError::Storage(format!("unknown theme preset: {}", s)))
    }
}

/// The three colours a reader picks for a custom theme, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColors {
    pub primary: String,
    pub accent: String,
    pub background: String,
}

impl Default for CustomColors {
    fn default() -> Self {
        let palette = ThemePreset::Excel.palette();
        Self {
            primary: palette.primary.to_hex(),
            accent: palette.accent.to_hex(),
            background: palette.background.to_hex(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemePreference {
    Preset(ThemePreset),
    Custom(CustomColors),
}

impl Default for ThemePreference {
    fn default() -> Self {
        ThemePreference::Preset(ThemePreset::default())
    }
}

impl ThemePreference {
    /// Value written under [`THEME_KEY`].
    pub fn storage_name(&self) -> String {
        match self {
            ThemePreference::Preset(preset) => preset.to_string(),
            ThemePreference::Custom(_) => CUSTOM_THEME_NAME.to_string(),
        }
    }

    pub fn palette(&self) -> Result<ThemePalette, DomainError> {
        match self {
            ThemePreference::Preset(preset) => Ok(preset.palette()),
            ThemePreference::Custom(colors) => ThemePalette::custom(colors),
        }
    }

    /// Whether `preset`'s control should be marked active.
    pub fn is_active(&self, preset: ThemePreset) -> bool {
        matches!(self, ThemePreference::Preset(active) if *active == preset)
    }

    /// Rebuilds a saved preference from the two storage entries.
    ///
    /// Nothing saved yields the default. Unknown names, a `custom` entry
    /// without colours, or colours that do not parse are reported as
    /// [`DomainError::Storage`] so the caller can fall back to the default.
    pub fn restore(name: Option<&str>, custom: Option<CustomColors>) -> Result<Self, DomainError> {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            return Ok(Self::default());
        };
        if name == CUSTOM_THEME_NAME {
            let colors = custom.ok_or_else(|| {
                DomainError::Storage("custom theme selected but no colors saved".into())
            })?;
            ThemePalette::custom(&colors)
                .map_err(|e| DomainError::Storage(format!("saved custom theme: {}", e)))?;
            return Ok(ThemePreference::Custom(colors));
        }
        name.parse().map(ThemePreference::Preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex7(s: &str) -> bool {
        s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn darken_and_lighten_produce_valid_hex() {
        let dark = darken_color("#217346", 20.0).unwrap();
        let light = lighten_color("#f3f3f3", 5.0).unwrap();
        assert!(is_hex7(&dark));
        assert!(is_hex7(&light));
        // 2.55 * 20 rounds to 51, 2.55 * 5 rounds to 13
        assert_eq!(dark, "#004013");
        assert_eq!(light, "#ffffff");
    }

    #[test]
    fn channels_clamp_at_both_ends() {
        assert_eq!(darken_color("#101010", 50.0).unwrap(), "#000000");
        assert_eq!(lighten_color("#f0f0f0", 50.0).unwrap(), "#ffffff");
        assert_eq!(lighten_color("#000000", 0.0).unwrap(), "#000000");
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(darken_color("#12345", 10.0).is_err());
        assert!(darken_color("#zzzzzz", 10.0).is_err());
        assert!(lighten_color("", 10.0).is_err());
        assert_eq!("217346".parse::<Rgb>().unwrap().to_hex(), "#217346");
    }

    #[test]
    fn blue_preset_sets_primary_and_is_the_only_active_one() {
        let pref = ThemePreference::Preset(ThemePreset::Blue);
        let vars = pref.palette().unwrap().css_variables();
        assert_eq!(vars[0], (PRIMARY_VAR, "#2171b5".to_string()));
        let active: Vec<ThemePreset> = ThemePreset::ALL
            .into_iter()
            .filter(|p| pref.is_active(*p))
            .collect();
        assert_eq!(active, vec![ThemePreset::Blue]);
    }

    #[test]
    fn custom_theme_derives_dark_primary_and_grid() {
        let colors = CustomColors {
            primary: "#217346".into(),
            accent: "#4472c4".into(),
            background: "#e0e0e0".into(),
        };
        let palette = ThemePalette::custom(&colors).unwrap();
        assert_eq!(palette.dark_primary.to_hex(), "#004013");
        assert_eq!(palette.grid().to_hex(), "#ededed");
        assert!(!ThemePreference::Custom(colors).is_active(ThemePreset::Excel));
    }

    #[test]
    fn restore_handles_missing_and_corrupt_entries() {
        assert_eq!(ThemePreference::restore(None, None), Ok(ThemePreference::default()));
        assert_eq!(
            ThemePreference::restore(Some("purple"), None),
            Ok(ThemePreference::Preset(ThemePreset::Purple))
        );
        assert!(ThemePreference::restore(Some("neon"), None).is_err());
        assert!(ThemePreference::restore(Some("custom"), None).is_err());

        let broken = CustomColors {
            primary: "green".into(),
            ..CustomColors::default()
        };
        assert!(ThemePreference::restore(Some("custom"), Some(broken)).is_err());
    }

    #[test]
    fn restore_accepts_saved_custom_colors() {
        let colors = CustomColors {
            primary: "#123456".into(),
            accent: "#abcdef".into(),
            background: "#fafafa".into(),
        };
        let json = serde_json::to_string(&colors).unwrap();
        let saved: CustomColors = serde_json::from_str(&json).unwrap();
        assert_eq!(
            ThemePreference::restore(Some("custom"), Some(saved)),
            Ok(ThemePreference::Custom(colors))
        );
    }

    #[test]
    fn storage_names_round_trip_for_presets() {
        for preset in ThemePreset::ALL {
            let pref = ThemePreference::Preset(preset);
            assert_eq!(
                ThemePreference::restore(Some(&pref.storage_name()), None),
                Ok(pref)
            );
        }
    }
}
