use std::collections::BTreeMap;

use crate::tokens::{ColorScale, PaletteCatalog, PaletteKey};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorScheme {
    Light,
    Dark,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColorValue {
    Palette { key: PaletteKey, shade: u8 },
    White,
    Black,
    Custom(String),
}

impl ColorValue {
    pub const fn palette(key: PaletteKey, shade: u8) -> Self {
        Self::Palette { key, shade }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchBoxTokens {
    pub bg: ColorValue,
    pub fg: ColorValue,
    pub tip_fg: ColorValue,
    pub placeholder: ColorValue,
    pub icon: ColorValue,
    pub border_focus: ColorValue,
    pub action_bg: ColorValue,
    pub action_fg: ColorValue,
    pub caret: ColorValue,
}

impl SearchBoxTokens {
    pub fn defaults_for(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self {
                bg: ColorValue::palette(PaletteKey::Gray, 1),
                fg: ColorValue::palette(PaletteKey::Dark, 9),
                tip_fg: ColorValue::palette(PaletteKey::Gray, 6),
                placeholder: ColorValue::palette(PaletteKey::Gray, 5),
                icon: ColorValue::palette(PaletteKey::Gray, 6),
                border_focus: ColorValue::palette(PaletteKey::Blue, 6),
                action_bg: ColorValue::palette(PaletteKey::Gray, 4),
                action_fg: ColorValue::White,
                caret: ColorValue::palette(PaletteKey::Blue, 6),
            },
            ColorScheme::Dark => Self {
                bg: ColorValue::palette(PaletteKey::Dark, 7),
                fg: ColorValue::palette(PaletteKey::Gray, 0),
                tip_fg: ColorValue::palette(PaletteKey::Gray, 5),
                placeholder: ColorValue::palette(PaletteKey::Dark, 2),
                icon: ColorValue::palette(PaletteKey::Gray, 4),
                border_focus: ColorValue::palette(PaletteKey::Blue, 5),
                action_bg: ColorValue::palette(PaletteKey::Dark, 4),
                action_fg: ColorValue::palette(PaletteKey::Gray, 0),
                caret: ColorValue::palette(PaletteKey::Blue, 4),
            },
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Theme {
    pub white: &'static str,
    pub black: &'static str,
    pub color_scheme: ColorScheme,
    pub palette: BTreeMap<PaletteKey, ColorScale>,
    pub search_box: SearchBoxTokens,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            white: "#fff",
            black: "#000",
            color_scheme: ColorScheme::Light,
            palette: PaletteCatalog::store(),
            search_box: SearchBoxTokens::defaults_for(ColorScheme::Light),
        }
    }
}

impl Theme {
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self.search_box = SearchBoxTokens::defaults_for(scheme);
        self
    }

    pub fn with_search_box(
        mut self,
        configure: impl FnOnce(SearchBoxTokens) -> SearchBoxTokens,
    ) -> Self {
        self.search_box = configure(self.search_box);
        self
    }

    pub fn resolve_color(&self, token: &ColorValue) -> String {
        match token {
            ColorValue::Palette { key, shade } => self
                .palette
                .get(key)
                .and_then(|scale| scale.get(*shade as usize))
                .unwrap_or(&self.black)
                .to_string(),
            ColorValue::White => self.white.to_string(),
            ColorValue::Black => self.black.to_string(),
            ColorValue::Custom(value) => value.clone(),
        }
    }

    pub fn resolve_hsla(&self, token: &ColorValue) -> gpui::Hsla {
        let raw = self.resolve_color(token);
        gpui::Rgba::try_from(raw.as_str())
            .map(Into::into)
            .unwrap_or_else(|_| gpui::black())
    }
}
