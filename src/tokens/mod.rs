use std::collections::BTreeMap;

pub const COLOR_STOPS: usize = 10;
pub type ColorScale = [&'static str; COLOR_STOPS];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PaletteKey {
    Dark,
    Gray,
    Blue,
}

pub const PALETTE_KEYS: [PaletteKey; 3] = [PaletteKey::Dark, PaletteKey::Gray, PaletteKey::Blue];

pub struct PaletteCatalog;

impl PaletteCatalog {
    pub const fn scale(key: PaletteKey) -> ColorScale {
        match key {
            PaletteKey::Dark => [
                "#C9C9C9", "#b8b8b8", "#828282", "#696969", "#424242", "#3b3b3b", "#2e2e2e",
                "#242424", "#1f1f1f", "#141414",
            ],
            PaletteKey::Gray => [
                "#f8f9fa", "#f1f3f5", "#e9ecef", "#dee2e6", "#ced4da", "#adb5bd", "#868e96",
                "#495057", "#343a40", "#212529",
            ],
            PaletteKey::Blue => [
                "#e7f5ff", "#d0ebff", "#a5d8ff", "#74c0fc", "#4dabf7", "#339af0", "#228be6",
                "#1c7ed6", "#1971c2", "#1864ab",
            ],
        }
    }

    pub fn store() -> BTreeMap<PaletteKey, ColorScale> {
        PALETTE_KEYS
            .into_iter()
            .map(|key| (key, Self::scale(key)))
            .collect()
    }
}
