use std::borrow::Cow;

use gpui::{AssetSource, SharedString};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
pub struct SearchAssets;

impl AssetSource for SearchAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        Ok(<Self as RustEmbed>::get(path).map(|file| file.data))
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        Ok(<Self as RustEmbed>::iter()
            .filter(|entry| entry.starts_with(path))
            .map(|entry| SharedString::from(entry.into_owned()))
            .collect())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchIcon {
    Search,
    Clear,
}

impl SearchIcon {
    pub const fn path(self) -> &'static str {
        match self {
            SearchIcon::Search => "icons/search.svg",
            SearchIcon::Clear => "icons/x.svg",
        }
    }
}
