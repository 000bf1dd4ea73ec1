pub mod components;
pub mod error;
pub mod icon;
pub mod id;
pub mod motion;
pub mod prelude;
pub mod provider;
pub mod style;
pub mod theme;
pub mod tokens;

pub use components::{AnimatedSearchBox, SearchBox};
pub use error::{SearchBoxError, SearchBoxResult};
pub use icon::SearchAssets;
pub use provider::SearchProvider;
