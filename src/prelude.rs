pub use crate::SearchProvider;
pub use crate::components::{
    AnimatedSearchBox, InputMode, KeyboardRequest, SearchBox, SearchMetrics, SearchWidth,
};
pub use crate::error::{SearchBoxError, SearchBoxResult};
pub use crate::icon::SearchAssets;
pub use crate::motion::{Easing, MotionLevel, WidthMotion};
pub use crate::style::{Radius, Size};
pub use crate::theme::{ColorScheme, Theme};
