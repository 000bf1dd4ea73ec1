use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SearchBoxError {
    #[error("background radius must be a finite, non-negative value, got {0}")]
    InvalidRadius(f32),
    #[error("content padding must be a finite, non-negative value, got {0}")]
    InvalidPadding(f32),
    #[error("width transition duration must be greater than zero")]
    ZeroDuration,
}

pub type SearchBoxResult<T> = Result<T, SearchBoxError>;

pub(crate) fn non_negative_finite(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
