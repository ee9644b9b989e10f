use thiserror::Error;

/// Configuration errors raised while reading control rates from a host.
///
/// Control updates themselves never fail; these only surface at start-up.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    #[error("{field}: {raw:?} is not a number")]
    InvalidSpeed { field: &'static str, raw: String },
    #[error("{field}: speed must be finite, got {value}")]
    NonFiniteSpeed { field: &'static str, value: f32 },
}
