use thiserror::Error;

/// Errors returned by color construction and channel writes.
///
/// Every variant carries the rejected input so callers can report it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// RGB channel outside `[0, 255]`.
    #[error("RGB values must be between 0 and 255 (got {0})")]
    RgbOutOfRange(f32),

    /// Hue outside `[0, 360)`.
    #[error("HSV hue must be between 0 and 360 (got {0})")]
    HueOutOfRange(f32),

    /// Saturation outside `[0, 100]`.
    #[error("HSV saturation must be between 0 and 100 (got {0})")]
    SaturationOutOfRange(f32),

    /// Value outside `[0, 100]`.
    #[error("HSV value must be between 0 and 100 (got {0})")]
    ValueOutOfRange(f32),

    /// Alpha outside `[0, 1]`.
    #[error("alpha must be between 0 and 1 (got {0})")]
    AlphaOutOfRange(f32),

    /// Hex input that is neither `RRGGBB` nor `RGB`, or not hexadecimal.
    #[error("invalid hex color: {0:?} (expected 6 digits or a 3 digit triplet)")]
    InvalidHex(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
}
