use crate::config::ColorConfig;
use crate::error::ColorError;

/// Largest value accepted by [`decode_hex`].
pub const HEX_MAX: u32 = 0x00FF_FFFF;

/// Split `0xRRGGBB` into its three bytes.
///
/// # Errors
/// Returns [`ColorError::InvalidHex`] if `hex` exceeds [`HEX_MAX`].
///
/// # Example
/// ```
/// use colorvec_core::hex::decode_hex;
/// assert_eq!(decode_hex(0x1e293b).unwrap(), [0x1e, 0x29, 0x3b]);
/// ```
pub fn decode_hex(hex: u32) -> Result<[u8; 3], ColorError> {
    if hex > HEX_MAX {
        log::debug!("decode_hex: {hex:#x} exceeds 0xffffff");
        return Err(ColorError::InvalidHex(format!("{hex:#x}")));
    }
    let [_, r, g, b] = hex.to_be_bytes();
    Ok([r, g, b])
}

/// Parse a hex color string with the default options.
///
/// # Errors
/// Returns [`ColorError::InvalidHex`] on malformed input.
pub fn parse_hex(input: &str) -> Result<[u8; 3], ColorError> {
    parse_hex_with(input, &ColorConfig::default())
}

/// Parse `RRGGBB` or the `RGB` short form.
///
/// A leading `#` is stripped when `config.allow_hash_prefix` is set. Each
/// short-form digit is doubled (`"f80"` == `"ff8800"`); the short form is
/// refused when `config.allow_short_hex` is off.
///
/// # Errors
/// Returns [`ColorError::InvalidHex`] carrying the rejected input.
///
/// # Example
/// ```
/// use colorvec_core::hex::parse_hex_with;
/// use colorvec_core::ColorConfig;
/// let strict = ColorConfig { allow_short_hex: false, ..ColorConfig::default() };
/// assert_eq!(parse_hex_with("#abc", &ColorConfig::default()).unwrap(), [0xaa, 0xbb, 0xcc]);
/// assert!(parse_hex_with("#abc", &strict).is_err());
/// ```
pub fn parse_hex_with(input: &str, config: &ColorConfig) -> Result<[u8; 3], ColorError> {
    let invalid = || {
        log::debug!("parse_hex: rejected {input:?}");
        ColorError::InvalidHex(input.to_string())
    };

    let digits = match input.strip_prefix('#') {
        Some(rest) if config.allow_hash_prefix => rest,
        _ => input,
    };

    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(invalid)?;

    match *nibbles.as_slice() {
        [r1, r0, g1, g0, b1, b0] => Ok([(r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0]),
        [r, g, b] if config.allow_short_hex => Ok([r * 17, g * 17, b * 17]),
        _ => Err(invalid()),
    }
}

/// Format three bytes as lower-case `rrggbb`.
#[must_use]
pub fn encode_hex(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    format!("{r:02x}{g:02x}{b:02x}")
}
