use crate::channel::Channel;
use crate::error::ColorError;

/// Convertit HSV → RGB normalisé. H ∈ [0, 360), S ∈ [0, 100], V ∈ [0, 100].
///
/// Returns `[r, g, b]` in `[0.0, 1.0]`.
///
/// # Errors
/// Returns the matching range error if any component is out of bounds.
///
/// # Example
/// ```
/// use colorvec_core::convert::hsv_to_rgb;
/// let [r, g, b] = hsv_to_rgb(120.0, 50.0, 50.0).unwrap();
/// assert!((r - 0.25).abs() < 1e-6);
/// assert!((g - 0.5).abs() < 1e-6);
/// assert!((b - 0.25).abs() < 1e-6);
/// ```
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Result<[f32; 3], ColorError> {
    let h = Channel::Hue.check(h)?;
    let s = Channel::Saturation.check(s)? / 100.0;
    let v = Channel::Value.check(v)? / 100.0;

    let c = s * v;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Ok([r + m, g + m, b + m])
}

/// Convertit RGB normalisé [0, 1] → HSV. Returns `[h°, s%, v%]`.
///
/// Hue is 0 for greys (`delta == 0`), saturation is 0 for black (`max == 0`).
///
/// # Example
/// ```
/// use colorvec_core::convert::rgb_to_hsv;
/// let [h, s, v] = rgb_to_hsv(1.0, 0.0, 0.0);
/// assert!(h.abs() < 1e-6);
/// assert!((s - 100.0).abs() < 1e-4);
/// assert!((v - 100.0).abs() < 1e-4);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> [f32; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        (60.0 * (g - b) / delta + 360.0) % 360.0
    } else if max == g {
        (60.0 * (b - r) / delta + 120.0) % 360.0
    } else {
        (60.0 * (r - g) / delta + 240.0) % 360.0
    };
    // fmod keeps the result below 360: a sum rounding up to 360 folds to 0.

    let s = if max == 0.0 { 0.0 } else { delta / max * 100.0 };

    [h, s, max * 100.0]
}

/// [`rgb_to_hsv`] for 8-bit channels.
///
/// # Example
/// ```
/// use colorvec_core::convert::rgb8_to_hsv;
/// let [h, s, v] = rgb8_to_hsv(0, 0, 255);
/// assert!((h - 240.0).abs() < 1e-3);
/// assert!((s - 100.0).abs() < 1e-3);
/// assert!((v - 100.0).abs() < 1e-3);
/// ```
#[must_use]
pub fn rgb8_to_hsv(r: u8, g: u8, b: u8) -> [f32; 3] {
    rgb_to_hsv(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    )
}
