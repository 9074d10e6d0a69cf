use std::fmt;
use std::str::FromStr;

use crate::channel::{Channel, ChannelMut};
use crate::config::ColorConfig;
use crate::convert::{hsv_to_rgb, rgb_to_hsv};
use crate::error::ColorError;
use crate::hex;

/// Couleur RGBA, canaux normalisés [0, 1].
///
/// The stored triple can be read and written as RGB (0–255) or as HSV
/// (hue in degrees, saturation and value in percent). HSV is always derived
/// from the stored RGB, so both views stay consistent after any write.
///
/// # Example
/// ```
/// use colorvec_core::Color;
/// let mut c = Color::from_hsv(120.0, 50.0, 50.0, 1.0).unwrap();
/// assert!((c.x() - 0.25).abs() < 1e-6);
/// assert!((c.green() - 127.5).abs() < 1e-3);
///
/// c.set_hue(180.0).unwrap();
/// assert!((c.blue() - 127.5).abs() < 1e-3);
/// assert!((c.saturation() - 50.0).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    data: [f32; 4],
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// Generates the named per-channel accessors.
macro_rules! channel_accessors {
    ($($channel:ident => $get:ident, $set:ident, $add:ident, $view:ident;)*) => {
        $(
            #[doc = concat!("Current ", stringify!($get), " on its public scale.")]
            #[inline]
            #[must_use]
            pub fn $get(&self) -> f32 {
                self.get(Channel::$channel)
            }

            #[doc = concat!("Assign ", stringify!($get), ", returning the stored value.")]
            ///
            /// # Errors
            /// Returns the channel's range error; the color is left unchanged.
            pub fn $set(&mut self, value: f32) -> Result<f32, ColorError> {
                self.set(Channel::$channel, value)
            }

            #[doc = concat!("Add `delta` to ", stringify!($get), ", returning the new value.")]
            ///
            /// # Errors
            /// Returns the channel's range error; the color is left unchanged.
            pub fn $add(&mut self, delta: f32) -> Result<f32, ColorError> {
                self.offset(Channel::$channel, delta)
            }

            #[doc = concat!("Mutable view of ", stringify!($get), " for compound arithmetic.")]
            pub fn $view(&mut self) -> ChannelMut<'_> {
                self.channel_mut(Channel::$channel)
            }
        )*
    };
}

impl Color {
    /// Raw normalized channels, not validated.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Grey from a raw normalized level, opaque.
    #[must_use]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, 1.0)
    }

    /// Grey from a raw normalized level with alpha.
    #[must_use]
    pub const fn splat_with_alpha(v: f32, alpha: f32) -> Self {
        Self::new(v, v, v, alpha)
    }

    /// Build from 0–255 channels and an alpha in [0, 1].
    ///
    /// # Errors
    /// Returns [`ColorError::RgbOutOfRange`] or [`ColorError::AlphaOutOfRange`].
    ///
    /// # Example
    /// ```
    /// use colorvec_core::{Color, ColorError};
    /// let c = Color::from_rgb(255.0, 0.0, 51.0, 0.5).unwrap();
    /// assert_eq!(c.to_array(), [1.0, 0.0, 0.2, 0.5]);
    /// assert_eq!(Color::from_rgb(0.0, 300.0, 0.0, 1.0), Err(ColorError::RgbOutOfRange(300.0)));
    /// ```
    pub fn from_rgb(r: f32, g: f32, b: f32, alpha: f32) -> Result<Self, ColorError> {
        let r = Channel::Red.check(r)?;
        let g = Channel::Green.check(g)?;
        let b = Channel::Blue.check(b)?;
        let alpha = Channel::Alpha.check(alpha)?;
        Ok(Self::new(r / 255.0, g / 255.0, b / 255.0, alpha))
    }

    /// Build from 8-bit channels, opaque. Cannot fail.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    /// Grey from one 0–255 level applied to r, g and b.
    ///
    /// # Errors
    /// Returns [`ColorError::RgbOutOfRange`] or [`ColorError::AlphaOutOfRange`].
    pub fn from_gray(v: f32, alpha: f32) -> Result<Self, ColorError> {
        let v = Channel::Red.check(v)?;
        let alpha = Channel::Alpha.check(alpha)?;
        Ok(Self::splat_with_alpha(v / 255.0, alpha))
    }

    /// Build from hue (degrees), saturation and value (percent).
    ///
    /// # Errors
    /// Returns the HSV range errors or [`ColorError::AlphaOutOfRange`].
    pub fn from_hsv(h: f32, s: f32, v: f32, alpha: f32) -> Result<Self, ColorError> {
        let [r, g, b] = hsv_to_rgb(h, s, v)?;
        let alpha = Channel::Alpha.check(alpha)?;
        Ok(Self::new(r, g, b, alpha))
    }

    /// Build from `0xRRGGBB`, opaque.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidHex`] if `hex` exceeds `0xFFFFFF`.
    ///
    /// # Example
    /// ```
    /// use colorvec_core::Color;
    /// let c = Color::from_hex(0xff8000).unwrap();
    /// assert_eq!(c.to_rgb8(), [255, 128, 0]);
    /// assert!(Color::from_hex(0x1_000_000).is_err());
    /// ```
    pub fn from_hex(hex: u32) -> Result<Self, ColorError> {
        let [r, g, b] = hex::decode_hex(hex)?;
        Ok(Self::from_rgb8(r, g, b))
    }

    /// Parse `RRGGBB` or `RGB`, with an optional leading `#`. Opaque.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidHex`] on malformed input.
    ///
    /// # Example
    /// ```
    /// use colorvec_core::Color;
    /// assert_eq!(Color::from_hex_str("#f80").unwrap().to_rgb8(), [255, 136, 0]);
    /// assert_eq!(Color::from_hex_str("1e293b").unwrap().to_rgb8(), [30, 41, 59]);
    /// ```
    pub fn from_hex_str(input: &str) -> Result<Self, ColorError> {
        Self::from_hex_str_with(input, &ColorConfig::default())
    }

    /// [`Color::from_hex_str`] with explicit parsing options.
    ///
    /// Alpha is taken from `config.default_alpha`.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidHex`] on malformed input.
    pub fn from_hex_str_with(input: &str, config: &ColorConfig) -> Result<Self, ColorError> {
        let [r, g, b] = hex::parse_hex_with(input, config)?;
        let mut color = Self::from_rgb8(r, g, b);
        color.data[3] = Channel::Alpha.check(config.default_alpha)?;
        Ok(color)
    }

    // === Lecture ===

    /// Value of `channel` on its public scale.
    ///
    /// HSV channels are computed from the stored RGB on every call.
    #[must_use]
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Red | Channel::Green | Channel::Blue => self.data[channel.index()] * 255.0,
            Channel::Hue | Channel::Saturation | Channel::Value => {
                self.to_hsv()[channel.index()]
            }
            Channel::Alpha => self.data[3],
        }
    }

    /// `[h°, s%, v%]` of the stored RGB.
    #[must_use]
    pub fn to_hsv(&self) -> [f32; 3] {
        rgb_to_hsv(self.data[0], self.data[1], self.data[2])
    }

    #[inline]
    #[must_use]
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    #[inline]
    #[must_use]
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    #[inline]
    #[must_use]
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Same slot as [`Color::alpha`].
    #[inline]
    #[must_use]
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Raw `[r, g, b, a]`, normalized.
    #[must_use]
    pub fn to_array(&self) -> [f32; 4] {
        self.data
    }

    /// 8-bit RGB, rounded and clamped.
    #[must_use]
    pub fn to_rgb8(&self) -> [u8; 3] {
        let [r, g, b, _] = self.to_rgba8();
        [r, g, b]
    }

    /// 8-bit RGBA, rounded and clamped. Alpha is scaled to 0–255.
    #[must_use]
    pub fn to_rgba8(&self) -> [u8; 4] {
        self.data.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Lower-case `rrggbb`, the inverse of [`Color::from_hex_str`].
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode_hex(self.to_rgb8())
    }

    /// Compare all four raw slots within `epsilon`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    // === Écriture ===

    /// Assign `channel`, returning the value written.
    ///
    /// RGB writes touch a single slot. HSV writes keep the two other HSV
    /// components and recompute the whole RGB triple. Alpha is independent.
    ///
    /// # Errors
    /// Returns the channel's range error; the color is left unchanged.
    pub fn set(&mut self, channel: Channel, value: f32) -> Result<f32, ColorError> {
        let value = channel.check(value)?;
        match channel {
            Channel::Red | Channel::Green | Channel::Blue => {
                self.data[channel.index()] = value / 255.0;
            }
            Channel::Hue | Channel::Saturation | Channel::Value => {
                let [h, s, v] = self.to_hsv();
                let mut hsv = [
                    Channel::Hue.snap(h),
                    Channel::Saturation.snap(s),
                    Channel::Value.snap(v),
                ];
                hsv[channel.index()] = value;
                let [r, g, b] = hsv_to_rgb(hsv[0], hsv[1], hsv[2])?;
                self.data[..3].copy_from_slice(&[r, g, b]);
            }
            Channel::Alpha => self.data[3] = value,
        }
        Ok(value)
    }

    /// Add `delta` to `channel`, returning the new value.
    ///
    /// RGB offsets are applied to the normalized slot, so stepping back and
    /// forth by whole units lands exactly on the bounds. HSV sums within
    /// drift of a bound are snapped onto it.
    ///
    /// # Errors
    /// Returns the channel's range error; the color is left unchanged.
    pub fn offset(&mut self, channel: Channel, delta: f32) -> Result<f32, ColorError> {
        if channel.is_rgb() {
            let slot = &mut self.data[channel.index()];
            let next = *slot + delta / 255.0;
            let scaled = channel.check(next * 255.0)?;
            *slot = next;
            return Ok(scaled);
        }
        let next = channel.snap(self.get(channel) + delta);
        self.set(channel, next)
    }

    /// Mutable view of `channel`.
    pub fn channel_mut(&mut self, channel: Channel) -> ChannelMut<'_> {
        ChannelMut::new(self, channel)
    }

    /// Rotate the hue by `degrees`, wrapping into [0, 360). Returns the new hue.
    ///
    /// # Errors
    /// Fails only if the stored RGB is outside [0, 1] (see [`Color::new`]).
    ///
    /// # Example
    /// ```
    /// use colorvec_core::Color;
    /// let mut c = Color::from_hsv(300.0, 100.0, 100.0, 1.0).unwrap();
    /// let h = c.rotate_hue(90.0).unwrap();
    /// assert!((h - 30.0).abs() < 1e-3);
    /// ```
    pub fn rotate_hue(&mut self, degrees: f32) -> Result<f32, ColorError> {
        let mut hue = (self.hue() + degrees).rem_euclid(360.0);
        if hue >= 360.0 {
            hue = 0.0;
        }
        self.set(Channel::Hue, hue)
    }

    channel_accessors! {
        Red => red, set_red, add_to_red, red_mut;
        Green => green, set_green, add_to_green, green_mut;
        Blue => blue, set_blue, add_to_blue, blue_mut;
        Hue => hue, set_hue, add_to_hue, hue_mut;
        Saturation => saturation, set_saturation, add_to_saturation, saturation_mut;
        Value => value, set_value, add_to_value, value_mut;
        Alpha => alpha, set_alpha, add_to_alpha, alpha_mut;
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.data;
        write!(f, "({x}, {y}, {z}, {w})")
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl From<[f32; 4]> for Color {
    fn from(data: [f32; 4]) -> Self {
        Self { data }
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.data
    }
}

impl AsRef<[f32]> for Color {
    fn as_ref(&self) -> &[f32] {
        &self.data
    }
}

impl AsMut<[f32]> for Color {
    fn as_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn gray_with_alpha() {
        let c = Color::from_gray(255.0, 0.9).unwrap();
        assert_eq!(c.to_array(), [1.0, 1.0, 1.0, 0.9]);
        assert!(close(c.red(), 255.0) && close(c.green(), 255.0) && close(c.blue(), 255.0));
        assert!(close(c.alpha(), 0.9));
    }

    #[test]
    fn alpha_and_w_share_a_slot() {
        let mut c = Color::from_gray(255.0, 0.9).unwrap();
        assert!(close(c.add_to_alpha(0.1).unwrap(), 1.0));
        assert!(close(c.w(), 1.0));
        assert!(close(c.alpha(), 1.0));
        assert!(c.add_to_alpha(0.1).is_err());
    }

    #[test]
    fn from_hsv_exposes_both_views() {
        let c = Color::from_hsv(120.0, 50.0, 50.0, 1.0).unwrap();
        assert_eq!(c.to_array(), [0.25, 0.5, 0.25, 1.0]);
        assert!(close(c.hue(), 120.0));
        assert!(close(c.saturation(), 50.0));
        assert!(close(c.value(), 50.0));
        assert!(close(c.get(Channel::Green), 127.5));
    }

    #[test]
    fn constructors_validate() {
        assert_eq!(
            Color::from_rgb(0.0, 0.0, -1.0, 1.0),
            Err(ColorError::RgbOutOfRange(-1.0))
        );
        assert_eq!(
            Color::from_rgb(0.0, 0.0, 0.0, 1.5),
            Err(ColorError::AlphaOutOfRange(1.5))
        );
        assert_eq!(
            Color::from_gray(255.5, 1.0),
            Err(ColorError::RgbOutOfRange(255.5))
        );
        assert_eq!(
            Color::from_hsv(10.0, 10.0, 10.0, -0.5),
            Err(ColorError::AlphaOutOfRange(-0.5))
        );
        assert_eq!(
            Color::from_hsv(360.0, 10.0, 10.0, 1.0),
            Err(ColorError::HueOutOfRange(360.0))
        );
    }

    #[test]
    fn rgb_write_touches_one_slot() {
        let mut c = Color::from_rgb(10.0, 20.0, 30.0, 0.5).unwrap();
        assert_eq!(c.set_green(200.0), Ok(200.0));
        assert!(close(c.red(), 10.0) && close(c.green(), 200.0) && close(c.blue(), 30.0));
        assert!(close(c.alpha(), 0.5));
    }

    #[test]
    fn hsv_write_keeps_other_components_and_alpha() {
        let mut c = Color::from_hsv(120.0, 50.0, 50.0, 0.3).unwrap();
        c.set_hue(200.0).unwrap();
        assert!(close(c.hue(), 200.0));
        assert!(close(c.saturation(), 50.0));
        assert!(close(c.value(), 50.0));
        c.set_value(80.0).unwrap();
        assert!(close(c.hue(), 200.0));
        assert!(close(c.saturation(), 50.0));
        assert!(close(c.value(), 80.0));
        assert!(close(c.alpha(), 0.3));
    }

    #[test]
    fn rgb_write_is_visible_through_hsv() {
        let mut c = Color::from_rgb(0.0, 0.0, 0.0, 1.0).unwrap();
        c.set_blue(255.0).unwrap();
        assert!(close(c.hue(), 240.0));
        assert!(close(c.saturation(), 100.0));
        assert!(close(c.value(), 100.0));
        c.set_red(255.0).unwrap();
        assert!(close(c.hue(), 300.0));
    }

    #[test]
    fn hue_of_grey_is_lost() {
        let mut c = Color::from_gray(128.0, 1.0).unwrap();
        c.set_hue(90.0).unwrap();
        assert!(close(c.hue(), 0.0));
        assert!(close(c.red(), c.blue()));

        let mut d = Color::from_hsv(200.0, 60.0, 40.0, 1.0).unwrap();
        d.set_value(0.0).unwrap();
        d.set_value(50.0).unwrap();
        assert!(close(d.hue(), 0.0));
        assert!(close(d.saturation(), 0.0));
    }

    #[test]
    fn rotate_hue_wraps() {
        let mut c = Color::from_hsv(350.0, 100.0, 100.0, 1.0).unwrap();
        assert!(close(c.rotate_hue(20.0).unwrap(), 10.0));
        assert!(close(c.rotate_hue(-30.0).unwrap(), 340.0));
        assert!(close(c.rotate_hue(720.0).unwrap(), 340.0));
        assert!(c.add_to_hue(30.0).is_err());
    }

    #[test]
    fn rotate_hue_folds_360_to_zero() {
        let mut c = Color::from_rgb8(255, 0, 0);
        assert_eq!(c.rotate_hue(-1e-6), Ok(0.0));
        assert_eq!(c.to_rgb8(), [255, 0, 0]);
    }

    #[test]
    fn hsv_unit_steps_reach_bounds() {
        for hue in (0..360u16).step_by(15) {
            let hue = f32::from(hue);
            for value in [10.0, 33.0, 50.0, 77.0, 99.0, 100.0] {
                let mut c = Color::from_hsv(hue, 10.0, value, 1.0).unwrap();
                for step in 0..10 {
                    let res = c.saturation_mut().decrement();
                    assert!(res.is_ok(), "h={hue} v={value} step {step}: {res:?}");
                }
                assert!(close(c.saturation(), 0.0));
                assert!(c.saturation_mut().decrement().is_err());

                let mut c = Color::from_hsv(hue, 90.0, value, 1.0).unwrap();
                for step in 0..10 {
                    let res = c.saturation_mut().increment();
                    assert!(res.is_ok(), "h={hue} v={value} step {step}: {res:?}");
                }
                assert!(close(c.saturation(), 100.0));
                assert!(c.saturation_mut().increment().is_err());
            }

            for sat in [0.0, 25.0, 60.0, 100.0] {
                let mut c = Color::from_hsv(hue, sat, 90.0, 1.0).unwrap();
                for step in 0..10 {
                    let res = c.value_mut().increment();
                    assert!(res.is_ok(), "h={hue} s={sat} step {step}: {res:?}");
                }
                assert!(close(c.value(), 100.0));
                assert!(c.value_mut().increment().is_err());

                for step in 0..100 {
                    let res = c.value_mut().decrement();
                    assert!(res.is_ok(), "h={hue} s={sat} step {step}: {res:?}");
                }
                assert!(close(c.value(), 0.0));
                assert!(c.value_mut().decrement().is_err());
            }
        }
    }

    #[test]
    fn offset_steps_land_on_bounds() {
        let mut c = Color::from_gray(1.0, 1.0).unwrap();
        assert!(close(c.add_to_red(-1.0).unwrap(), 0.0));
        assert_eq!(c.x(), 0.0);
        assert!(c.add_to_red(-1.0).is_err());

        let mut d = Color::from_gray(254.0, 1.0).unwrap();
        assert!(close(d.add_to_green(1.0).unwrap(), 255.0));
        assert!(d.add_to_green(1.0).is_err());
    }

    #[test]
    fn display_shows_raw_slots() {
        let c = Color::new(0.25, 0.5, 1.0, 1.0);
        assert_eq!(c.to_string(), "(0.25, 0.5, 1, 1)");
    }

    #[test]
    fn eight_bit_and_hex_output() {
        let c = Color::from_rgb8(30, 41, 59);
        assert_eq!(c.to_rgba8(), [30, 41, 59, 255]);
        assert_eq!(c.to_hex(), "1e293b");
        assert_eq!(Color::new(1.5, -0.2, 0.5, 0.0).to_rgba8(), [255, 0, 128, 0]);
    }

    #[test]
    fn parse_via_from_str() {
        let c: Color = "#00ff00".parse().unwrap();
        assert!(close(c.hue(), 120.0));
        assert!("#00ff0".parse::<Color>().is_err());
    }

    #[test]
    fn conversions_and_slices() {
        let mut c = Color::from([0.1, 0.2, 0.3, 0.4]);
        let slots: &[f32] = c.as_ref();
        assert_eq!(slots, &[0.1, 0.2, 0.3, 0.4]);
        let slots: &mut [f32] = c.as_mut();
        slots[0] = 0.5;
        let raw: [f32; 4] = c.into();
        assert_eq!(raw, [0.5, 0.2, 0.3, 0.4]);
        assert_eq!(Color::default(), Color::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::splat(0.5).to_array(), [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn approx_eq_uses_all_slots() {
        let a = Color::new(0.5, 0.5, 0.5, 1.0);
        let b = Color::new(0.5, 0.5, 0.5001, 1.0);
        assert!(a.approx_eq(&b, 1e-3));
        assert!(!a.approx_eq(&b, 1e-5));
        assert!(!a.approx_eq(&Color::new(0.5, 0.5, 0.5, 0.0), 1e-3));
    }
}
