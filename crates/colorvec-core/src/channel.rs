use std::fmt;

use crate::color::Color;
use crate::error::ColorError;

/// A named channel of a [`Color`], on its public scale.
///
/// | channel                  | scale          |
/// |--------------------------|----------------|
/// | `Red`, `Green`, `Blue`   | `[0, 255]`     |
/// | `Hue`                    | `[0, 360)`     |
/// | `Saturation`, `Value`    | `[0, 100]`     |
/// | `Alpha`                  | `[0, 1]`       |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red, 0–255.
    Red,
    /// Green, 0–255.
    Green,
    /// Blue, 0–255.
    Blue,
    /// Hue in degrees.
    Hue,
    /// Saturation in percent.
    Saturation,
    /// Value in percent.
    Value,
    /// Opacity, 0 = transparent.
    Alpha,
}

/// Absorbs the f32 drift carried by HSV values derived from the stored RGB.
pub(crate) const HSV_DRIFT: f32 = 1e-3;

impl Channel {
    /// All channels, RGB first, then HSV, then alpha.
    pub const ALL: [Self; 7] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Hue,
        Self::Saturation,
        Self::Value,
        Self::Alpha,
    ];

    /// Lower and upper bound of the public scale.
    ///
    /// The upper bound is exclusive for [`Channel::Hue`] and inclusive otherwise.
    #[must_use]
    pub const fn range(self) -> (f32, f32) {
        match self {
            Self::Red | Self::Green | Self::Blue => (0.0, 255.0),
            Self::Hue => (0.0, 360.0),
            Self::Saturation | Self::Value => (0.0, 100.0),
            Self::Alpha => (0.0, 1.0),
        }
    }

    /// Position within its triple: r/g/b and h/s/v map to 0..3, alpha to 3.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Red | Self::Hue => 0,
            Self::Green | Self::Saturation => 1,
            Self::Blue | Self::Value => 2,
            Self::Alpha => 3,
        }
    }

    #[must_use]
    pub const fn is_rgb(self) -> bool {
        matches!(self, Self::Red | Self::Green | Self::Blue)
    }

    #[must_use]
    pub const fn is_hsv(self) -> bool {
        matches!(self, Self::Hue | Self::Saturation | Self::Value)
    }

    /// Pull an HSV value lying within [`HSV_DRIFT`] outside a bound back onto
    /// that bound. Hue is only snapped at 0. Other channels pass through.
    pub(crate) fn snap(self, value: f32) -> f32 {
        if !self.is_hsv() {
            return value;
        }
        let (lo, hi) = self.range();
        if value < lo && value > lo - HSV_DRIFT {
            lo
        } else if self != Self::Hue && value > hi && value < hi + HSV_DRIFT {
            hi
        } else {
            value
        }
    }

    /// Validate `value` against [`Channel::range`].
    ///
    /// NaN and infinities are always rejected.
    ///
    /// # Errors
    /// Returns the out-of-range variant matching this channel.
    ///
    /// # Example
    /// ```
    /// use colorvec_core::{Channel, ColorError};
    /// assert_eq!(Channel::Red.check(255.0), Ok(255.0));
    /// assert_eq!(Channel::Red.check(256.0), Err(ColorError::RgbOutOfRange(256.0)));
    /// assert!(Channel::Hue.check(360.0).is_err());
    /// ```
    pub fn check(self, value: f32) -> Result<f32, ColorError> {
        let (lo, hi) = self.range();
        let in_range = if self == Self::Hue {
            (lo..hi).contains(&value)
        } else {
            (lo..=hi).contains(&value)
        };
        if in_range {
            return Ok(value);
        }
        log::debug!("{self} rejected {value}: outside {lo}..{hi}");
        Err(match self {
            Self::Red | Self::Green | Self::Blue => ColorError::RgbOutOfRange(value),
            Self::Hue => ColorError::HueOutOfRange(value),
            Self::Saturation => ColorError::SaturationOutOfRange(value),
            Self::Value => ColorError::ValueOutOfRange(value),
            Self::Alpha => ColorError::AlphaOutOfRange(value),
        })
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Value => "value",
            Self::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

/// Mutable view of one channel of a [`Color`].
///
/// Every write goes through [`Color::set`]: the result is range-checked first
/// and the color is left untouched on error. Writes to an HSV channel
/// recompute the stored RGB triple; alpha is never affected.
///
/// # Example
/// ```
/// use colorvec_core::Color;
/// let mut c = Color::from_rgb(254.0, 0.0, 0.0, 1.0).unwrap();
/// assert_eq!(c.red_mut().post_increment().map(f32::round), Ok(254.0));
/// assert_eq!(c.red().round(), 255.0);
/// assert!(c.red_mut().increment().is_err());
/// assert_eq!(c.red().round(), 255.0);
/// ```
#[derive(Debug)]
pub struct ChannelMut<'a> {
    color: &'a mut Color,
    channel: Channel,
}

impl<'a> ChannelMut<'a> {
    pub(crate) fn new(color: &'a mut Color, channel: Channel) -> Self {
        Self { color, channel }
    }

    /// Channel this view writes to.
    #[must_use]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Current value on the channel's public scale.
    #[must_use]
    pub fn get(&self) -> f32 {
        self.color.get(self.channel)
    }

    /// Assign `value`, returning it.
    ///
    /// # Errors
    /// Returns the channel's range error if `value` is out of bounds.
    pub fn set(&mut self, value: f32) -> Result<f32, ColorError> {
        self.color.set(self.channel, value)
    }

    /// Add `delta`, returning the new value.
    ///
    /// # Errors
    /// Returns the channel's range error if the sum is out of bounds.
    pub fn add(&mut self, delta: f32) -> Result<f32, ColorError> {
        self.color.offset(self.channel, delta)
    }

    /// Subtract `delta`, returning the new value.
    ///
    /// # Errors
    /// Returns the channel's range error if the difference is out of bounds.
    pub fn sub(&mut self, delta: f32) -> Result<f32, ColorError> {
        self.color.offset(self.channel, -delta)
    }

    /// Scale by `factor`, returning the new value.
    ///
    /// # Errors
    /// Returns the channel's range error if the product is out of bounds.
    pub fn mul(&mut self, factor: f32) -> Result<f32, ColorError> {
        let next = self.channel.snap(self.get() * factor);
        self.set(next)
    }

    /// Divide by `divisor`, returning the new value.
    ///
    /// Dividing by zero produces an infinity or NaN, which is rejected.
    ///
    /// # Errors
    /// Returns the channel's range error if the quotient is out of bounds.
    pub fn div(&mut self, divisor: f32) -> Result<f32, ColorError> {
        let next = self.channel.snap(self.get() / divisor);
        self.set(next)
    }

    /// Step up by one unit of the public scale, returning the new value.
    ///
    /// # Errors
    /// Returns the channel's range error if the step leaves the range.
    pub fn increment(&mut self) -> Result<f32, ColorError> {
        self.add(1.0)
    }

    /// Step down by one unit of the public scale, returning the new value.
    ///
    /// # Errors
    /// Returns the channel's range error if the step leaves the range.
    pub fn decrement(&mut self) -> Result<f32, ColorError> {
        self.sub(1.0)
    }

    /// Step up by one, returning the value held before the step.
    ///
    /// # Errors
    /// Returns the channel's range error if the step leaves the range.
    pub fn post_increment(&mut self) -> Result<f32, ColorError> {
        let old = self.get();
        self.add(1.0)?;
        Ok(old)
    }

    /// Step down by one, returning the value held before the step.
    ///
    /// # Errors
    /// Returns the channel's range error if the step leaves the range.
    pub fn post_decrement(&mut self) -> Result<f32, ColorError> {
        let old = self.get();
        self.sub(1.0)?;
        Ok(old)
    }
}
