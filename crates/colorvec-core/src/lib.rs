//! Four-channel color values with linked RGB and HSV views.
//!
//! A [`Color`] stores normalized r, g, b and alpha. The RGB (0–255) and
//! HSV (degrees / percent) readings of the same triple are kept consistent:
//! HSV is derived on read, and HSV writes recompute the RGB triple.
//! Every write is range-checked and returns a [`ColorError`] instead of
//! leaving the color in an invalid state.

pub mod channel;
pub mod color;
pub mod config;
pub mod convert;
pub mod error;
pub mod hex;

pub use channel::{Channel, ChannelMut};
pub use color::Color;
pub use config::ColorConfig;
pub use error::ColorError;
