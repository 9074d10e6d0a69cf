use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::color::Color;
use crate::error::ColorError;

/// Options de parsing et de comparaison des couleurs.
///
/// Chargée depuis TOML (voir [`load_config`]). Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use colorvec_core::config::ColorConfig;
/// let config = ColorConfig::default();
/// assert_eq!(config.default_alpha, 1.0);
/// assert!(config.allow_short_hex);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ColorConfig {
    // === Couleur ===
    /// Alpha given to colors parsed from hex strings [0.0, 1.0].
    pub default_alpha: f32,
    /// Tolerance used by [`ColorConfig::approx_eq`] [0.0, 1.0].
    pub epsilon: f32,

    // === Hex ===
    /// Accept a leading `#`.
    pub allow_hash_prefix: bool,
    /// Accept the 3-digit `RGB` triplet.
    pub allow_short_hex: bool,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            default_alpha: 1.0,
            epsilon: 1e-4,
            allow_hash_prefix: true,
            allow_short_hex: true,
        }
    }
}

impl ColorConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.default_alpha = self.default_alpha.clamp(0.0, 1.0);
        self.epsilon = self.epsilon.clamp(0.0, 1.0);
    }

    /// Reject values that clamping cannot repair.
    ///
    /// # Errors
    /// Returns [`ColorError::Config`] if a numeric field is NaN.
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.default_alpha.is_nan() {
            return Err(ColorError::Config("default_alpha is NaN".into()));
        }
        if self.epsilon.is_nan() {
            return Err(ColorError::Config("epsilon is NaN".into()));
        }
        Ok(())
    }

    /// [`Color::approx_eq`] with the configured tolerance.
    #[must_use]
    pub fn approx_eq(&self, a: &Color, b: &Color) -> bool {
        a.approx_eq(b, self.epsilon)
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    color: Option<ColorSection>,
    hex: Option<HexSection>,
}

/// `[color]` section, all fields optional for partial override.
#[derive(Deserialize)]
struct ColorSection {
    default_alpha: Option<f32>,
    epsilon: Option<f32>,
}

/// `[hex]` section, all fields optional.
#[derive(Deserialize)]
struct HexSection {
    allow_hash_prefix: Option<bool>,
    allow_short_hex: Option<bool>,
}

/// Parse une config TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the TOML is malformed or holds NaN values.
///
/// # Example
/// ```
/// use colorvec_core::config::parse_config;
/// let config = parse_config("[color]\ndefault_alpha = 0.5\n").unwrap();
/// assert_eq!(config.default_alpha, 0.5);
/// assert!(config.allow_hash_prefix);
/// ```
pub fn parse_config(content: &str) -> Result<ColorConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = ColorConfig::default();

    if let Some(c) = file.color {
        if let Some(v) = c.default_alpha {
            config.default_alpha = v;
        }
        if let Some(v) = c.epsilon {
            config.epsilon = v;
        }
    }

    if let Some(h) = file.hex {
        if let Some(v) = h.allow_hash_prefix {
            config.allow_hash_prefix = v;
        }
        if let Some(v) = h.allow_short_hex {
            config.allow_short_hex = v;
        }
    }

    config.validate()?;
    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use colorvec_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/colorvec.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ColorConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let config = parse_config(&content)
        .with_context(|| format!("Config invalide dans {}", path.display()))?;

    log::info!("Config chargée depuis {}", path.display());
    Ok(config)
}
