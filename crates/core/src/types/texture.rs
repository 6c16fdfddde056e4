//! Hair texture selection for special orders.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::pricing::TextureFamily;

/// Errors that can occur when parsing a [`Texture`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    /// The input does not name a known texture.
    #[error("unknown texture: {0} (expected body_wave, straight, water_wave or kinky)")]
    Unknown(String),
}

/// The curl/wave pattern of a custom wig.
///
/// `Unset` is the order form's "Select Texture" placeholder. It is a valid
/// transient state while the customer is still choosing, and it prices at
/// zero.
///
/// The serialized form matches the order form's select values, with the empty
/// string standing for `Unset`:
///
/// ```
/// use curls_core::Texture;
///
/// assert_eq!("water_wave".parse::<Texture>(), Ok(Texture::WaterWave));
/// assert_eq!("".parse::<Texture>(), Ok(Texture::Unset));
/// assert!("afro".parse::<Texture>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Texture {
    BodyWave,
    Straight,
    WaterWave,
    Kinky,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl Texture {
    /// Every selectable texture, in the order the form lists them.
    pub const ALL: [Self; 4] = [Self::BodyWave, Self::Straight, Self::WaterWave, Self::Kinky];

    /// The form value for this texture.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BodyWave => "body_wave",
            Self::Straight => "straight",
            Self::WaterWave => "water_wave",
            Self::Kinky => "kinky",
            Self::Unset => "",
        }
    }

    /// The base-price table this texture is priced from.
    ///
    /// Returns `None` for [`Texture::Unset`].
    #[must_use]
    pub const fn family(self) -> Option<TextureFamily> {
        match self {
            Self::Straight | Self::BodyWave => Some(TextureFamily::StraightBodyWave),
            Self::WaterWave | Self::Kinky => Some(TextureFamily::WaterWaveKinky),
            Self::Unset => None,
        }
    }

    /// Whether a texture has been selected.
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl fmt::Display for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Texture {
    type Err = TextureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "" => Ok(Self::Unset),
            "body_wave" => Ok(Self::BodyWave),
            "straight" => Ok(Self::Straight),
            "water_wave" => Ok(Self::WaterWave),
            "kinky" => Ok(Self::Kinky),
            _ => Err(TextureError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for texture in Texture::ALL {
            assert_eq!(texture.to_string().parse::<Texture>(), Ok(texture));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_hyphens() {
        assert_eq!("Body-Wave".parse::<Texture>(), Ok(Texture::BodyWave));
        assert_eq!("  KINKY ".parse::<Texture>(), Ok(Texture::Kinky));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "deep_wave".parse::<Texture>().unwrap_err();
        assert_eq!(err, TextureError::Unknown("deep_wave".to_string()));
    }

    #[test]
    fn test_serde_uses_form_values() {
        assert_eq!(
            serde_json::to_string(&Texture::WaterWave).unwrap(),
            "\"water_wave\""
        );
        assert_eq!(serde_json::to_string(&Texture::Unset).unwrap(), "\"\"");
        let parsed: Texture = serde_json::from_str("\"\"").unwrap();
        assert_eq!(parsed, Texture::Unset);
        let parsed: Texture = serde_json::from_str("\"body_wave\"").unwrap();
        assert_eq!(parsed, Texture::BodyWave);
    }

    #[test]
    fn test_family_partition() {
        assert_eq!(
            Texture::Straight.family(),
            Some(TextureFamily::StraightBodyWave)
        );
        assert_eq!(
            Texture::BodyWave.family(),
            Some(TextureFamily::StraightBodyWave)
        );
        assert_eq!(
            Texture::WaterWave.family(),
            Some(TextureFamily::WaterWaveKinky)
        );
        assert_eq!(Texture::Kinky.family(), Some(TextureFamily::WaterWaveKinky));
        assert_eq!(Texture::Unset.family(), None);
    }

    #[test]
    fn test_default_is_unset() {
        assert_eq!(Texture::default(), Texture::Unset);
        assert!(!Texture::Unset.is_set());
        assert!(Texture::Kinky.is_set());
    }
}
