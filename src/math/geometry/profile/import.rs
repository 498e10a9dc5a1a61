// src/math/geometry/profile/import.rs

use super::Profile;
use crate::math::{
    error::{MathError, MathResult},
    types::{Point2D, Units},
};
use serde::{Deserialize, Serialize};

/// Zahl oder Zahl als Text, wie sie CAD-Exporte liefern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
}

impl NumericValue {
    pub fn value(&self) -> MathResult<f64> {
        let value = match self {
            NumericValue::Number(v) => *v,
            NumericValue::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                import_error(format!("'{}' is not a number", text))
            })?,
        };
        if !value.is_finite() {
            return Err(import_error(format!("non-finite coordinate {}", value)));
        }
        Ok(value)
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub x: NumericValue,
    pub y: NumericValue,
}

/// Profil-Handshake: `{"units": "in", "width": "10.0", "height": "7.5", "profile": [[{x, y}, ...], ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub width: Option<NumericValue>,
    #[serde(default)]
    pub height: Option<NumericValue>,
    #[serde(default)]
    pub profile: Vec<Vec<RawPoint>>,
}

/// Platzierung der importierten Koordinaten auf der Seite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProfilePlacement {
    /// Koordinaten unverändert im Seitenraum.
    #[default]
    AsIs,
    /// Bounding-Box-Minimum auf (0,0), Y gespiegelt (+Y nach unten).
    AlignToOrigin,
}

impl ProfileDocument {
    pub fn from_json(text: &str) -> MathResult<Self> {
        serde_json::from_str(text).map_err(|err| import_error(err.to_string()))
    }

    /// Fehlende Einheit bedeutet Zentimeter.
    pub fn units(&self) -> MathResult<Units> {
        match &self.units {
            None => Ok(Units::Centimeters),
            Some(text) => Units::parse(text)
                .ok_or_else(|| import_error(format!("unknown units '{}'", text))),
        }
    }

    /// Seitengröße in cm, falls beide Maße angegeben sind.
    pub fn page_size_cm(&self) -> MathResult<Option<(f64, f64)>> {
        let units = self.units()?;
        match (&self.width, &self.height) {
            (Some(w), Some(h)) => Ok(Some((
                units.to_centimeters(w.value()?),
                units.to_centimeters(h.value()?),
            ))),
            _ => Ok(None),
        }
    }

    /// Normalisiert alle Koordinaten nach cm und platziert sie.
    pub fn to_profile(&self, placement: ProfilePlacement) -> MathResult<Profile> {
        let units = self.units()?;
        let paths = self
            .profile
            .iter()
            .map(|path| {
                path.iter()
                    .map(|p| {
                        Ok(Point2D::new(
                            units.to_centimeters(p.x.value()?),
                            units.to_centimeters(p.y.value()?),
                        ))
                    })
                    .collect::<MathResult<Vec<_>>>()
            })
            .collect::<MathResult<Vec<_>>>()?;

        let profile = Profile::new(paths);
        Ok(match placement {
            ProfilePlacement::AsIs => profile,
            ProfilePlacement::AlignToOrigin => align_to_origin(&profile),
        })
    }
}

/// Parst ein Profil-Dokument und liefert das Profil in cm.
pub fn load_profile(text: &str, placement: ProfilePlacement) -> MathResult<Profile> {
    ProfileDocument::from_json(text)?.to_profile(placement)
}

fn align_to_origin(profile: &Profile) -> Profile {
    let Some(bounds) = profile.bounds() else {
        return profile.clone();
    };
    let height = bounds.height();
    profile.map_points(|p| Point2D::new(p.x - bounds.min.x, height - (p.y - bounds.min.y)))
}

fn import_error(message: String) -> MathError {
    MathError::ProfileImport { message }
}
