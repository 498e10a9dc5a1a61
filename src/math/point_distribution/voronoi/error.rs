// src/math/point_distribution/voronoi/error.rs

use thiserror::Error;

/// Fehler, die eine einzelne Zelle betreffen.
///
/// Sie werden nie an den Aufrufer durchgereicht: der Orchestrator protokolliert sie
/// und lässt die Zelle weg oder verwendet die unveränderte Geometrie.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CellError {
    #[error("Site #{site} has no usable cell polygon")]
    DegenerateCell { site: usize },

    #[error("Transform of cell #{site} skipped: {reason}")]
    DegenerateTransform { site: usize, reason: String },

    #[error("Clipping cell #{site} against the profile left nothing")]
    ClippingFailure { site: usize },
}

impl CellError {
    /// Setzt den Site-Index nachträglich (Hilfsfunktionen kennen ihn nicht).
    pub fn for_site(self, site: usize) -> Self {
        match self {
            CellError::DegenerateCell { .. } => CellError::DegenerateCell { site },
            CellError::DegenerateTransform { reason, .. } => {
                CellError::DegenerateTransform { site, reason }
            }
            CellError::ClippingFailure { .. } => CellError::ClippingFailure { site },
        }
    }
}
