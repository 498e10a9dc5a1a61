// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod cell;
pub mod polygon;
pub mod profile;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen,
// falls man nicht das gesamte `math::prelude` importieren möchte.
pub use self::cell::{CellEdgeStyle, CellPath, CellPathBuilder, CellSizing, CurveSegment, Symbol};
pub use self::polygon::{AffineTransform, polygon_area, polygon_centroid};
pub use self::profile::{ClipDecision, Profile, ProfileClipper, ProfileDocument, ProfilePlacement};
