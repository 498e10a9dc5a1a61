// src/math/geometry/profile/clipper.rs

use super::Profile;
use crate::math::{
    algorithms::boolean::{
        distance_to_rings, even_odd_region, intersect_largest, outline_crosses_rings,
        region_contains,
    },
    geometry::cell::path::CellPath,
    point_distribution::voronoi::error::CellError,
    types::Point2D,
};
use bevy::log::debug;
use geo::MultiPolygon;

/// Ergebnis des Profil-Zuschnitts für eine Zelle.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipDecision {
    Keep,
    /// Zelle wurde mit dem eingerückten Profil verschnitten.
    Replace(CellPath),
    Discard,
}

/// Schneidet Zellpfade gegen ein (um das Padding eingerücktes) Profil.
///
/// Alle Koordinaten in px. Ohne Profilring oder ohne gesetzte Schalter ist der
/// Clipper inaktiv und behält jede Zelle.
#[derive(Debug, Clone)]
pub struct ProfileClipper {
    rings: Vec<Vec<Point2D>>,
    region: MultiPolygon<f64>,
    site_threshold: f64,
    clip_outside: bool,
    clip_intersecting: bool,
    active: bool,
}

impl ProfileClipper {
    pub fn new(
        profile_px: &Profile,
        padding_px: f64,
        clip_outside: bool,
        clip_intersecting: bool,
    ) -> Self {
        let rings = if clip_outside || clip_intersecting {
            profile_px.inset(padding_px)
        } else {
            Vec::new()
        };
        // Ein Profil ohne geschlossenen Ring (z.B. nur eine Linie) schneidet nichts.
        let active = !rings.is_empty();
        if !active && !profile_px.is_empty() && (clip_outside || clip_intersecting) {
            debug!("ProfileClipper::new - profile has no usable ring, clipping disabled");
        }
        let region = even_odd_region(&rings);

        Self {
            rings,
            region,
            site_threshold: padding_px / 2.0,
            clip_outside,
            clip_intersecting,
            active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Eingerückte Profilringe, z.B. für Debug-Ausgaben.
    pub fn rings(&self) -> &[Vec<Point2D>] {
        &self.rings
    }

    /// Entscheidet über eine Zelle.
    ///
    /// `Err(ClippingFailure)` wenn der Verschnitt leer ist; der Aufrufer verwirft die Zelle.
    pub fn clip(&self, path: &CellPath, site: Point2D) -> Result<ClipDecision, CellError> {
        if !self.active {
            return Ok(ClipDecision::Keep);
        }
        let Some(bounds) = path.bounds() else {
            return Ok(ClipDecision::Keep);
        };

        let outline = path.flatten();
        let is_contained = region_contains(&self.region, bounds.center());
        let is_intersecting = outline_crosses_rings(&outline, &self.rings);

        if self.clip_outside && !is_contained && !is_intersecting {
            return Ok(ClipDecision::Discard);
        }

        if is_intersecting {
            if self.clip_intersecting
                || !region_contains(&self.region, site)
                || distance_to_rings(site, &self.rings) < self.site_threshold
            {
                return Ok(ClipDecision::Discard);
            }
            return match intersect_largest(&outline, &self.region) {
                Some(points) => Ok(ClipDecision::Replace(CellPath::Polygon { points })),
                None => Err(CellError::ClippingFailure { site: 0 }),
            };
        }

        Ok(ClipDecision::Keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{geometry::polygon::core::polygon_area, types::Bounds2D};
    use approx::assert_relative_eq;

    fn square_path(x0: f64, y0: f64, size: f64) -> CellPath {
        CellPath::Polygon {
            points: vec![
                Point2D::new(x0, y0),
                Point2D::new(x0 + size, y0),
                Point2D::new(x0 + size, y0 + size),
                Point2D::new(x0, y0 + size),
            ],
        }
    }

    fn page_profile() -> Profile {
        Profile::from_bounds(&Bounds2D::from_size(100.0, 100.0))
    }

    #[test]
    fn test_inactive_without_flags_or_profile() {
        let clipper = ProfileClipper::new(&page_profile(), 0.0, false, false);
        assert!(!clipper.is_active());
        let far = square_path(500.0, 500.0, 10.0);
        assert_eq!(clipper.clip(&far, Point2D::new(505.0, 505.0)).unwrap(), ClipDecision::Keep);

        let empty = ProfileClipper::new(&Profile::default(), 0.0, true, true);
        assert!(!empty.is_active());
    }

    #[test]
    fn test_profile_without_ring_does_not_clip() {
        let line = Profile::new(vec![vec![Point2D::new(1.0, 1.0), Point2D::new(15.0, 15.0)]]);
        let clipper = ProfileClipper::new(&line, 0.0, true, false);
        assert!(!clipper.is_active());
        assert!(clipper.rings().is_empty());
        let path = square_path(40.0, 40.0, 10.0);
        assert_eq!(clipper.clip(&path, Point2D::new(45.0, 45.0)).unwrap(), ClipDecision::Keep);
    }

    #[test]
    fn test_inside_cell_is_kept() {
        let clipper = ProfileClipper::new(&page_profile(), 0.0, true, false);
        let path = square_path(10.0, 10.0, 10.0);
        assert_eq!(clipper.clip(&path, Point2D::new(15.0, 15.0)).unwrap(), ClipDecision::Keep);
    }

    #[test]
    fn test_outside_cell_discarded_with_clip_outside() {
        let clipper = ProfileClipper::new(&page_profile(), 0.0, true, false);
        let path = square_path(200.0, 200.0, 10.0);
        assert_eq!(
            clipper.clip(&path, Point2D::new(205.0, 205.0)).unwrap(),
            ClipDecision::Discard
        );

        let lenient = ProfileClipper::new(&page_profile(), 0.0, false, true);
        assert_eq!(
            lenient.clip(&path, Point2D::new(205.0, 205.0)).unwrap(),
            ClipDecision::Keep
        );
    }

    #[test]
    fn test_crossing_cell_is_replaced_by_intersection() {
        let clipper = ProfileClipper::new(&page_profile(), 0.0, true, false);
        let path = square_path(90.0, 40.0, 20.0);
        match clipper.clip(&path, Point2D::new(95.0, 50.0)).unwrap() {
            ClipDecision::Replace(CellPath::Polygon { points }) => {
                assert_relative_eq!(polygon_area(&points), 200.0, epsilon = 1e-6);
            }
            other => panic!("expected replacement, got {:?}", other),
        }
    }

    #[test]
    fn test_crossing_cell_discarded_with_clip_intersecting() {
        let clipper = ProfileClipper::new(&page_profile(), 0.0, false, true);
        let path = square_path(90.0, 40.0, 20.0);
        assert_eq!(
            clipper.clip(&path, Point2D::new(95.0, 50.0)).unwrap(),
            ClipDecision::Discard
        );
    }

    #[test]
    fn test_crossing_cell_with_site_outside_is_discarded() {
        let clipper = ProfileClipper::new(&page_profile(), 0.0, true, false);
        let path = square_path(90.0, 40.0, 20.0);
        assert_eq!(
            clipper.clip(&path, Point2D::new(105.0, 50.0)).unwrap(),
            ClipDecision::Discard
        );
    }

    #[test]
    fn test_padding_insets_region_and_site_threshold() {
        // Region ist [10, 90]^2, Schwelle 5 px.
        let clipper = ProfileClipper::new(&page_profile(), 10.0, true, false);
        let path = square_path(80.0, 40.0, 20.0);
        assert_eq!(
            clipper.clip(&path, Point2D::new(87.0, 50.0)).unwrap(),
            ClipDecision::Discard
        );
        match clipper.clip(&path, Point2D::new(82.0, 50.0)).unwrap() {
            ClipDecision::Replace(CellPath::Polygon { points }) => {
                assert_relative_eq!(polygon_area(&points), 200.0, epsilon = 1e-6);
            }
            other => panic!("expected replacement, got {:?}", other),
        }
    }
}
