// src/math/geometry/cell/scaling.rs

use crate::math::{
    geometry::cell::{path::CellPath, style::CellEdgeStyle},
    point_distribution::voronoi::error::CellError,
    types::{Bounds2D, Point2D},
};

/// Mindestabstand, der beim Einrücken zum Mittelpunkt bleibt (px).
pub const MIN_INSET_CLEARANCE: f64 = 2.0;

/// Probe-Skalierung zur Messung der Bewegung beim Einrücken.
pub const INSET_PROBE_SCALE: f64 = 0.9;

/// Anteil der Pfadlänge, unter dem Segmente als Splitter gelten.
pub const SMALL_BIT_DIVISOR: f64 = 50.0;

/// Mindestanteil an Seitenbreite/-höhe für die optionale Kleinzellen-Ablehnung.
pub const MIN_CELL_PAGE_FRACTION: f64 = 0.1;

/// Wie ein Zellpfad verkleinert wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellSizing {
    /// Symbole: die Skalierung steckt bereits im Symbol.
    Unchanged,
    /// Prozentuale Skalierung um den Ankermittelwert.
    Percent(f64),
    /// Absoluter Einzug in px (halber sichtbarer Abstand).
    Inset(f64),
}

impl CellSizing {
    /// Gap-Modus nur für Curved/Straight und `gap > 0`, sonst Prozent.
    pub fn resolve(style: CellEdgeStyle, scale_percent: f64, gap_px: f64) -> Self {
        if style.is_symbol() {
            CellSizing::Unchanged
        } else if gap_px > 0.0 && style.supports_gap() {
            CellSizing::Inset(gap_px / 2.0)
        } else {
            CellSizing::Percent(scale_percent)
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, CellSizing::Inset(_))
    }

    pub fn apply(&self, path: &CellPath) -> Result<CellPath, CellError> {
        match *self {
            CellSizing::Unchanged => Ok(path.clone()),
            CellSizing::Percent(percent) => Ok(scale_path(path, percent)),
            CellSizing::Inset(distance) => inset_path(path, distance),
        }
    }
}

/// Skaliert um den Mittelwert der Ankerpunkte. 100 % liefert die Eingabe unverändert.
pub fn scale_path(path: &CellPath, percent: f64) -> CellPath {
    if percent == 100.0 {
        return path.clone();
    }
    scale_by_factor(path, percent / 100.0)
}

fn scale_by_factor(path: &CellPath, factor: f64) -> CellPath {
    let Some(center) = path.anchor_mean() else {
        return path.clone();
    };
    let scale_point = |p: Point2D| center + (p - center) * factor;

    match path {
        CellPath::Polygon { points } => CellPath::Polygon {
            points: points.iter().map(|p| scale_point(*p)).collect(),
        },
        CellPath::Curve { segments } => CellPath::Curve {
            segments: segments
                .iter()
                .map(|s| {
                    let mut scaled = *s;
                    scaled.point = scale_point(s.point);
                    scaled.handle_in = s.handle_in * factor;
                    scaled.handle_out = s.handle_out * factor;
                    scaled
                })
                .collect(),
        },
        CellPath::Symbol(symbol) => {
            let mut scaled = *symbol;
            scaled.scale *= factor;
            CellPath::Symbol(scaled)
        }
    }
}

/// Rückt den Pfad um `distance` nach innen, gemessen am ersten Ankerpunkt.
///
/// Der Faktor wird über eine Probe-Skalierung auf 90 % linear extrapoliert.
/// Bei entarteter Geometrie bleibt der Pfad unverändert (`DegenerateTransform`).
pub fn inset_path(path: &CellPath, distance: f64) -> Result<CellPath, CellError> {
    if distance == 0.0 {
        return Ok(path.clone());
    }
    if path.is_symbol() {
        return Err(degenerate("symbols cannot be inset"));
    }

    let anchors = path.anchors();
    let (Some(&reference), Some(center)) = (anchors.first(), path.anchor_mean()) else {
        return Err(degenerate("path has no anchors"));
    };

    let distance = distance.min(reference.distance(center) - MIN_INSET_CLEARANCE);

    let probe = scale_by_factor(path, INSET_PROBE_SCALE);
    let movement = probe
        .anchors()
        .first()
        .map(|p| p.distance(reference))
        .unwrap_or(0.0);

    if !(movement > 0.0) {
        return Err(degenerate("probe scale did not move the reference point"));
    }
    if !(distance > 0.0) {
        return Err(degenerate("cell too small for the requested gap"));
    }

    let new_scale = 1.0 - (1.0 - INSET_PROBE_SCALE) * distance / movement;
    Ok(scale_by_factor(path, new_scale))
}

fn degenerate(reason: &str) -> CellError {
    CellError::DegenerateTransform {
        site: 0,
        reason: reason.to_string(),
    }
}

/// Entfernt Segmente, deren Punkt näher als `Länge/50` am effektiven Beginn des
/// Folgesegments liegt. Läuft rückwärts; mindestens drei Segmente bleiben.
pub fn remove_small_bits(path: &mut CellPath) {
    let min = path.length() / SMALL_BIT_DIVISOR;
    match path {
        CellPath::Curve { segments } => {
            let mut i = segments.len();
            while i > 0 && segments.len() > 3 {
                i -= 1;
                if i >= segments.len() {
                    continue;
                }
                let next = segments[(i + 1) % segments.len()];
                if segments[i].point.distance(next.point + next.handle_in) < min {
                    segments.remove(i);
                }
            }
        }
        CellPath::Polygon { points } => {
            let mut i = points.len();
            while i > 0 && points.len() > 3 {
                i -= 1;
                if i >= points.len() {
                    continue;
                }
                let next = points[(i + 1) % points.len()];
                if points[i].distance(next) < min {
                    points.remove(i);
                }
            }
        }
        CellPath::Symbol(_) => {}
    }
}

/// Optional: lehnt Pfade ab, die schmaler oder niedriger als 10 % der Seite sind.
pub fn is_too_small(path: &CellPath, page: &Bounds2D) -> bool {
    let Some(bounds) = path.bounds() else {
        return true;
    };
    bounds.width() < page.width() * MIN_CELL_PAGE_FRACTION
        || bounds.height() < page.height() * MIN_CELL_PAGE_FRACTION
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::cell::{builder::curved_path, path::CurveSegment};
    use approx::assert_relative_eq;

    fn square_polygon(size: f64) -> CellPath {
        CellPath::Polygon {
            points: vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(size, 0.0),
                Point2D::new(size, size),
                Point2D::new(0.0, size),
            ],
        }
    }

    #[test]
    fn test_scale_hundred_is_identity() {
        let path = curved_path(&[
            Point2D::new(0.1, 0.3),
            Point2D::new(7.7, 1.9),
            Point2D::new(5.3, 8.1),
            Point2D::new(-1.2, 4.4),
        ]);
        assert_eq!(scale_path(&path, 100.0), path);
    }

    #[test]
    fn test_percentage_scale_about_mean() {
        let scaled = scale_path(&square_polygon(10.0), 50.0);
        let anchors = scaled.anchors();
        assert_eq!(anchors[0], Point2D::new(2.5, 2.5));
        assert_eq!(anchors[2], Point2D::new(7.5, 7.5));
    }

    #[test]
    fn test_curve_handles_scale_too() {
        let CellPath::Curve { segments } = scale_path(&curved_path(&[
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 4.0),
            Point2D::new(0.0, 4.0),
        ]), 50.0) else {
            panic!("expected curve");
        };
        assert_eq!(segments[0].handle_out, Point2D::new(1.0, 0.0));
        assert_eq!(segments[0].point, Point2D::new(2.0, 1.0));
    }

    #[test]
    fn test_zero_inset_is_identity() {
        let path = square_polygon(10.0);
        assert_eq!(inset_path(&path, 0.0).unwrap(), path);
    }

    #[test]
    fn test_inset_moves_reference_by_distance() {
        let path = square_polygon(20.0);
        let inset = inset_path(&path, 1.5).unwrap();
        let before = path.anchors()[0];
        let after = inset.anchors()[0];
        assert_relative_eq!(before.distance(after), 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_inset_clamped_near_center() {
        // Referenzpunkt ist 5*sqrt(2) ~ 7.07 vom Zentrum entfernt.
        let path = square_polygon(10.0);
        let inset = inset_path(&path, 100.0).unwrap();
        let remaining = inset.anchors()[0].distance(Point2D::new(5.0, 5.0));
        assert_relative_eq!(remaining, MIN_INSET_CLEARANCE, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_inset_reported() {
        let tiny = square_polygon(1.0);
        assert!(matches!(
            inset_path(&tiny, 1.0),
            Err(CellError::DegenerateTransform { .. })
        ));
        let collapsed = CellPath::Polygon {
            points: vec![Point2D::new(3.0, 3.0); 3],
        };
        assert!(inset_path(&collapsed, 1.0).is_err());
    }

    #[test]
    fn test_sizing_resolution() {
        assert_eq!(
            CellSizing::resolve(CellEdgeStyle::Curved, 90.0, 4.0),
            CellSizing::Inset(2.0)
        );
        assert_eq!(
            CellSizing::resolve(CellEdgeStyle::Straight, 90.0, 0.0),
            CellSizing::Percent(90.0)
        );
        assert_eq!(
            CellSizing::resolve(CellEdgeStyle::Hexagon, 90.0, 4.0),
            CellSizing::Unchanged
        );
    }

    #[test]
    fn test_remove_small_bits_drops_slivers() {
        let mut path = CellPath::Curve {
            segments: vec![
                CurveSegment::corner(Point2D::new(0.0, 0.0)),
                CurveSegment::corner(Point2D::new(10.0, 0.0)),
                CurveSegment::corner(Point2D::new(10.05, 0.0)),
                CurveSegment::corner(Point2D::new(10.0, 10.0)),
                CurveSegment::corner(Point2D::new(0.0, 10.0)),
            ],
        };
        remove_small_bits(&mut path);
        assert_eq!(path.segment_count(), 4);
        assert!(!path.anchors().contains(&Point2D::new(10.0, 0.0)));
    }

    #[test]
    fn test_remove_small_bits_keeps_triangle() {
        let mut path = CellPath::Polygon {
            points: vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(0.01, 0.0),
                Point2D::new(0.0, 0.01),
            ],
        };
        remove_small_bits(&mut path);
        assert_eq!(path.segment_count(), 3);
    }

    #[test]
    fn test_small_cell_rejection() {
        let page = Bounds2D::from_size(100.0, 100.0);
        assert!(is_too_small(&square_polygon(5.0), &page));
        assert!(!is_too_small(&square_polygon(15.0), &page));
    }
}
