// src/math/types/point.rs
use super::*;

/// Konvertierung von `Point2D` in Spade-Punkte.
pub fn to_spade(point: Point2D) -> SpadePoint {
    SpadePoint::new(point.x, point.y)
}

/// Konvertierung zwischen `Point2D` und `geo::Coord`.
pub fn to_coord(point: Point2D) -> geo::Coord<f64> {
    geo::Coord {
        x: point.x,
        y: point.y,
    }
}

pub fn from_coord(coord: geo::Coord<f64>) -> Point2D {
    Point2D::new(coord.x, coord.y)
}

/// Prüft ob beide Koordinaten endlich sind.
pub fn is_finite_point(point: Point2D) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

/// Arithmetisches Mittel einer Punktmenge.
pub fn vertex_mean(points: &[Point2D]) -> Option<Point2D> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point2D::ZERO, |acc, p| acc + *p);
    Some(sum / points.len() as f64)
}

/// Rotiert einen Punkt um ein Zentrum (Winkel in Radiant).
pub fn rotate_around(point: Point2D, center: Point2D, angle_rad: f64) -> Point2D {
    let (sin_a, cos_a) = angle_rad.sin_cos();
    let d = point - center;
    center + Point2D::new(d.x * cos_a - d.y * sin_a, d.x * sin_a + d.y * cos_a)
}
