// src/math/geometry/polygon/core.rs

//! Grundlegende Eigenschaften von Polygonen als Punktlisten
//! (geschlossen implizit, ohne doppelten Endpunkt).

use crate::math::{types::Point2D, utils::simple_geometry::cross_product_2d};

/// Vorzeichenbehaftete Fläche (positiv = gegen den Uhrzeigersinn bei +Y nach oben).
pub fn signed_area(points: &[Point2D]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        sum += cross_product_2d(a, b);
    }
    sum * 0.5
}

pub fn polygon_area(points: &[Point2D]) -> f64 {
    signed_area(points).abs()
}

/// Flächenschwerpunkt nach der Shoelace-Formel.
///
/// `None` für Polygone ohne Fläche (weniger als 3 Punkte oder kollinear).
pub fn polygon_centroid(points: &[Point2D]) -> Option<Point2D> {
    if points.len() < 3 {
        return None;
    }
    let mut area2 = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        let cross = a.x * b.y - b.x * a.y;
        area2 += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    let area6 = area2 * 3.0;
    if area6.abs() < f64::EPSILON || !area6.is_finite() {
        return None;
    }
    Some(Point2D::new(cx / area6, cy / area6))
}

/// Umfang des geschlossenen Polygons.
pub fn perimeter(points: &[Point2D]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    (0..points.len())
        .map(|i| points[i].distance(points[(i + 1) % points.len()]))
        .sum()
}

/// Dreht die Punktreihenfolge falls nötig, so dass das Polygon gegen den Uhrzeigersinn läuft.
pub fn ensure_ccw(mut points: Vec<Point2D>) -> Vec<Point2D> {
    if signed_area(&points) < 0.0 {
        points.reverse();
    }
    points
}

/// Punkt-in-Polygon-Test (Even-Odd-Regel).
pub fn contains_point(points: &[Point2D], point: Point2D) -> bool {
    let mut inside = false;
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (points[i], points[j]);
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
