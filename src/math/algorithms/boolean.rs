// src/math/algorithms/boolean.rs

use geo::{Area, BooleanOps, Contains, Intersects, LineString, MultiPolygon, Point, Polygon};

use crate::math::{
    types::{Point2D, from_coord, to_coord},
    utils::simple_geometry::distance_point_to_segment,
};

/// Geschlossener geo-Ring aus einer Punktliste (ohne schließendes Duplikat).
pub fn ring_line_string(ring: &[Point2D]) -> LineString<f64> {
    let mut coords: Vec<_> = ring.iter().map(|p| to_coord(*p)).collect();
    if let Some(first) = coords.first().copied() {
        coords.push(first);
    }
    LineString::new(coords)
}

pub fn ring_polygon(ring: &[Point2D]) -> Polygon<f64> {
    Polygon::new(ring_line_string(ring), Vec::new())
}

/// Region nach Gerade-Ungerade-Regel: jeder Ring schaltet die Zugehörigkeit um.
/// Verschachtelte Ringe werden dadurch zu Löchern, unabhängig von ihrer Orientierung.
pub fn even_odd_region(rings: &[Vec<Point2D>]) -> MultiPolygon<f64> {
    rings
        .iter()
        .filter(|ring| ring.len() >= 3)
        .fold(MultiPolygon::new(Vec::new()), |region, ring| {
            region.xor(&ring_polygon(ring))
        })
}

pub fn region_contains(region: &MultiPolygon<f64>, point: Point2D) -> bool {
    region.contains(&Point::from(to_coord(point)))
}

/// Schneidet der geschlossene Umriss einen der Ringe?
pub fn outline_crosses_rings(outline: &[Point2D], rings: &[Vec<Point2D>]) -> bool {
    if outline.len() < 2 {
        return false;
    }
    let outline = ring_line_string(outline);
    rings
        .iter()
        .filter(|ring| ring.len() >= 2)
        .any(|ring| outline.intersects(&ring_line_string(ring)))
}

/// Kleinster Abstand eines Punktes zu irgendeiner Ringkante.
pub fn distance_to_rings(point: Point2D, rings: &[Vec<Point2D>]) -> f64 {
    rings
        .iter()
        .flat_map(|ring| {
            let n = ring.len();
            (0..n).map(move |i| distance_point_to_segment(point, ring[i], ring[(i + 1) % n]))
        })
        .fold(f64::INFINITY, f64::min)
}

/// Schnitt eines Umrisses mit der Region; behalten wird das flächengrößte Teilstück.
pub fn intersect_largest(outline: &[Point2D], region: &MultiPolygon<f64>) -> Option<Vec<Point2D>> {
    if outline.len() < 3 {
        return None;
    }
    let clipped = ring_polygon(outline).intersection(region);
    let largest = clipped
        .0
        .iter()
        .filter(|piece| piece.unsigned_area() > 0.0)
        .max_by(|a, b| a.unsigned_area().total_cmp(&b.unsigned_area()))?;

    let mut points: Vec<Point2D> = largest.exterior().coords().map(|c| from_coord(*c)).collect();
    // geo schließt Ringe explizit.
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    (points.len() >= 3).then_some(points)
}
