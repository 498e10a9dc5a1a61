// src/math/algorithms/offset.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::polygon::core::signed_area,
    types::Point2D,
    utils::{constants, simple_geometry::cross_product_2d},
};

/// Maximale Gehrungslänge als Vielfaches von `|distance|`, darüber wird abgefast.
pub const MITER_LIMIT: f64 = 4.0;

/// Versetzt einen geschlossenen Ring um `distance`.
///
/// Positive Werte rücken zur Innenseite des Rings, negative nach außen; die
/// Orientierung des Eingaberings spielt keine Rolle. Aufeinanderfolgende Kanten
/// werden über ihre versetzten Geraden verschnitten (Gehrung), zu spitze Ecken
/// werden durch zwei Punkte abgefast. Selbstüberschneidungen werden nicht entfernt.
///
/// Fällt ein Ring beim Einrücken in sich zusammen (Orientierung kippt oder die
/// Fläche wächst), liefert die Funktion `GeometricFailure`.
pub fn offset_ring(ring: &[Point2D], distance: f64) -> MathResult<Vec<Point2D>> {
    if ring.len() < 3 {
        return Err(MathError::InsufficientPoints {
            expected: 3,
            actual: ring.len(),
        });
    }
    if distance.abs() < constants::EPSILON {
        return Ok(ring.to_vec());
    }

    let original_area = signed_area(ring);
    if original_area.abs() < constants::EPSILON {
        return Err(MathError::GeometricFailure {
            operation: "offset of a ring without area".to_string(),
        });
    }

    // Für CCW liegt das Innere links der Laufrichtung.
    let orientation = original_area.signum();
    let shift = distance * orientation;

    let n = ring.len();
    let mut result = Vec::with_capacity(n + 4);
    for i in 0..n {
        let prev = ring[(i + n - 1) % n];
        let current = ring[i];
        let next = ring[(i + 1) % n];
        offset_corner(prev, current, next, shift, &mut result);
    }

    if result.len() < 3 {
        return Err(MathError::GeometricFailure {
            operation: "offset collapsed to fewer than 3 points".to_string(),
        });
    }

    let result_area = signed_area(&result);
    if distance > 0.0
        && (result_area * original_area <= 0.0 || result_area.abs() >= original_area.abs())
    {
        return Err(MathError::GeometricFailure {
            operation: "offset collapsed (passed through center)".to_string(),
        });
    }

    Ok(result)
}

/// Linke Normale von `from -> to`, Einheitslänge. `None` für entartete Kanten.
fn left_normal(from: Point2D, to: Point2D) -> Option<Point2D> {
    let dir = to - from;
    let len = dir.length();
    (len > constants::EPSILON).then(|| Point2D::new(-dir.y, dir.x) / len)
}

fn offset_corner(prev: Point2D, current: Point2D, next: Point2D, shift: f64, out: &mut Vec<Point2D>) {
    let (Some(n_in), Some(n_out)) = (left_normal(prev, current), left_normal(current, next)) else {
        // Doppelte Punkte: die vorhandene Kante trägt die Ecke.
        if let Some(n) = left_normal(prev, current).or_else(|| left_normal(current, next)) {
            out.push(current + n * shift);
        }
        return;
    };

    let a = current + n_in * shift;
    let b = current + n_out * shift;
    let dir_in = current - prev;
    let dir_out = next - current;

    let denom = cross_product_2d(dir_in, dir_out);
    if denom.abs() < constants::EPSILON * dir_in.length() * dir_out.length() {
        // Kollinear (oder Umkehr): ein gemeinsamer Versatzpunkt genügt.
        if n_in.dot(n_out) > 0.0 {
            out.push(a);
        } else {
            out.push(a);
            out.push(b);
        }
        return;
    }

    // Schnitt der Geraden a + t*dir_in und b + s*dir_out.
    let t = cross_product_2d(b - a, dir_out) / denom;
    let miter = a + dir_in * t;

    if miter.distance(current) > MITER_LIMIT * shift.abs() {
        out.push(a);
        out.push(b);
    } else {
        out.push(miter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::core::polygon_area;
    use approx::assert_relative_eq;

    fn square(size: f64) -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(size, 0.0),
            Point2D::new(size, size),
            Point2D::new(0.0, size),
        ]
    }

    #[test]
    fn test_inset_square_ccw() {
        let result = offset_ring(&square(10.0), 1.0).unwrap();
        assert_eq!(result.len(), 4);
        assert_relative_eq!(polygon_area(&result), 64.0, epsilon = 1e-9);
        assert_relative_eq!(result[0].x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(result[0].y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inset_square_cw_goes_inward_too() {
        let mut ring = square(10.0);
        ring.reverse();
        let result = offset_ring(&ring, 1.0).unwrap();
        assert_relative_eq!(polygon_area(&result), 64.0, epsilon = 1e-9);
    }

    #[test]
    fn test_outset_square() {
        let result = offset_ring(&square(10.0), -1.0).unwrap();
        assert_relative_eq!(polygon_area(&result), 144.0, epsilon = 1e-9);
    }

    #[test]
    fn test_collapse_is_reported() {
        assert!(offset_ring(&square(2.0), 1.5).is_err());
    }

    #[test]
    fn test_zero_distance_is_identity() {
        let ring = square(3.0);
        assert_eq!(offset_ring(&ring, 0.0).unwrap(), ring);
    }

    #[test]
    fn test_sharp_corner_is_beveled() {
        let ring = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(20.0, 0.0),
            Point2D::new(0.0, 1.0),
        ];
        let result = offset_ring(&ring, -0.5).unwrap();
        assert_eq!(result.len(), 4);
        for p in &result {
            let nearest = ring
                .iter()
                .map(|corner| p.distance(*corner))
                .fold(f64::INFINITY, f64::min);
            assert!(nearest <= MITER_LIMIT * 0.5 + 1e-9);
        }
    }

    #[test]
    fn test_too_few_points() {
        assert!(matches!(
            offset_ring(&[Point2D::ZERO, Point2D::X], 1.0),
            Err(MathError::InsufficientPoints { .. })
        ));
    }
}
