// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-9;
    pub const EPSILON_SQUARED: f64 = EPSILON * EPSILON; // Für Vergleiche mit Längen
    pub const TAU: f64 = std::f64::consts::TAU;
    pub const PI: f64 = std::f64::consts::PI;
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::PI;

    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * PI / 180.0
    }
}

/// Geometrische Hilfsfunktionen (einfach, ohne komplexe Strukturen)
pub mod simple_geometry {
    use crate::math::types::Point2D;
    use crate::math::utils::constants;

    /// Berechnet das Kreuzprodukt zweier 2D-Vektoren (Skalar)
    pub fn cross_product_2d(a: Point2D, b: Point2D) -> f64 {
        a.x * b.y - a.y * b.x
    }

    /// Abstand eines Punktes zu einer Strecke
    pub fn distance_point_to_segment(point: Point2D, start: Point2D, end: Point2D) -> f64 {
        let segment = end - start;
        let length_sq = segment.length_squared();
        if length_sq < constants::EPSILON_SQUARED {
            return point.distance(start); // Strecke ist ein Punkt
        }
        let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
        point.distance(start + segment * t)
    }
}

#[cfg(test)]
mod tests {
    use super::{angles::deg_to_rad, simple_geometry::*};
    use crate::math::types::Point2D;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_point_to_segment() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(10.0, 0.0);
        assert_relative_eq!(distance_point_to_segment(Point2D::new(5.0, 3.0), a, b), 3.0);
        assert_relative_eq!(distance_point_to_segment(Point2D::new(-4.0, 3.0), a, b), 5.0);
        assert_relative_eq!(distance_point_to_segment(Point2D::new(1.0, 1.0), a, a), 2f64.sqrt());
    }

    #[test]
    fn test_cross_product_sign() {
        assert_relative_eq!(cross_product_2d(Point2D::X, Point2D::Y), 1.0);
        assert_relative_eq!(cross_product_2d(Point2D::Y, Point2D::X), -1.0);
        assert_relative_eq!(deg_to_rad(180.0), std::f64::consts::PI);
    }
}
