// src/math/geometry/polygon/transformations/affine.rs

use crate::math::types::*;

/// Affine Transformations-Matrix (3x3 für 2D)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    // Matrix in der Form: [a c tx]
    //                    [b d ty]
    //                    [0 0  1]
    pub a: f64,  // x-Skalierung
    pub b: f64,  // y-Scherung in x
    pub c: f64,  // x-Scherung in y
    pub d: f64,  // y-Skalierung
    pub tx: f64, // x-Translation
    pub ty: f64, // y-Translation
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// Identitäts-Transformation
    pub fn identity() -> Self {
        Self::scale(1.0, 1.0)
    }

    /// Translation
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            ..Self::identity()
        }
    }

    /// Skalierung
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Rotation um den Ursprung
    pub fn rotation(angle_rad: f64) -> Self {
        let (sin_a, cos_a) = angle_rad.sin_cos();

        Self {
            a: cos_a,
            b: sin_a,
            c: -sin_a,
            d: cos_a,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Rotation um einen Punkt
    pub fn rotation_around(angle_rad: f64, center: Point2D) -> Self {
        Self::translation(center.x, center.y)
            .compose(&Self::rotation(angle_rad))
            .compose(&Self::translation(-center.x, -center.y))
    }

    /// Uniforme Skalierung um einen Punkt
    pub fn scale_around(factor: f64, center: Point2D) -> Self {
        Self::translation(center.x, center.y)
            .compose(&Self::scale(factor, factor))
            .compose(&Self::translation(-center.x, -center.y))
    }

    /// Spiegelung an der horizontalen Geraden y = axis_y
    pub fn flip_y(axis_y: f64) -> Self {
        Self {
            d: -1.0,
            ty: 2.0 * axis_y,
            ..Self::identity()
        }
    }

    /// Transformations-Komposition (`other` wird zuerst angewendet)
    pub fn compose(&self, other: &AffineTransform) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Transformiert einen Punkt
    pub fn transform_point(&self, point: Point2D) -> Point2D {
        Point2D::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }

    /// Transformiert einen Richtungsvektor (ohne Translation)
    pub fn transform_vector(&self, vector: Point2D) -> Point2D {
        Point2D::new(
            self.a * vector.x + self.c * vector.y,
            self.b * vector.x + self.d * vector.y,
        )
    }

    pub fn transform_points(&self, points: &[Point2D]) -> Vec<Point2D> {
        points.iter().map(|p| self.transform_point(*p)).collect()
    }
}
