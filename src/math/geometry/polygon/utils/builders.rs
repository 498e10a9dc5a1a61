// src/math/geometry/polygon/utils/builders.rs

use crate::math::{types::*, utils::constants::TAU};

/// Geometrie-Generatoren. Winkel in Radiant, `start_angle` ist die Lage des ersten Punkts.
pub fn create_circle_vertices(
    center: Point2D,
    radius: f64,
    segments: usize,
    start_angle: f64,
) -> Vec<Point2D> {
    let mut vertices = Vec::with_capacity(segments);

    for i in 0..segments {
        let angle = start_angle + (i as f64 / segments as f64) * TAU;
        vertices.push(center + Point2D::new(radius * angle.cos(), radius * angle.sin()));
    }

    vertices
}

pub fn create_star_vertices(
    center: Point2D,
    inner_radius: f64,
    outer_radius: f64,
    points: usize,
    start_angle: f64,
) -> Vec<Point2D> {
    let mut vertices = Vec::with_capacity(points * 2);

    for i in 0..(points * 2) {
        let angle = start_angle + (i as f64 / (points * 2) as f64) * TAU;
        let radius = if i % 2 == 0 {
            outer_radius
        } else {
            inner_radius
        };
        vertices.push(center + Point2D::new(radius * angle.cos(), radius * angle.sin()));
    }

    vertices
}

pub fn create_regular_polygon_vertices(
    center: Point2D,
    radius: f64,
    sides: usize,
    start_angle: f64,
) -> Vec<Point2D> {
    create_circle_vertices(center, radius, sides, start_angle)
}

/// Achsenparalleles Quadrat mit halber Kantenlänge `half_size`.
pub fn create_square_vertices(center: Point2D, half_size: f64) -> Vec<Point2D> {
    vec![
        center + Point2D::new(-half_size, -half_size),
        center + Point2D::new(half_size, -half_size),
        center + Point2D::new(half_size, half_size),
        center + Point2D::new(-half_size, half_size),
    ]
}

/// Kubische Bézier-Kurve
pub fn cubic_bezier(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D, t: f64) -> Point2D {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;
    let uuu = uu * u;
    let ttt = tt * t;

    p0 * uuu + p1 * (3.0 * uu * t) + p2 * (3.0 * u * tt) + p3 * ttt
}

/// Erweiterte Geometrie-Generatoren
pub struct GeometryGenerators;

impl GeometryGenerators {
    /// Erstellt ein Rechteck mit abgerundeten Ecken
    pub fn rounded_rectangle(
        center: Point2D,
        width: f64,
        height: f64,
        corner_radius: f64,
        segments_per_corner: usize,
    ) -> Vec<Point2D> {
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        let r = corner_radius.min(half_w).min(half_h).max(0.0);
        let segments = segments_per_corner.max(1);
        let mut vertices = Vec::with_capacity(4 * (segments + 1));

        // Ecken-Zentren, gegen den Uhrzeigersinn ab unten rechts
        let corners = [
            Point2D::new(center.x + half_w - r, center.y - half_h + r),
            Point2D::new(center.x + half_w - r, center.y + half_h - r),
            Point2D::new(center.x - half_w + r, center.y + half_h - r),
            Point2D::new(center.x - half_w + r, center.y - half_h + r),
        ];
        let start_angles = [TAU * 0.75, 0.0, TAU * 0.25, TAU * 0.5];

        for (corner_center, &start_angle) in corners.iter().zip(start_angles.iter()) {
            for i in 0..=segments {
                let t = i as f64 / segments as f64;
                let angle = start_angle + (TAU * 0.25) * t;
                vertices.push(*corner_center + Point2D::new(r * angle.cos(), r * angle.sin()));
            }
        }

        crate::math::algorithms::clipping::dedup_ring(vertices, crate::math::utils::constants::EPSILON)
    }
}
