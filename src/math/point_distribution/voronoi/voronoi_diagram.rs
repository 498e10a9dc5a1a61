// src/math/point_distribution/voronoi/voronoi_diagram.rs

use crate::math::{
    algorithms::clipping::{HalfPlane, PolygonClipper},
    geometry::polygon::core::{ensure_ccw, perimeter, polygon_area},
    types::{Bounds2D, Point2D, SpadePoint, is_finite_point, to_spade},
    utils::constants,
};
use bevy::log::{debug, trace};
use spade::{DelaunayTriangulation, HasPosition, Triangulation};

/// Vertex-Daten in der Triangulation: Position plus Index der Site.
#[derive(Debug, Clone, Copy)]
struct SiteVertex {
    index: usize,
    position: SpadePoint,
}

impl HasPosition for SiteVertex {
    type Scalar = f64;

    fn position(&self) -> SpadePoint {
        self.position
    }
}

/// Repräsentiert eine einzelne, auf das Clip-Rechteck beschränkte Zelle.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell {
    /// Index der Site, die diese Zelle definiert.
    pub site_index: usize,
    /// Der Generatorpunkt (Site).
    pub generator: Point2D,
    /// Die Eckpunkte des Polygons in CCW-Reihenfolge, ohne doppelten Endpunkt.
    pub vertices: Vec<Point2D>,
    /// Mindestens eine Kante liegt auf dem Clip-Rechteck.
    pub is_boundary_cell: bool,
    /// Indizes der Sites, mit denen sich die Zelle eine Kante teilt.
    pub neighbor_ids: Vec<usize>,
}

impl VoronoiCell {
    /// Berechnet die Fläche der Voronoi-Zelle (als Polygon).
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }

    /// Berechnet den Umfang der Voronoi-Zelle.
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.vertices)
    }
}

/// Beschränktes Voronoi-Diagramm über einer Site-Liste.
///
/// Jede Zelle ist das Clip-Rechteck, geschnitten mit den Bisektor-Halbebenen
/// aller Delaunay-Nachbarn. Sites ohne Zelle (doppelte Koordinaten, nicht
/// endliche Werte, vollständig weggeclippt) haben den Eintrag `None`.
#[derive(Debug, Clone)]
pub struct VoronoiDiagram {
    sites: Vec<Point2D>,
    clip: Bounds2D,
    cells: Vec<Option<VoronoiCell>>,
    triangles: Vec<[usize; 3]>,
}

impl VoronoiDiagram {
    pub fn build(sites: Vec<Point2D>, clip: Bounds2D) -> Self {
        let mut diagram = Self {
            sites,
            clip,
            cells: Vec::new(),
            triangles: Vec::new(),
        };
        diagram.recompute();
        diagram
    }

    /// Ersetzt die Site-Koordinaten und berechnet das Diagramm neu.
    pub fn update(&mut self, sites: Vec<Point2D>) {
        if sites.len() != self.sites.len() {
            debug!(
                "VoronoiDiagram::update - site count changed ({} -> {}), full rebuild.",
                self.sites.len(),
                sites.len()
            );
        }
        self.sites = sites;
        self.recompute();
    }

    pub fn sites(&self) -> &[Point2D] {
        &self.sites
    }

    pub fn site(&self, index: usize) -> Option<Point2D> {
        self.sites.get(index).copied()
    }

    pub fn clip_bounds(&self) -> &Bounds2D {
        &self.clip
    }

    /// Anzahl der Sites (mit oder ohne Zelle).
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Anzahl der Sites, die eine Zelle besitzen.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn cell(&self, index: usize) -> Option<&VoronoiCell> {
        self.cells.get(index).and_then(|c| c.as_ref())
    }

    pub fn cells(&self) -> impl Iterator<Item = &VoronoiCell> {
        self.cells.iter().flatten()
    }

    pub fn cell_polygon(&self, index: usize) -> Option<&[Point2D]> {
        self.cell(index).map(|c| c.vertices.as_slice())
    }

    /// Nachbarn mit gemeinsamer Voronoi-Kante; leer für Sites ohne Zelle.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.cell(index)
            .map(|c| c.neighbor_ids.as_slice())
            .unwrap_or(&[])
    }

    /// Innere Delaunay-Dreiecke als Site-Indizes.
    pub fn delaunay_triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    fn tolerance(&self) -> f64 {
        constants::EPSILON * self.clip.size().max_element().max(1.0)
    }

    fn recompute(&mut self) {
        let step_description =
            |step_name: &str| format!("VoronoiDiagram::recompute - Step: {}", step_name);

        let mut triangulation = DelaunayTriangulation::<SiteVertex>::new();
        for (index, &site) in self.sites.iter().enumerate() {
            if !is_finite_point(site) {
                debug!(
                    "{}: site #{} has non-finite coordinates {:?}, no cell.",
                    step_description("Insert"),
                    index,
                    site
                );
                continue;
            }
            // Gleiche Position: die spätere Site ersetzt die Vertex-Daten der früheren.
            if let Err(e) = triangulation.insert(SiteVertex {
                index,
                position: to_spade(site),
            }) {
                debug!(
                    "{}: site #{} rejected by triangulation: {:?}",
                    step_description("Insert"),
                    index,
                    e
                );
            }
        }

        let tolerance = self.tolerance();
        let clipper = PolygonClipper::new().with_tolerance(tolerance);
        let clip_ring = self.clip.corners().to_vec();
        let mut cells: Vec<Option<VoronoiCell>> = vec![None; self.sites.len()];

        for vertex in triangulation.vertices() {
            let index = vertex.data().index;
            let site = self.sites[index];
            let delaunay_neighbors: Vec<usize> =
                vertex.out_edges().map(|e| e.to().data().index).collect();

            let mut polygon = clip_ring.clone();
            for &neighbor in &delaunay_neighbors {
                let plane = HalfPlane::bisector(site, self.sites[neighbor]);
                polygon = clipper.clip_to_half_plane(&polygon, &plane);
                if polygon.len() < 3 {
                    break;
                }
            }

            if polygon.len() < 3 || polygon_area(&polygon) <= tolerance * tolerance {
                trace!(
                    "{}: site #{} has a degenerate cell ({} vertices).",
                    step_description("CellClipping"),
                    index,
                    polygon.len()
                );
                continue;
            }
            let vertices = ensure_ccw(polygon);

            let neighbor_ids: Vec<usize> = delaunay_neighbors
                .into_iter()
                .filter(|&n| shares_edge(&vertices, site, self.sites[n], tolerance))
                .collect();
            let is_boundary_cell = touches_bounds(&vertices, &self.clip, tolerance);

            cells[index] = Some(VoronoiCell {
                site_index: index,
                generator: site,
                vertices,
                is_boundary_cell,
                neighbor_ids,
            });
        }

        self.triangles = triangulation
            .inner_faces()
            .map(|face| face.vertices().map(|v| v.data().index))
            .collect();
        self.cells = cells;

        trace!(
            "{}: {} of {} sites have cells, {} triangles.",
            step_description("Done"),
            self.cell_count(),
            self.sites.len(),
            self.triangles.len()
        );
    }
}

/// Prüft ob der Bisektor von `site` und `other` eine Kante (nicht nur einen Punkt) beisteuert.
fn shares_edge(vertices: &[Point2D], site: Point2D, other: Point2D, tolerance: f64) -> bool {
    let plane = HalfPlane::bisector(site, other);
    let normal_length = plane.normal.length();
    if normal_length <= tolerance {
        return false;
    }
    let on_bisector = |p: Point2D| (plane.signed_distance(p) / normal_length).abs() <= tolerance * 16.0;

    (0..vertices.len()).any(|i| {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        a.distance(b) > tolerance * 16.0 && on_bisector(a) && on_bisector(b)
    })
}

fn touches_bounds(vertices: &[Point2D], bounds: &Bounds2D, tolerance: f64) -> bool {
    vertices.iter().any(|p| {
        (p.x - bounds.min.x).abs() <= tolerance
            || (p.x - bounds.max.x).abs() <= tolerance
            || (p.y - bounds.min.y).abs() <= tolerance
            || (p.y - bounds.max.y).abs() <= tolerance
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::probability::SeedResource;
    use crate::math::point_distribution::sites::SiteGenerator;
    use approx::assert_relative_eq;

    fn page(w: f64, h: f64) -> Bounds2D {
        Bounds2D::from_size(w, h)
    }

    #[test]
    fn test_four_symmetric_sites() {
        let sites = vec![
            Point2D::new(2.5, 2.5),
            Point2D::new(7.5, 2.5),
            Point2D::new(2.5, 7.5),
            Point2D::new(7.5, 7.5),
        ];
        let diagram = VoronoiDiagram::build(sites, page(10.0, 10.0));
        assert_eq!(diagram.cell_count(), 4);
        for i in 0..4 {
            let cell = diagram.cell(i).unwrap();
            assert_relative_eq!(cell.area(), 25.0, epsilon = 1e-9);
            assert!(cell.is_boundary_cell);
            // Diagonale Nachbarn berühren sich nur im Mittelpunkt.
            assert_eq!(diagram.neighbors(i).len(), 2, "site {}", i);
        }
        let mut n0 = diagram.neighbors(0).to_vec();
        n0.sort_unstable();
        assert_eq!(n0, vec![1, 2]);
    }

    #[test]
    fn test_cells_tile_the_clip_rect() {
        let clip = page(30.0, 20.0);
        let mut rng = SeedResource::from_seed(2024);
        let sites = SiteGenerator::new(150).generate(&clip, &mut rng).unwrap();
        let diagram = VoronoiDiagram::build(sites, clip);

        let total: f64 = diagram.cells().map(|c| c.area()).sum();
        assert_relative_eq!(total, 600.0, max_relative = 1e-9);
        for cell in diagram.cells() {
            assert!(cell.vertices.len() >= 3);
            assert!(crate::math::geometry::polygon::core::signed_area(&cell.vertices) > 0.0);
            // Nachbarschaft ist symmetrisch.
            for &n in &cell.neighbor_ids {
                assert!(diagram.neighbors(n).contains(&cell.site_index));
            }
        }
    }

    #[test]
    fn test_duplicate_site_keeps_later_index() {
        let sites = vec![
            Point2D::new(3.0, 3.0),
            Point2D::new(7.0, 6.0),
            Point2D::new(3.0, 3.0),
        ];
        let diagram = VoronoiDiagram::build(sites, page(10.0, 10.0));
        assert!(diagram.cell_polygon(0).is_none());
        assert!(diagram.cell_polygon(2).is_some());
        assert!(diagram.neighbors(0).is_empty());
        assert_eq!(diagram.neighbors(1), &[2]);
    }

    #[test]
    fn test_collinear_sites_give_strips() {
        let sites = vec![
            Point2D::new(1.0, 5.0),
            Point2D::new(5.0, 5.0),
            Point2D::new(9.0, 5.0),
        ];
        let diagram = VoronoiDiagram::build(sites, page(10.0, 10.0));
        assert_eq!(diagram.cell_count(), 3);
        assert_relative_eq!(diagram.cell(0).unwrap().area(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(diagram.cell(1).unwrap().area(), 40.0, epsilon = 1e-9);
        assert_relative_eq!(diagram.cell(2).unwrap().area(), 30.0, epsilon = 1e-9);
        assert!(diagram.delaunay_triangles().is_empty());
    }

    #[test]
    fn test_non_finite_site_has_no_cell() {
        let sites = vec![
            Point2D::new(2.0, 2.0),
            Point2D::new(f64::NAN, 1.0),
            Point2D::new(8.0, 8.0),
        ];
        let diagram = VoronoiDiagram::build(sites, page(10.0, 10.0));
        assert!(diagram.cell(1).is_none());
        assert_eq!(diagram.cell_count(), 2);
    }

    #[test]
    fn test_update_moves_cells() {
        let mut diagram = VoronoiDiagram::build(
            vec![Point2D::new(2.0, 5.0), Point2D::new(8.0, 5.0)],
            page(10.0, 10.0),
        );
        assert_relative_eq!(diagram.cell(0).unwrap().area(), 50.0, epsilon = 1e-9);
        diagram.update(vec![Point2D::new(2.0, 5.0), Point2D::new(6.0, 5.0)]);
        assert_relative_eq!(diagram.cell(0).unwrap().area(), 40.0, epsilon = 1e-9);
        assert_eq!(diagram.len(), 2);
    }
}
