// tests/scenarios.rs

use approx::assert_relative_eq;
use voronoi_sketch::math::{
    algorithms::point_relaxation::{LloydConfig, LloydRelaxation},
    geometry::{
        cell::{CellEdgeStyle, CellPath, SymbolRotation, inset_path, scale_path},
        polygon::polygon_area,
        profile::{Profile, ProfilePlacement, import::load_profile},
    },
    point_distribution::voronoi::{DiagramParameters, VoronoiBuilder, VoronoiDiagram},
    types::{Bounds2D, Point2D},
};

fn page_params(width: f64, height: f64) -> DiagramParameters {
    // 2.54 px pro Zoll: 1 cm entspricht 1 px.
    DiagramParameters::default()
        .with_page_size(width, height)
        .with_pixels_per_inch(2.54)
        .with_symbol_rotation(SymbolRotation::Fixed(0.0))
}

#[test]
fn scenario_a_four_sites_from_known_seed() {
    let params = page_params(10.0, 10.0)
        .with_cell_count(4)
        .with_lloyd_iterations(0)
        .with_seed(42);
    let builder = VoronoiBuilder::new(params).unwrap();

    let mut rng = builder.seed_resource();
    let sites = builder.generate_sites(&mut rng).unwrap();
    let expected = [
        (0.758414780521262, 0.22719478737997256),
        (0.3500385802469136, 0.9201560356652949),
        (0.5826088820301784, 0.05653292181069959),
        (0.024026920438957475, 0.6857081618655693),
    ];
    for (site, (x, y)) in sites.iter().zip(expected) {
        assert_relative_eq!(site.x, x * 10.0, max_relative = 1e-12);
        assert_relative_eq!(site.y, y * 10.0, max_relative = 1e-12);
    }

    let diagram = builder.build_diagram(sites);
    assert!(diagram.cell_count() <= 4);
    let union: f64 = diagram.cells().map(|cell| cell.area()).sum();
    assert_relative_eq!(union, 100.0, epsilon = 1e-6);

    let output = builder.generate().unwrap();
    assert_eq!(output.seed, 42);
    assert_eq!(output.cells.len(), 4);
}

#[test]
fn scenario_b_hexagon_around_interior_site() {
    let d = 10.0;
    let center = Point2D::new(50.0, 50.0);
    let mut sites = vec![center];
    for k in 0..6 {
        let angle = k as f64 * std::f64::consts::PI / 3.0;
        sites.push(center + Point2D::new(angle.cos(), angle.sin()) * d);
    }

    let params = page_params(100.0, 100.0)
        .with_cell_count(7)
        .with_edge_style(CellEdgeStyle::Hexagon)
        .with_scale_percent(80.0)
        .with_seed(1);
    let builder = VoronoiBuilder::new(params).unwrap();
    let diagram = VoronoiDiagram::build(sites, Bounds2D::from_size(100.0, 100.0));
    assert_eq!(diagram.neighbors(0).len(), 6);

    let output = builder.render(&diagram, 1);
    let cell = output.cells[0].as_ref().unwrap();
    let CellPath::Symbol(symbol) = &cell.path else {
        panic!("expected a symbol, got {:?}", cell.path);
    };
    assert_relative_eq!(symbol.scaled_radius(), d / 2.0 * 0.8, epsilon = 1e-9);
    let outline = cell.path.flatten();
    assert_eq!(outline.len(), 6);
    for vertex in outline {
        assert_relative_eq!(vertex.distance(center), 4.0, epsilon = 1e-9);
    }
}

#[test]
fn scenario_c_zero_gap_leaves_path_unchanged() {
    let builder = VoronoiBuilder::new(
        page_params(12.0, 9.0)
            .with_cell_count(10)
            .with_lloyd_iterations(2)
            .with_scale_percent(100.0)
            .with_seed(5),
    )
    .unwrap();
    let output = builder.generate().unwrap();
    for cell in output.drawables() {
        assert_eq!(inset_path(&cell.path, 0.0).unwrap(), cell.path);
        assert_eq!(scale_path(&cell.path, 100.0), cell.path);
    }
}

#[test]
fn scenario_d_profile_outside_page_emits_nothing() {
    let far_away = Profile::from_bounds(&Bounds2D::from_points(
        Point2D::new(50.0, 50.0),
        Point2D::new(52.0, 52.0),
    ));
    let params = page_params(10.0, 10.0)
        .with_cell_count(20)
        .with_seed(9)
        .with_profile(far_away)
        .with_clipping(true, false);
    let output = VoronoiBuilder::new(params).unwrap().generate().unwrap();
    assert_eq!(output.emitted_count(), 0);
}

#[test]
fn determinism_for_fixed_seed() {
    let params = page_params(20.0, 15.0).with_cell_count(80).with_seed(1234);
    let a = VoronoiBuilder::new(params.clone()).unwrap().generate().unwrap();
    let b = VoronoiBuilder::new(params).unwrap().generate().unwrap();
    assert_eq!(a.sites, b.sites);
    assert_eq!(a.cells, b.cells);
}

#[test]
fn emitted_cells_never_exceed_site_count() {
    for (count, iterations) in [(2, 5), (3, 5), (17, 5), (250, 3), (2000, 1)] {
        let params = page_params(30.0, 20.0)
            .with_cell_count(count)
            .with_lloyd_iterations(iterations)
            .with_seed(count as u64);
        let output = VoronoiBuilder::new(params).unwrap().generate().unwrap();
        assert_eq!(output.cells.len(), count);
        assert!(output.emitted_count() <= count);
    }
}

#[test]
fn polygon_cells_are_closed_with_three_vertices() {
    for style in [CellEdgeStyle::Curved, CellEdgeStyle::Straight] {
        let params = page_params(16.0, 12.0)
            .with_cell_count(60)
            .with_edge_style(style)
            .with_seed(77);
        let output = VoronoiBuilder::new(params).unwrap().generate().unwrap();
        assert!(output.emitted_count() > 0);
        for cell in output.drawables() {
            assert!(cell.path.is_closed());
            assert!(cell.path.anchors().len() >= 3);
        }
    }
}

#[test]
fn full_step_relaxation_converges() {
    let params = page_params(20.0, 20.0).with_cell_count(30).with_seed(3);
    let builder = VoronoiBuilder::new(params).unwrap();
    let mut rng = builder.seed_resource();
    let diagram = builder.build_diagram(builder.generate_sites(&mut rng).unwrap());

    let relaxation =
        LloydRelaxation::new(LloydConfig::default().with_iterations(200).with_omega(1.0)).unwrap();
    let displacements: Vec<f64> = relaxation.steps(diagram).map(|s| s.max_displacement).collect();
    assert_eq!(displacements.len(), 200);
    assert!(displacements.iter().all(|d| d.is_finite()));
    let first = displacements[0];
    let last = displacements[displacements.len() - 1];
    assert!(last < first * 0.1, "first {first}, last {last}");
}

#[test]
fn full_page_profile_discards_no_cells() {
    let page = Bounds2D::from_size(18.0, 12.0);
    let params = page_params(18.0, 12.0)
        .with_cell_count(50)
        .with_seed(21)
        .with_profile(Profile::from_bounds(&page))
        .with_clipping(true, false);
    let output = VoronoiBuilder::new(params).unwrap().generate().unwrap();
    assert_eq!(output.stats.discarded_by_profile, 0);
    assert_eq!(output.stats.clipping_failures, 0);
    assert_eq!(
        output.emitted_count() + output.stats.degenerate_cells,
        50
    );
}

#[test]
fn imported_inch_profile_clips_to_shape() {
    // Dreieck mit 4 Zoll Schenkeln, als Strings wie aus einem CAD-Export.
    let json = r#"{
        "units": "in",
        "profile": [
            [{"x": "0", "y": "0"}, {"x": "4", "y": "0"}],
            [{"x": "4", "y": "0"}, {"x": "0", "y": "4"}],
            [{"x": "0", "y": "4"}, {"x": "0", "y": "0"}]
        ]
    }"#;
    let profile = load_profile(json, ProfilePlacement::AsIs).unwrap();
    let bounds = profile.bounds().unwrap();
    assert_relative_eq!(bounds.max.x, 10.16, epsilon = 1e-9);

    let params = page_params(12.0, 12.0)
        .with_cell_count(120)
        .with_edge_style(CellEdgeStyle::Straight)
        .with_seed(8)
        .with_profile(profile)
        .with_clipping(true, false);
    let output = VoronoiBuilder::new(params).unwrap().generate().unwrap();
    assert!(output.emitted_count() > 0);
    assert!(output.stats.discarded_by_profile > 0);

    // Alles, was übrig bleibt, liegt im Dreieck x + y <= 10.16.
    for cell in output.drawables() {
        for p in cell.path.flatten() {
            assert!(p.x + p.y <= 10.16 + 1e-6, "point {p:?} outside the profile");
        }
    }
    let area: f64 = output
        .drawables()
        .map(|cell| polygon_area(&cell.path.flatten()))
        .sum();
    assert!(area <= 10.16 * 10.16 / 2.0 + 1e-6);
}

#[test]
fn clipped_cells_stay_inside_concave_profile() {
    // L-Form: unten die volle Breite, oben nur die linke Hälfte.
    let l_shape = Profile::new(vec![vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(20.0, 0.0),
        Point2D::new(20.0, 10.0),
        Point2D::new(10.0, 10.0),
        Point2D::new(10.0, 20.0),
        Point2D::new(0.0, 20.0),
        Point2D::new(0.0, 0.0),
    ]]);
    let inside = |p: Point2D| {
        let eps = 1e-6;
        p.x >= -eps && p.y >= -eps && (p.y <= 10.0 + eps || p.x <= 10.0 + eps)
    };

    let params = page_params(20.0, 20.0)
        .with_cell_count(200)
        .with_edge_style(CellEdgeStyle::Straight)
        .with_scale_percent(100.0)
        .with_seed(31)
        .with_profile(l_shape)
        .with_clipping(true, false);
    let output = VoronoiBuilder::new(params).unwrap().generate().unwrap();
    assert!(output.stats.clipped_cells > 0);

    for cell in output.drawables() {
        let outline = cell.path.flatten();
        for (i, &p) in outline.iter().enumerate() {
            let next = outline[(i + 1) % outline.len()];
            assert!(inside(p), "vertex {p:?} of cell #{} outside", cell.site_index);
            let mid = (p + next) / 2.0;
            assert!(inside(mid), "edge midpoint {mid:?} of cell #{} outside", cell.site_index);
        }
    }
}

#[test]
fn line_profile_leaves_cells_unclipped() {
    let line = Profile::new(vec![vec![Point2D::new(1.0, 1.0), Point2D::new(15.0, 15.0)]]);
    let params = page_params(16.0, 16.0)
        .with_cell_count(40)
        .with_seed(4)
        .with_profile(line)
        .with_clipping(true, false);
    let output = VoronoiBuilder::new(params).unwrap().generate().unwrap();
    assert_eq!(output.stats.discarded_by_profile, 0);
    assert_eq!(output.stats.clipped_cells, 0);
    assert_eq!(output.emitted_count() + output.stats.degenerate_cells, 40);
}
