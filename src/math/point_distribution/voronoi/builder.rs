// src/math/point_distribution/voronoi/builder.rs

use crate::math::{
    algorithms::point_relaxation::{LloydRelaxation, LloydRelaxationStats},
    error::MathResult,
    geometry::{
        cell::{CellEdgeStyle, CellPath, CellPathBuilder, CellSizing, is_too_small, remove_small_bits},
        profile::{ClipDecision, ProfileClipper},
    },
    point_distribution::{
        sites::SiteGenerator,
        voronoi::{config::DiagramParameters, error::CellError, voronoi_diagram::VoronoiDiagram},
    },
    probability::SeedResource,
    types::{Bounds2D, Point2D},
};
use bevy::log::{debug, info};

/// Zeichenbare Zelle samt Herkunft.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableCell {
    pub site_index: usize,
    pub site: Point2D,
    pub style: CellEdgeStyle,
    pub path: CellPath,
}

/// Zähler eines Durchlaufs; jede Degradierung einer Zelle landet hier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationStats {
    pub sites_generated: usize,
    pub cells_emitted: usize,
    /// Sites ohne Polygon oder ohne bemessbares Symbol.
    pub degenerate_cells: usize,
    /// Skalierung/Einzug übersprungen, Zelle unverändert ausgegeben.
    pub degenerate_transforms: usize,
    pub small_cells_rejected: usize,
    pub clipped_cells: usize,
    pub discarded_by_profile: usize,
    pub clipping_failures: usize,
    pub relaxation: LloydRelaxationStats,
}

/// Ergebnis eines Generierungsdurchlaufs, alles in px.
#[derive(Debug, Clone)]
pub struct DiagramOutput {
    /// Pro Site-Index; `None` = Zelle weggelassen.
    pub cells: Vec<Option<DrawableCell>>,
    pub page_border: Option<Bounds2D>,
    pub page: Bounds2D,
    pub sites: Vec<Point2D>,
    pub seed: u64,
    pub stats: GenerationStats,
}

impl DiagramOutput {
    pub fn drawables(&self) -> impl Iterator<Item = &DrawableCell> {
        self.cells.iter().flatten()
    }

    pub fn emitted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Orchestriert einen vollständigen Durchlauf:
/// Seed -> Sites -> Diagramm -> Relaxation -> Pfad, Größe, Profil-Zuschnitt je Zelle.
#[derive(Debug, Clone)]
pub struct VoronoiBuilder {
    params: DiagramParameters,
}

impl VoronoiBuilder {
    pub fn new(params: DiagramParameters) -> MathResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &DiagramParameters {
        &self.params
    }

    /// PRNG aus dem konfigurierten Seed, sonst aus der Uhr.
    pub fn seed_resource(&self) -> SeedResource {
        match self.params.seed {
            Some(seed) => SeedResource::from_seed(seed),
            None => SeedResource::from_clock(),
        }
    }

    /// Sites im Innenrechteck (px).
    pub fn generate_sites(&self, rng: &mut SeedResource) -> MathResult<Vec<Point2D>> {
        SiteGenerator::new(self.params.cell_count).generate(&self.params.inner_bounds_px(), rng)
    }

    /// Diagramm über dem Innenrechteck.
    pub fn build_diagram(&self, sites: Vec<Point2D>) -> VoronoiDiagram {
        VoronoiDiagram::build(sites, self.params.inner_bounds_px())
    }

    pub fn generate(&self) -> MathResult<DiagramOutput> {
        let step_description =
            |step_name: &str| format!("VoronoiBuilder::generate - Step: {}", step_name);

        let mut rng = self.seed_resource();
        let seed = rng.seed();
        debug!("{}: seed {}", step_description("Seed"), seed);

        let sites = self.generate_sites(&mut rng)?;
        debug!(
            "{}: {} sites in {}",
            step_description("SiteGeneration"),
            sites.len(),
            self.params.inner_bounds_px()
        );

        let diagram = self.build_diagram(sites);
        debug!(
            "{}: {} of {} sites have a cell",
            step_description("DiagramBuild"),
            diagram.cell_count(),
            diagram.len()
        );

        let relaxation = LloydRelaxation::new(self.params.lloyd)?;
        let mut steps = relaxation.steps(diagram);
        while let Some(max_displacement) = steps.advance() {
            debug!(
                "{}: iteration {} max displacement {:.6} ({} remaining)",
                step_description("LloydRelaxation"),
                steps.stats().iterations_performed,
                max_displacement,
                steps.remaining()
            );
        }
        let relaxation_stats = steps.stats().clone();
        let diagram = steps.into_diagram();

        let mut output = self.render(&diagram, seed);
        output.stats.relaxation = relaxation_stats;

        info!(
            "VoronoiBuilder::generate - seed {}: {} of {} cells emitted ({} degenerate, {} clipped, {} discarded by profile)",
            seed,
            output.stats.cells_emitted,
            output.stats.sites_generated,
            output.stats.degenerate_cells,
            output.stats.clipped_cells,
            output.stats.discarded_by_profile
        );
        Ok(output)
    }

    /// Schritt (e) und (f): Zellpfade aus einem (relaxierten) Diagramm.
    ///
    /// Reihenfolge je Zelle: Pfad, Größe, Splitter entfernen, Mindestgröße, Profil.
    pub fn render(&self, diagram: &VoronoiDiagram, seed: u64) -> DiagramOutput {
        let params = &self.params;
        let page = params.page_bounds_px();
        let path_builder = CellPathBuilder::new(params.edge_style)
            .with_symbol_scale_percent(params.scale_percent)
            .with_rotation(params.symbol_rotation);
        let sizing = CellSizing::resolve(params.edge_style, params.scale_percent, params.gap_px());
        let clipper = ProfileClipper::new(
            &params.profile_px().unwrap_or_default(),
            params.padding_px(),
            params.clip_outside,
            params.clip_intersecting,
        );
        debug!(
            "VoronoiBuilder::render - style {:?}, sizing {:?}, profile clipping {}",
            params.edge_style,
            sizing,
            clipper.is_active()
        );

        let mut stats = GenerationStats {
            sites_generated: diagram.len(),
            ..Default::default()
        };
        let mut rng = rand::rng();
        let mut cells = Vec::with_capacity(diagram.len());

        for (index, &site) in diagram.sites().iter().enumerate() {
            let neighbor_sites: Vec<Point2D> = diagram
                .neighbors(index)
                .iter()
                .filter_map(|&n| diagram.site(n))
                .collect();

            let Some(path) =
                path_builder.build_with_rng(diagram.cell_polygon(index), site, &neighbor_sites, &mut rng)
            else {
                debug!("{}", CellError::DegenerateCell { site: index });
                stats.degenerate_cells += 1;
                cells.push(None);
                continue;
            };

            let mut path = match sizing.apply(&path) {
                Ok(sized) => sized,
                Err(err) => {
                    debug!("{}", err.for_site(index));
                    stats.degenerate_transforms += 1;
                    path
                }
            };
            remove_small_bits(&mut path);

            if params.reject_small_cells && !sizing.is_gap() && is_too_small(&path, &page) {
                debug!("Cell #{} rejected: smaller than 10% of the page", index);
                stats.small_cells_rejected += 1;
                cells.push(None);
                continue;
            }

            match clipper.clip(&path, site) {
                Ok(ClipDecision::Keep) => {}
                Ok(ClipDecision::Replace(clipped)) => {
                    stats.clipped_cells += 1;
                    path = clipped;
                }
                Ok(ClipDecision::Discard) => {
                    stats.discarded_by_profile += 1;
                    cells.push(None);
                    continue;
                }
                Err(err) => {
                    debug!("{}", err.for_site(index));
                    stats.clipping_failures += 1;
                    cells.push(None);
                    continue;
                }
            }

            cells.push(Some(DrawableCell {
                site_index: index,
                site,
                style: params.edge_style,
                path,
            }));
        }

        stats.cells_emitted = cells.iter().filter(|c| c.is_some()).count();
        DiagramOutput {
            cells,
            page_border: params.show_page_border.then_some(page),
            page,
            sites: diagram.sites().to_vec(),
            seed,
            stats,
        }
    }
}
