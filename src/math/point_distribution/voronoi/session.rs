// src/math/point_distribution/voronoi/session.rs

use crate::math::{
    algorithms::point_relaxation::{LloydRelaxation, StochasticRelaxation, StochasticStepStats},
    error::{MathError, MathResult},
    point_distribution::voronoi::{
        builder::{DiagramOutput, VoronoiBuilder},
        config::DiagramParameters,
        voronoi_diagram::VoronoiDiagram,
    },
    probability::SeedResource,
    types::Point2D,
};
use bevy::log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Persistierbarer Stand einer Sitzung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub seed: u64,
    pub sites: Vec<Point2D>,
    pub remaining_iterations: usize,
}

/// Zustandsbehaftetes Editor-Modell: Sites, Diagramm und Lloyd-Zähler
/// überleben Parameteränderungen, solange diese die Sites nicht betreffen.
///
/// Relaxation läuft schrittweise über [`DiagramSession::tick`], ein Schritt pro
/// externem Tick. Zwischenstände sind jederzeit über [`DiagramSession::render`] darstellbar.
#[derive(Debug, Clone)]
pub struct DiagramSession {
    builder: VoronoiBuilder,
    relaxation: LloydRelaxation,
    seed: u64,
    diagram: VoronoiDiagram,
    remaining: usize,
}

impl DiagramSession {
    pub fn new(params: DiagramParameters) -> MathResult<Self> {
        let builder = VoronoiBuilder::new(params)?;
        let relaxation = LloydRelaxation::new(builder.params().lloyd)?;
        let mut rng = builder.seed_resource();
        let seed = rng.seed();
        let sites = builder.generate_sites(&mut rng)?;
        let diagram = builder.build_diagram(sites);
        let remaining = builder.params().lloyd.iterations;

        Ok(Self {
            builder,
            relaxation,
            seed,
            diagram,
            remaining,
        })
    }

    /// Setzt eine gespeicherte Sitzung fort.
    pub fn resume(params: DiagramParameters, state: SessionState) -> MathResult<Self> {
        let builder = VoronoiBuilder::new(params)?;
        let relaxation = LloydRelaxation::new(builder.params().lloyd)?;
        if state.sites.is_empty() {
            return Err(MathError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }
        if state.sites.len() != builder.params().cell_count {
            debug!(
                "DiagramSession::resume - stored {} sites, parameters ask for {}; keeping stored sites",
                state.sites.len(),
                builder.params().cell_count
            );
        }
        let diagram = builder.build_diagram(state.sites);

        Ok(Self {
            builder,
            relaxation,
            seed: state.seed,
            diagram,
            remaining: state.remaining_iterations,
        })
    }

    pub fn save(&self) -> SessionState {
        SessionState {
            seed: self.seed,
            sites: self.diagram.sites().to_vec(),
            remaining_iterations: self.remaining,
        }
    }

    pub fn params(&self) -> &DiagramParameters {
        self.builder.params()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn diagram(&self) -> &VoronoiDiagram {
        &self.diagram
    }

    pub fn remaining_iterations(&self) -> usize {
        self.remaining
    }

    /// Übernimmt neue Parameter.
    ///
    /// Ändern sich Anzahl, Seite, Padding, Auflösung, Seed oder Erzeugungsbereich,
    /// werden die Sites aus dem Seed neu erzeugt. Sonst bleiben die relaxierten
    /// Sites erhalten; der Lloyd-Zähler wird nur bei geänderter Iterationszahl zurückgesetzt.
    pub fn set_parameters(&mut self, params: DiagramParameters) -> MathResult<()> {
        let builder = VoronoiBuilder::new(params)?;
        let relaxation = LloydRelaxation::new(builder.params().lloyd)?;
        let old = self.builder.params();
        let new = builder.params();

        let regenerate = old.cell_count != new.cell_count
            || old.page_width_cm != new.page_width_cm
            || old.page_height_cm != new.page_height_cm
            || old.padding_cm != new.padding_cm
            || old.pixels_per_inch != new.pixels_per_inch
            || (new.seed.is_some() && new.seed != Some(self.seed))
            || old.generation_area != new.generation_area
            || old.inner_bounds_px() != new.inner_bounds_px();
        let restart_lloyd = old.lloyd.iterations != new.lloyd.iterations;

        if regenerate {
            let mut rng = match new.seed {
                Some(seed) => SeedResource::from_seed(seed),
                None => SeedResource::from_seed(self.seed),
            };
            let sites = builder.generate_sites(&mut rng)?;
            debug!(
                "DiagramSession::set_parameters - regenerated {} sites from seed {}",
                sites.len(),
                rng.seed()
            );
            self.seed = rng.seed();
            self.diagram = builder.build_diagram(sites);
            self.remaining = new.lloyd.iterations;
        } else if restart_lloyd {
            self.remaining = new.lloyd.iterations;
        }

        self.builder = builder;
        self.relaxation = relaxation;
        Ok(())
    }

    /// Ein Relaxationsschritt. `None`, wenn nichts mehr zu tun ist.
    pub fn tick(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        let max_displacement = self.relaxation.step(&mut self.diagram);
        self.remaining -= 1;
        if self.relaxation.has_converged(max_displacement) {
            self.remaining = 0;
        }
        trace!(
            "DiagramSession::tick - max displacement {:.6}, {} remaining",
            max_displacement,
            self.remaining
        );
        Some(max_displacement)
    }

    /// Führt alle verbleibenden Schritte aus; Ergebnis identisch zu wiederholtem `tick()`.
    pub fn finish_relaxation(&mut self) -> usize {
        let mut performed = 0;
        while self.tick().is_some() {
            performed += 1;
        }
        performed
    }

    /// Nicht deterministischer Schritt mit Teilung und Wegfall von Sites.
    /// Die Site-Anzahl kann sich danach von `cell_count` unterscheiden.
    pub fn tick_stochastic(&mut self) -> StochasticStepStats {
        StochasticRelaxation::new().step(&mut self.diagram)
    }

    /// Zeichengeometrie für den aktuellen Stand.
    pub fn render(&self) -> DiagramOutput {
        self.builder.render(&self.diagram, self.seed)
    }
}
