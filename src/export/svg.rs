// src/export/svg.rs

use crate::math::{
    geometry::{
        cell::{CellPath, SymbolShape},
        polygon::AffineTransform,
    },
    point_distribution::voronoi::DiagramOutput,
    types::{Bounds2D, Point2D},
};
use bevy::log::info;
use std::path::Path as FsPath;
use svg::{
    Document,
    node::element::{Circle, Group, Path, Rectangle, path::Data},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write SVG: {0}")]
    Io(#[from] std::io::Error),
}

/// Schreibt ein [`DiagramOutput`] als SVG-Dokument (px).
#[derive(Debug, Clone)]
pub struct SvgExporter {
    page: Bounds2D,
    y_up: bool,
    stroke_width: f64,
    show_sites: bool,
}

impl SvgExporter {
    pub fn new(page: Bounds2D) -> Self {
        Self {
            page,
            y_up: false,
            stroke_width: 1.0,
            show_sites: false,
        }
    }

    /// Koordinaten mit +Y nach oben, wie beim Übertragen in ein CAD-Programm.
    pub fn y_up(mut self, y_up: bool) -> Self {
        self.y_up = y_up;
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Zeichnet zusätzlich die Sites als kleine Punkte.
    pub fn with_sites(mut self, show: bool) -> Self {
        self.show_sites = show;
        self
    }

    fn transform(&self) -> AffineTransform {
        if self.y_up {
            AffineTransform::flip_y(self.page.center().y)
        } else {
            AffineTransform::identity()
        }
    }

    pub fn render(&self, output: &DiagramOutput) -> Document {
        let transform = self.transform();
        let mut document = Document::new()
            .set(
                "viewBox",
                (self.page.min.x, self.page.min.y, self.page.width(), self.page.height()),
            )
            .set("width", self.page.width())
            .set("height", self.page.height());

        if let Some(border) = output.page_border {
            let corners = transform.transform_points(&border.corners());
            let drawn = Bounds2D::from_points_iter(corners).unwrap_or(border);
            document = document.add(
                Rectangle::new()
                    .set("x", drawn.min.x)
                    .set("y", drawn.min.y)
                    .set("width", drawn.width())
                    .set("height", drawn.height())
                    .set("fill", "none")
                    .set("stroke", "blue")
                    .set("stroke-width", self.stroke_width),
            );
        }

        let mut cells = Group::new()
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", self.stroke_width);
        for cell in output.drawables() {
            cells = match &cell.path {
                CellPath::Symbol(symbol) if symbol.shape == SymbolShape::Circle => {
                    let center = transform.transform_point(symbol.center);
                    cells.add(
                        Circle::new()
                            .set("cx", center.x)
                            .set("cy", center.y)
                            .set("r", symbol.scaled_radius()),
                    )
                }
                path => cells.add(Path::new().set("d", self.path_data(path, &transform))),
            };
        }
        document = document.add(cells);

        if self.show_sites {
            let mut sites = Group::new().set("fill", "red");
            for site in &output.sites {
                let p = transform.transform_point(*site);
                sites = sites.add(
                    Circle::new()
                        .set("cx", p.x)
                        .set("cy", p.y)
                        .set("r", self.stroke_width * 1.5),
                );
            }
            document = document.add(sites);
        }

        document
    }

    pub fn save(&self, output: &DiagramOutput, path: impl AsRef<FsPath>) -> Result<(), ExportError> {
        let document = self.render(output);
        svg::save(path.as_ref(), &document)?;
        info!(
            "SVG '{}' written with {} cells.",
            path.as_ref().display(),
            output.emitted_count()
        );
        Ok(())
    }

    /// Kurven als kubische Bézier-Segmente, alles andere als geschlossener Linienzug.
    fn path_data(&self, path: &CellPath, transform: &AffineTransform) -> Data {
        match path {
            CellPath::Curve { segments } if !segments.is_empty() => {
                let start = transform.transform_point(segments[0].point);
                let mut data = Data::new().move_to((start.x, start.y));
                for (i, segment) in segments.iter().enumerate() {
                    let next = segments[(i + 1) % segments.len()];
                    let c1 = transform.transform_point(segment.point + segment.handle_out);
                    let c2 = transform.transform_point(next.point + next.handle_in);
                    let end = transform.transform_point(next.point);
                    data = data.cubic_curve_to((c1.x, c1.y, c2.x, c2.y, end.x, end.y));
                }
                data.close()
            }
            other => polyline_data(&transform.transform_points(&other.flatten())),
        }
    }
}

fn polyline_data(points: &[Point2D]) -> Data {
    let Some((first, rest)) = points.split_first() else {
        return Data::new();
    };
    rest.iter()
        .fold(Data::new().move_to((first.x, first.y)), |data, p| {
            data.line_to((p.x, p.y))
        })
        .close()
}
