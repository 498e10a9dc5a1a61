// src/export/mod.rs

// Ausgabe-Adapter; der Kern in `math` hängt nicht davon ab.
pub mod svg;

pub use self::svg::{ExportError, SvgExporter};
