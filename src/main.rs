// ./src/main.rs
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use std::{error::Error, fs, path::PathBuf};

use voronoi_sketch::{
    export::SvgExporter,
    math::{
        geometry::profile::{ProfileDocument, ProfilePlacement},
        point_distribution::voronoi::{DiagramParameters, VoronoiBuilder},
    },
};

const OUTPUT_PATH: &str = "output/voronoi.svg";

/// Kommandozeile: `[--sites] [parameter.json] [profil.json]`
#[derive(Resource, Debug, Default)]
struct DemoInput {
    params_path: Option<PathBuf>,
    profile_path: Option<PathBuf>,
    show_sites: bool,
}

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let show_sites = args.iter().any(|arg| arg == "--sites");
    args.retain(|arg| arg != "--sites");
    let mut paths = args.into_iter().map(PathBuf::from);
    let input = DemoInput {
        params_path: paths.next(),
        profile_path: paths.next(),
        show_sites,
    };

    // Ohne Runner-Plugin läuft die App genau einmal durch.
    App::new()
        .add_plugins(LogPlugin {
            filter: "voronoi_sketch=debug".into(),
            level: Level::INFO,
            ..Default::default()
        })
        .insert_resource(input)
        .add_systems(Startup, generate_diagram_system)
        .run();
}

fn generate_diagram_system(input: Res<DemoInput>) {
    match generate_diagram(&input) {
        Ok(path) => info!("Voronoi diagram written to '{}'.", path),
        Err(err) => error!("Voronoi diagram generation failed: {}", err),
    }
}

fn generate_diagram(input: &DemoInput) -> Result<&'static str, Box<dyn Error>> {
    let mut params = match &input.params_path {
        Some(path) => serde_json::from_str::<DiagramParameters>(&fs::read_to_string(path)?)?,
        None => DiagramParameters::default(),
    };

    if let Some(path) = &input.profile_path {
        let document = ProfileDocument::from_json(&fs::read_to_string(path)?)?;
        if let Some((width, height)) = document.page_size_cm()? {
            params = params.with_page_size(width, height);
        }
        params = params.with_profile(document.to_profile(ProfilePlacement::AlignToOrigin)?);
        info!("Profile loaded from '{}'.", path.display());
    }

    let output = VoronoiBuilder::new(params)?.generate()?;
    fs::create_dir_all("output")?;
    SvgExporter::new(output.page)
        .with_sites(input.show_sites)
        .save(&output, OUTPUT_PATH)?;
    Ok(OUTPUT_PATH)
}
