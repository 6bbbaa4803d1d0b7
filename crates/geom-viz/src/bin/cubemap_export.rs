//! Writes every cubemap layout of a procedural test cubemap as PNGs
//! into the working directory.

use cube_remap::{CubeMappingType, Cubemap, remap};
use image::Rgba;

fn layout_name(mapping: CubeMappingType) -> &'static str {
    match mapping {
        CubeMappingType::Spherical => "spherical",
        CubeMappingType::Cylindrical => "cylindrical",
        CubeMappingType::Faces4x3 => "4x3",
        CubeMappingType::Faces3x4 => "3x4",
        CubeMappingType::Faces6x1 => "6x1",
        CubeMappingType::Faces1x6 => "1x6",
    }
}

fn main() {
    // one saturated color per face, in canonical face order
    let colors = [
        Rgba([255, 0, 0, 255]),
        Rgba([0, 255, 255, 255]),
        Rgba([0, 255, 0, 255]),
        Rgba([255, 0, 255, 255]),
        Rgba([0, 0, 255, 255]),
        Rgba([255, 255, 0, 255]),
    ];
    let cubemap = Cubemap::solid(64, colors).expect("non-zero face size");

    for mapping in CubeMappingType::ALL {
        let image = remap(&cubemap, mapping);
        let path = format!("cubemap_{}.png", layout_name(mapping));
        if let Err(err) = image.save(&path) {
            eprintln!("failed to write {path}: {err}");
            std::process::exit(1);
        }
        println!("wrote {path} ({}x{})", image.width(), image.height());
    }
}
