use polygon_containment::{Point, RegionIndex, RegionReader};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <geojson-file> <lat> <lon>", args[0]);
        std::process::exit(1);
    }

    let lat: f64 = args[2].parse()?;
    let lon: f64 = args[3].parse()?;

    let mut warnings = Vec::new();
    let regions = RegionReader::from_path(&args[1])?.read_regions(&mut warnings)?;

    println!("=== GeoJSON File Info ===");
    println!("Regions: {}", regions.len());
    for warning in &warnings {
        println!("Warning: {warning:?}");
    }

    let index = RegionIndex::from(regions);
    let point = Point::lat_lon(lat, lon);

    println!("\n=== Regions containing {lat}, {lon} ===");
    let mut found = false;
    for region in index.locate_all(point) {
        found = true;
        println!("- {}", region.name.as_deref().unwrap_or("(unnamed)"));
    }
    if !found {
        println!("(none)");
    }

    Ok(())
}
