use std::process;

use terraseries::loaders::GdalLoader;
use terraseries::{BandRange, DatasetInput, RasterDataset, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let (datafile, row, col) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            eprintln!("Usage: terraseries <datafile> <row> <col>");
            eprintln!("Prints the band series at one pixel of a raster dataset.");
            process::exit(2);
        }
    };

    let dataset = RasterDataset::open(DatasetInput::Path(datafile.into()), &GdalLoader)?;

    if !dataset.pixel_in_coverage(row, col) {
        eprintln!(
            "Pixel ({}, {}) is outside the {} x {} grid",
            row,
            col,
            dataset.rows(),
            dataset.cols()
        );
        process::exit(1);
    }

    for value in dataset.series_at_pixel(row, col, BandRange::full())? {
        println!("{}", value);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Option<(String, usize, usize)> {
    if args.len() != 4 {
        return None;
    }

    let row = args[2].parse().ok()?;
    let col = args[3].parse().ok()?;
    Some((args[1].clone(), row, col))
}
