use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use layout_generator::biomes::BIOME_ORDER;
use layout_generator::export::{self, catalog, contract, table};
use layout_generator::world::WorldLayout;

#[derive(Parser, Debug)]
#[command(name = "layout_generator")]
#[command(about = "Generate the world location layout and its artifacts")]
struct Args {
    /// Output path for the TypeScript city table
    #[arg(long, default_value = "world-cities.ts")]
    table: PathBuf,

    /// Output path for the markdown catalog document
    #[arg(long, default_value = "world_locations_and_cities_document.md")]
    catalog: PathBuf,

    /// Output path for the on-chain genesis module source
    #[arg(long, default_value = "altriuxworldgen.move")]
    contract: PathBuf,

    /// Also dump the location stream as JSON (for analysis tooling)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Suppress layout statistics (byte counts are still printed)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Generation failed: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let layout = WorldLayout::generate();

    if !args.quiet {
        let (drantium, brontium) = layout.continent_counts();
        println!(
            "Planned {} locations ({} cities, {} city-states)",
            layout.locations.len(),
            layout.city_count(),
            layout.city_state_count()
        );
        println!("Continent split: {drantium} Drantium, {brontium} Brontium");
        for biome in BIOME_ORDER {
            println!(
                "  {}: {} cities",
                biome.label(),
                layout.cities_of(biome).count()
            );
        }
    }

    let bytes = export::write_artifact(&args.table, &table::render(&layout))?;
    println!("Generated {} ({} bytes)", args.table.display(), bytes);

    let bytes = export::write_artifact(&args.catalog, &catalog::render(&layout))?;
    println!("Generated {} ({} bytes)", args.catalog.display(), bytes);

    let source = contract::render(&layout);
    let bytes = export::write_artifact(&args.contract, &source)?;
    println!(
        "Generated {} ({} bytes, {} lines)",
        args.contract.display(),
        bytes,
        source.matches('\n').count()
    );

    if let Some(ref path) = args.json {
        let bytes = export::export_json(&layout, path)?;
        println!("Generated {} ({} bytes)", path.display(), bytes);
    }

    Ok(())
}
