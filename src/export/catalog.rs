//! Markdown catalog emitter.
//!
//! One table per biome, one for the city-states, and a summary of the
//! resource-mine distribution. Meant for humans, so coordinates stay in
//! world space and each row shows its adjacent iron mine.

use crate::biomes::BIOME_ORDER;
use crate::mines::{self, ALL_RESOURCES};
use crate::world::WorldLayout;

/// Render the master catalog document.
pub fn render(layout: &WorldLayout) -> String {
    let mut lines: Vec<String> = vec![
        "# World Locations & Cities Catalog".to_string(),
        String::new(),
        "All 300 claimable cities and 60 city-states with coordinates, biomes, and adjacent mines."
            .to_string(),
        String::new(),
    ];

    for biome in BIOME_ORDER {
        lines.push(format!("## {} Cities (50)", biome.label()));
        lines.push(String::new());
        lines.push("| # | Name | q | r | Continent | Iron Mine |".to_string());
        lines.push("|---|---|---|---|---|---|".to_string());
        for loc in layout.cities_of(biome) {
            let mine = mines::iron_mine_coord(loc.coord);
            lines.push(format!(
                "| {} | {} | {} | {} | {} | ({},{}) |",
                loc.global_idx,
                loc.name,
                loc.coord.q,
                loc.coord.r,
                loc.continent.name(),
                mine.q,
                mine.r,
            ));
        }
        lines.push(String::new());
    }

    lines.push("## City-States (60)".to_string());
    lines.push(String::new());
    lines.push("| # | Name | q | r | Continent | Iron Mine |".to_string());
    lines.push("|---|---|---|---|---|---|".to_string());
    for (i, loc) in layout.city_states().enumerate() {
        let mine = mines::iron_mine_coord(loc.coord);
        lines.push(format!(
            "| {} | {} | {} | {} | {} | ({},{}) |",
            i + 1,
            loc.name,
            loc.coord.q,
            loc.coord.r,
            loc.continent.name(),
            mine.q,
            mine.r,
        ));
    }
    lines.push(String::new());

    lines.push("## Resource Mines Distribution".to_string());
    lines.push(String::new());
    lines.push("| Type | Count | Biome/Location |".to_string());
    lines.push("|---|---|---|".to_string());
    for resource in ALL_RESOURCES {
        lines.push(format!(
            "| {} | {} | {} |",
            resource.name(),
            resource.mine_count(),
            resource.deposit_note(),
        ));
    }

    lines.join("\n")
}
