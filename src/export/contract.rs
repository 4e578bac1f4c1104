//! On-chain genesis module emitter.
//!
//! Renders the Move source that spawns every settlement and mine through
//! the population and mining registries. Those registries, the location
//! module, and the mine-type/reserve accessors are external collaborators;
//! their signatures are assumed here, not defined. All coordinates are
//! shifted to the non-negative encoding before emission.

use crate::biomes::BIOME_ORDER;
use crate::coords::AxialCoord;
use crate::mines::{self, Resource, BULK_RESOURCES};
use crate::world::{Location, WorldLayout};

const ADMIN_ADDRESS: &str = "0x554a2392980b0c3e4111c9a0e8897e632d41847d04cbd41f9e081e49ba2eb04a";

/// Render the `altriuxworldgen` module source.
pub fn render(layout: &WorldLayout) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("module altriux::altriuxworldgen {".to_string());
    lines.push("    use altriux::altriuxpopulation::{Self, PopulationRegistry};".to_string());
    lines.push("    use altriux::altriuxmining::{Self, MiningRegistry};".to_string());
    lines.push("    use altriux::altriuxlocation;".to_string());
    lines.push("    use sui::clock::Clock;".to_string());
    lines.push("    use sui::tx_context::TxContext;".to_string());
    lines.push(String::new());
    lines.push(format!("    const ADMIN: address = @{ADMIN_ADDRESS};"));
    lines.push(String::new());

    push_genesis_entry(&mut lines);
    push_spawn_helper(&mut lines);

    for biome in BIOME_ORDER {
        lines.push(format!(
            "    fun spawn_{}_cities(pop: &mut PopulationRegistry, m: &mut MiningRegistry, clock: &Clock, ctx: &mut TxContext) {{",
            biome.spawn_fn_fragment()
        ));
        for loc in layout.cities_of(biome) {
            lines.push(spawn_city_line(loc, "altriuxpopulation::id_city()"));
        }
        lines.push("    }".to_string());
        lines.push(String::new());
    }

    lines.push("    fun spawn_city_states(pop: &mut PopulationRegistry, m: &mut MiningRegistry, clock: &Clock, ctx: &mut TxContext) {".to_string());
    for loc in layout.city_states() {
        lines.push(spawn_city_line(loc, "altriuxpopulation::id_city_state()"));
    }
    lines.push("    }".to_string());
    lines.push(String::new());

    push_mine_distribution(&mut lines);

    lines.push("}".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// The single entry point: spawns every biome block, the city-states,
/// and the bulk mines in one transaction.
fn push_genesis_entry(lines: &mut Vec<String>) {
    lines.push("    // === GENESIS: Spawn all cities, city-states, and mines ===".to_string());
    lines.push("    public fun genesis_spawn_all_cities(".to_string());
    lines.push("        pop_reg: &mut PopulationRegistry,".to_string());
    lines.push("        mining_reg: &mut MiningRegistry,".to_string());
    lines.push("        clock: &Clock,".to_string());
    lines.push("        ctx: &mut TxContext".to_string());
    lines.push("    ) {".to_string());
    for biome in BIOME_ORDER {
        lines.push(format!(
            "        spawn_{}_cities(pop_reg, mining_reg, clock, ctx);",
            biome.spawn_fn_fragment()
        ));
    }
    lines.push("        spawn_city_states(pop_reg, mining_reg, clock, ctx);".to_string());
    lines.push("        distribute_resource_mines(mining_reg, clock, ctx);".to_string());
    lines.push("    }".to_string());
    lines.push(String::new());
}

/// Emit the `sc` helper: spawn one settlement plus its adjacent iron
/// mine. The adjacency rule runs in encoded space, so the east-edge check
/// compares against 419.
fn push_spawn_helper(lines: &mut Vec<String>) {
    let iron = Resource::Iron;
    lines.push("    fun sc(pop: &mut PopulationRegistry, m: &mut MiningRegistry, q: u64, r: u64, n: vector<u8>, ct: u8, ctype: u8, clock: &Clock, ctx: &mut TxContext) {".to_string());
    lines.push(
        "        altriuxpopulation::spawn_city_with_type(pop, q, r, n, @0x0, ct, ctype, ctx);"
            .to_string(),
    );
    lines.push("        let mq = if (q < 419) { q + 1 } else { q - 1 };".to_string());
    lines.push(format!(
        "        altriuxmining::spawn_mine(m, mq, r, altriuxmining::{}(), {}, @0x0, clock, ctx);",
        iron.type_accessor(),
        iron.reserve_expr(),
    ));
    lines.push("    }".to_string());
    lines.push(String::new());
}

fn spawn_city_line(loc: &Location, city_type: &str) -> String {
    let (q, r) = loc.coord.encode();
    format!(
        "        sc(pop, m, {}, {}, b\"{}\", {}, {}, clock, ctx);",
        q,
        r,
        loc.name,
        city_type,
        loc.continent.id(),
    )
}

fn push_mine_distribution(lines: &mut Vec<String>) {
    lines.push("    fun distribute_resource_mines(m: &mut MiningRegistry, clock: &Clock, ctx: &mut TxContext) {".to_string());
    for (section, resource) in BULK_RESOURCES.iter().enumerate() {
        if section > 0 {
            lines.push(String::new());
        }
        lines.push(format!(
            "        // {} mines ({}): {}",
            resource.name(),
            resource.mine_count(),
            bulk_section_note(*resource),
        ));
        for site in mines::bulk_mine_sites(*resource) {
            lines.push(spawn_mine_line(site, *resource));
        }
    }
    lines.push("    }".to_string());
}

fn spawn_mine_line(site: AxialCoord, resource: Resource) -> String {
    let (q, r) = site.encode();
    format!(
        "        altriuxmining::spawn_mine(m, {}, {}, altriuxmining::{}(), {}, @0x0, clock, ctx);",
        q,
        r,
        resource.type_accessor(),
        resource.reserve_expr(),
    )
}

/// Section comments inside the distribution function; shorter than the
/// catalog notes.
fn bulk_section_note(resource: Resource) -> &'static str {
    match resource {
        Resource::Gold => "Desert mountains near oases",
        Resource::Galena => "Cordillera + desert mountains",
        Resource::Nickelite => "Tundra zones",
        Resource::Copper => "Hills + cordillera",
        Resource::Tin => "River systems, forest/jungle",
        Resource::Iron => "Adjacent to settlements",
    }
}
