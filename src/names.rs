//! Name banks and the settlement naming formula.
//!
//! Cities are named from ten biome-specific prefixes crossed with ten
//! shared suffixes. The prefix cycle restarts per biome while the suffix
//! cycle follows the running global counter, so both cycles advance in
//! lockstep and a biome's names repeat with period 10. That repetition is
//! part of the published layout; downstream artifacts depend on it.

use crate::biomes::Biome;

// ============================================================================
// CITY NAME COMPONENTS
// ============================================================================

const TUNDRA_PREFIXES: [&str; 10] = [
    "Frost", "Ice", "Snow", "Glac", "Nord", "Polar", "Cryo", "Hiel", "Niev", "Bor",
];

const PLAINS_PREFIXES: [&str; 10] = [
    "Sol", "Llano", "Camp", "Prad", "Dorad", "Trigo", "Verd", "Sab", "Aur", "Llan",
];

const MEADOW_PREFIXES: [&str; 10] = [
    "Flor", "Prim", "Bloom", "Herb", "Petal", "Rosal", "Jard", "Vega", "Prat", "Sem",
];

const MOUNTAIN_PREFIXES: [&str; 10] = [
    "Pico", "Cima", "Roca", "Mont", "Crest", "Cumbre", "Pedr", "Alp", "Sierr", "Cerr",
];

const DESERT_PREFIXES: [&str; 10] = [
    "Aren", "Oasis", "Dunas", "Solt", "Miraj", "Khar", "Sahel", "Eremo", "Seco", "Calid",
];

const HILLS_PREFIXES: [&str; 10] = [
    "Colin", "Loma", "Cerro", "Alto", "Cuesta", "Ladera", "Ondul", "Mojon", "Otero", "Pend",
];

const SUFFIXES: [&str; 10] = [
    "ia", "um", "polis", "ton", "burg", "ville", "grad", "heim", "ford", "haven",
];

fn biome_prefixes(biome: Biome) -> &'static [&'static str; 10] {
    match biome {
        Biome::Tundra => &TUNDRA_PREFIXES,
        Biome::Plains => &PLAINS_PREFIXES,
        Biome::Meadow => &MEADOW_PREFIXES,
        Biome::MountainRange => &MOUNTAIN_PREFIXES,
        Biome::Desert => &DESERT_PREFIXES,
        Biome::Hills => &HILLS_PREFIXES,
    }
}

/// Name `count` cities of a biome. `start` is the 1-based global index of
/// the biome's first city; it drives the suffix cycle across biome
/// boundaries. No uniqueness is guaranteed or attempted.
pub fn city_names(biome: Biome, count: usize, start: usize) -> Vec<String> {
    let prefixes = biome_prefixes(biome);
    (0..count)
        .map(|i| format!("{}{}", prefixes[i % 10], SUFFIXES[(start + i) % 10]))
        .collect()
}

// ============================================================================
// CITY-STATE NAMES
// ============================================================================

/// Hand-authored city-state names, index-aligned with the coordinate
/// table in placement.rs. The four decadal blocks echo the founding
/// dynasties (Drax, Bron, Noix, Soix); the remainder are free-standing.
#[rustfmt::skip]
pub const CITY_STATE_NAMES: [&str; 60] = [
    "Draxpolis", "Draxium", "Draxburg", "Draxheim", "Draxford",
    "Draxmouth", "Draxia", "Draxville", "Draxton", "Draxgrad",
    "Bronpolis", "Bronium", "Bronburg", "Bronheim", "Bronford",
    "Bronmouth", "Bronia", "Bronville", "Bronton", "Brongrad",
    "Noixpolis", "Noixium", "Noixburg", "Noixheim", "Noixford",
    "Noixmouth", "Noixia", "Noixville", "Noixton", "Noixgrad",
    "Soixpolis", "Soixium", "Soixburg", "Soixheim", "Soixford",
    "Soixmouth", "Soixia", "Soixville", "Soixton", "Soixgrad",
    "Altriuxia", "Cascadia", "Nexuria", "Tribalia", "Galinor",
    "Vexmont", "Luxoria", "Keldara", "Mythros", "Zarenthia",
    "Orixpolis", "Velantia", "Drakonium", "Solheim", "Lunaris",
    "Aethon", "Pyralis", "Thalassia", "Verdantum", "Glacium",
];
