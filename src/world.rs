//! Assembles the full location stream from the placement and naming
//! passes.
//!
//! The stream order is load-bearing: six biomes of 50 cities each in
//! catalog order, then the 60 city-states, with 1-based global indices
//! running across the whole stream. Every artifact renders from this one
//! sequence.

use crate::biomes::{Biome, Continent, BIOME_ORDER};
use crate::coords::AxialCoord;
use crate::names;
use crate::placement;

pub const CITY_COUNT: usize = 300;
pub const TOTAL_LOCATIONS: usize = 360;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationKind {
    City,
    CityState,
}

/// A named settlement. Immutable once generated; a run never mutates the
/// stream after assembly.
#[derive(Clone, Debug)]
pub struct Location {
    /// 1-based position in the generation stream (1..=360).
    pub global_idx: usize,
    pub name: String,
    pub coord: AxialCoord,
    pub continent: Continent,
    /// City-states span several biomes and carry none.
    pub biome: Option<Biome>,
    pub kind: LocationKind,
}

impl Location {
    /// Identifier used by the front-end table.
    pub fn id(&self) -> String {
        match self.kind {
            LocationKind::City => format!("city-{}", self.global_idx),
            LocationKind::CityState => format!("cs-{}", self.global_idx - CITY_COUNT),
        }
    }

    /// Label for biome columns; city-states read "Mixed".
    pub fn biome_label(&self) -> &'static str {
        self.biome.map_or("Mixed", |b| b.label())
    }

    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            LocationKind::City => "city",
            LocationKind::CityState => "city_state",
        }
    }
}

/// The generated world layout.
pub struct WorldLayout {
    pub locations: Vec<Location>,
}

impl WorldLayout {
    /// Run the placement and naming passes over the fixed biome order,
    /// then append the city-states.
    pub fn generate() -> Self {
        let mut locations = Vec::with_capacity(TOTAL_LOCATIONS);
        let mut global_idx = 0;

        for biome in BIOME_ORDER {
            let sites = placement::biome_sites(biome);
            let names = names::city_names(biome, sites.len(), global_idx + 1);
            for (site, name) in sites.into_iter().zip(names) {
                global_idx += 1;
                locations.push(Location {
                    global_idx,
                    name,
                    coord: site.coord,
                    continent: site.continent,
                    biome: Some(biome),
                    kind: LocationKind::City,
                });
            }
        }

        for (site, name) in placement::city_state_sites()
            .into_iter()
            .zip(names::CITY_STATE_NAMES)
        {
            global_idx += 1;
            locations.push(Location {
                global_idx,
                name: name.to_string(),
                coord: site.coord,
                continent: site.continent,
                biome: None,
                kind: LocationKind::CityState,
            });
        }

        Self { locations }
    }

    /// Cities of one biome, in stream order.
    pub fn cities_of(&self, biome: Biome) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(move |l| l.biome == Some(biome))
    }

    /// The 60 city-states, in stream order.
    pub fn city_states(&self) -> impl Iterator<Item = &Location> {
        self.locations
            .iter()
            .filter(|l| l.kind == LocationKind::CityState)
    }

    pub fn city_count(&self) -> usize {
        self.locations
            .iter()
            .filter(|l| l.kind == LocationKind::City)
            .count()
    }

    pub fn city_state_count(&self) -> usize {
        self.locations.len() - self.city_count()
    }

    /// Settlement counts per continent (Drantium, Brontium).
    pub fn continent_counts(&self) -> (usize, usize) {
        let drantium = self
            .locations
            .iter()
            .filter(|l| l.continent == Continent::Drantium)
            .count();
        (drantium, self.locations.len() - drantium)
    }
}
