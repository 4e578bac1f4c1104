//! Settlement placement formulas.
//!
//! Every site is a closed-form function of its slot index; nothing is
//! random and nothing depends on earlier output, so re-running always
//! reproduces the same layout. Overlaps between categories are accepted
//! as-is (no collision pass).

use crate::biomes::{Biome, Continent};
use crate::coords::AxialCoord;

/// A planned site: where a settlement goes and which continent claims it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlannedSite {
    pub coord: AxialCoord,
    pub continent: Continent,
}

impl PlannedSite {
    fn new(q: i32, r: i32, continent: Continent) -> Self {
        Self {
            coord: AxialCoord::new(q, r),
            continent,
        }
    }
}

pub const CITIES_PER_BIOME: usize = 50;
pub const CITY_STATE_COUNT: usize = 60;

/// Plan the 50 city sites for a biome, in slot order.
pub fn biome_sites(biome: Biome) -> Vec<PlannedSite> {
    match biome {
        Biome::Tundra => tundra_sites(),
        Biome::Plains => paired_grids(Grid::new(-100, 8, -30, 10), Grid::new(45, 8, -30, 10)),
        Biome::Meadow => paired_grids(Grid::new(-90, 7, -18, 7), Grid::new(50, 7, -18, 7)),
        Biome::MountainRange => mountain_sites(),
        Biome::Desert => paired_grids(Grid::new(-50, 4, 5, 4), Grid::new(40, 4, 10, 3)),
        Biome::Hills => paired_grids(Grid::new(-95, 6, -45, 8), Grid::new(40, 6, -30, 8)),
    }
}

/// Origin and step sizes of a 5-column, 25-site rectangular grid.
#[derive(Clone, Copy)]
struct Grid {
    q0: i32,
    dq: i32,
    r0: i32,
    dr: i32,
}

impl Grid {
    fn new(q0: i32, dq: i32, r0: i32, dr: i32) -> Self {
        Self { q0, dq, r0, dr }
    }

    /// q steps by `dq` within a row, r steps by `dr` between rows.
    fn sites(self, continent: Continent) -> Vec<PlannedSite> {
        (0..25)
            .map(|i| {
                PlannedSite::new(
                    self.q0 + (i % 5) * self.dq,
                    self.r0 + (i / 5) * self.dr,
                    continent,
                )
            })
            .collect()
    }
}

/// One 25-site grid per continent, Drantium first.
fn paired_grids(drantium: Grid, brontium: Grid) -> Vec<PlannedSite> {
    let mut sites = drantium.sites(Continent::Drantium);
    sites.extend(brontium.sites(Continent::Brontium));
    sites
}

/// Two polar bands of 25 sites each, north first. The bands cross the
/// continental divide, so the continent follows the sign of q.
fn tundra_sites() -> Vec<PlannedSite> {
    let mut sites = Vec::with_capacity(CITIES_PER_BIOME);
    for band in [1, -1] {
        for i in 0..25 {
            let q = -100 + i * 8;
            let r = band * (82 + (i % 4) * 4);
            let continent = if q < 0 {
                Continent::Drantium
            } else {
                Continent::Brontium
            };
            sites.push(PlannedSite::new(q, r, continent));
        }
    }
    sites
}

/// Mountain-range sites: the Drantium half follows an arc west of the
/// desert (q wobbles on a cosine, r climbs linearly); the Brontium half is
/// a regular grid. The whole biome clamps to [-130,130] x [-100,100].
fn mountain_sites() -> Vec<PlannedSite> {
    let mut sites = Vec::with_capacity(CITIES_PER_BIOME);
    for i in 0..25 {
        let theta = 3.14159 / 25.0 * f64::from(i);
        let q = (-68.0 + theta.cos() * 3.0) as i32;
        let r = (-5.0 + f64::from(i) * 1.2) as i32;
        sites.push(clamp_mountain(PlannedSite::new(q, r, Continent::Drantium)));
    }
    for site in Grid::new(65, -3, 3, 5).sites(Continent::Brontium) {
        sites.push(clamp_mountain(site));
    }
    sites
}

fn clamp_mountain(site: PlannedSite) -> PlannedSite {
    PlannedSite::new(
        site.coord.q.clamp(-130, 130),
        site.coord.r.clamp(-100, 100),
        site.continent,
    )
}

// Hand-placed city-state sites, spread across both continents and a mix
// of biomes. Index-aligned with the name list in names.rs.
#[rustfmt::skip]
const DRANTIUM_CITY_STATES: [(i32, i32); 30] = [
    (-90, -30), (-85, -20), (-80, -10), (-75, 0), (-70, -25),
    (-65, -15), (-60, -5), (-55, 5), (-95, -10), (-100, -20),
    (-50, -25), (-45, -15), (-105, 0), (-110, -10), (-85, 10),
    (-75, 15), (-65, 10), (-55, -20), (-90, 5), (-80, -35),
    (-100, -35), (-70, -40), (-60, -30), (-50, -10), (-95, 10),
    (-110, 5), (-85, -40), (-75, -45), (-65, -35), (-55, 15),
];

#[rustfmt::skip]
const BRONTIUM_CITY_STATES: [(i32, i32); 30] = [
    (50, -10), (55, 0), (60, 10), (65, -5), (70, 15),
    (75, 5), (80, -10), (85, 0), (90, 10), (95, -5),
    (100, 5), (105, -10), (45, 5), (50, 15), (55, -20),
    (60, -15), (65, 20), (70, -20), (75, -15), (80, 15),
    (85, 20), (90, -15), (95, 15), (100, -20), (105, 10),
    (45, -15), (50, -25), (55, 20), (60, 25), (65, -25),
];

/// The 60 city-state sites, Drantium block first.
pub fn city_state_sites() -> Vec<PlannedSite> {
    DRANTIUM_CITY_STATES
        .iter()
        .map(|&(q, r)| PlannedSite::new(q, r, Continent::Drantium))
        .chain(
            BRONTIUM_CITY_STATES
                .iter()
                .map(|&(q, r)| PlannedSite::new(q, r, Continent::Brontium)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biomes::BIOME_ORDER;

    #[test]
    fn test_every_biome_yields_fifty_sites_in_bounds() {
        for biome in BIOME_ORDER {
            let sites = biome_sites(biome);
            assert_eq!(sites.len(), CITIES_PER_BIOME, "{:?}", biome);
            for site in &sites {
                assert!(site.coord.in_world_bounds(), "{:?} {}", biome, site.coord);
            }
        }
    }

    #[test]
    fn test_continent_splits() {
        for biome in BIOME_ORDER {
            let drantium = biome_sites(biome)
                .iter()
                .filter(|s| s.continent == Continent::Drantium)
                .count();
            // Tundra bands cross the divide at q = 4, giving 13+13.
            let expected = if biome == Biome::Tundra { 26 } else { 25 };
            assert_eq!(drantium, expected, "{:?}", biome);
        }
    }

    #[test]
    fn test_tundra_band_formula() {
        let sites = tundra_sites();
        assert_eq!(sites[0].coord, AxialCoord::new(-100, 82));
        assert_eq!(sites[0].continent, Continent::Drantium);
        // Southern band mirrors r.
        assert_eq!(sites[25].coord, AxialCoord::new(-100, -82));
        // r cycles through four offsets.
        assert_eq!(sites[1].coord.r, 86);
        assert_eq!(sites[3].coord.r, 94);
        assert_eq!(sites[4].coord.r, 82);
    }

    #[test]
    fn test_mountain_arc_endpoints_and_clamp() {
        let sites = biome_sites(Biome::MountainRange);
        assert_eq!(sites[0].coord, AxialCoord::new(-65, -5));
        assert_eq!(sites[24].coord, AxialCoord::new(-70, 23));
        assert_eq!(sites[25].coord, AxialCoord::new(65, 3));
        for site in &sites {
            assert!((-130..=130).contains(&site.coord.q));
            assert!((-100..=100).contains(&site.coord.r));
        }
    }

    #[test]
    fn test_grid_biome_corners() {
        let plains = biome_sites(Biome::Plains);
        assert_eq!(plains[0].coord, AxialCoord::new(-100, -30));
        assert_eq!(plains[24].coord, AxialCoord::new(-68, 10));
        assert_eq!(plains[25].coord, AxialCoord::new(45, -30));

        let desert = biome_sites(Biome::Desert);
        assert_eq!(desert[0].coord, AxialCoord::new(-50, 5));
        // Brontium desert rows step by 3, not 4.
        assert_eq!(desert[49].coord, AxialCoord::new(56, 22));
    }

    #[test]
    fn test_city_states() {
        let sites = city_state_sites();
        assert_eq!(sites.len(), CITY_STATE_COUNT);
        assert_eq!(sites[0].coord, AxialCoord::new(-90, -30));
        assert_eq!(sites[0].continent, Continent::Drantium);
        assert_eq!(sites[30].coord, AxialCoord::new(50, -10));
        assert_eq!(sites[30].continent, Continent::Brontium);
        let drantium = sites
            .iter()
            .filter(|s| s.continent == Continent::Drantium)
            .count();
        assert_eq!(drantium, 30);
    }

    #[test]
    fn test_planning_is_deterministic() {
        for biome in BIOME_ORDER {
            assert_eq!(biome_sites(biome), biome_sites(biome));
        }
        assert_eq!(city_state_sites(), city_state_sites());
    }
}
