//! Mine placement: resource kinds, fixed counts, and coordinate formulas.
//!
//! Iron is special-cased: every settlement gets one iron mine directly
//! beside it. The five bulk resources are laid out by their own fixed
//! arithmetic sequences, independent of where any city landed; overlaps
//! with cities or with each other are not deduplicated.

use crate::coords::{self, AxialCoord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Iron,
    Gold,
    Galena,
    Nickelite,
    Copper,
    Tin,
}

pub const ALL_RESOURCES: [Resource; 6] = [
    Resource::Iron,
    Resource::Gold,
    Resource::Galena,
    Resource::Nickelite,
    Resource::Copper,
    Resource::Tin,
];

/// The formula-placed resources, in contract emission order.
pub const BULK_RESOURCES: [Resource; 5] = [
    Resource::Gold,
    Resource::Galena,
    Resource::Nickelite,
    Resource::Copper,
    Resource::Tin,
];

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Iron => "Iron",
            Resource::Gold => "Gold",
            Resource::Galena => "Galena",
            Resource::Nickelite => "Nickelite",
            Resource::Copper => "Copper",
            Resource::Tin => "Tin",
        }
    }

    /// Total mines of this resource on the map.
    pub fn mine_count(&self) -> usize {
        match self {
            Resource::Iron => 360,
            Resource::Gold => 30,
            Resource::Galena => 100,
            Resource::Nickelite => 30,
            Resource::Copper => 200,
            Resource::Tin => 50,
        }
    }

    /// Where the deposits sit, for the catalog summary table.
    pub fn deposit_note(&self) -> &'static str {
        match self {
            Resource::Iron => "Adjacent to every city and city-state",
            Resource::Gold => "Desert mountains near oases",
            Resource::Galena => "Cordillera + desert mountains",
            Resource::Nickelite => "Tundra zones (15 north, 15 south)",
            Resource::Copper => "Hills + cordillera foothills",
            Resource::Tin => "River systems in forest/jungle",
        }
    }

    /// Mine-type accessor on the mining registry (its identifiers are
    /// Spanish-flavored on-chain).
    pub fn type_accessor(&self) -> &'static str {
        match self {
            Resource::Iron => "id_mine_type_hierro",
            Resource::Gold => "id_mine_type_oro",
            Resource::Galena => "id_mine_type_galena",
            Resource::Nickelite => "id_mine_type_niquelita",
            Resource::Copper => "id_mine_type_cobre",
            Resource::Tin => "id_mine_type_estano",
        }
    }

    /// Per-mine reserve expression. Gold and galena split a shared
    /// reserve across their mine count; the rest use the bare accessor.
    pub fn reserve_expr(&self) -> &'static str {
        match self {
            Resource::Iron => "altriuxmining::reserve_iron()",
            Resource::Gold => "altriuxmining::reserve_gold() / 30",
            Resource::Galena => "altriuxmining::reserve_galena() / 100",
            Resource::Nickelite => "altriuxmining::reserve_nickelite()",
            Resource::Copper => "altriuxmining::reserve_copper()",
            Resource::Tin => "altriuxmining::reserve_tin()",
        }
    }
}

/// Iron mines sit one step east of their settlement, or one step west
/// when the settlement is already on the eastern map edge.
pub fn iron_mine_coord(city: AxialCoord) -> AxialCoord {
    let mq = if city.q < coords::Q_MAX {
        city.q + 1
    } else {
        city.q - 1
    };
    AxialCoord::new(mq, city.r)
}

/// World-space sites for a bulk resource, in emission order. Iron has no
/// bulk sites; it is placed by settlement adjacency.
pub fn bulk_mine_sites(resource: Resource) -> Vec<AxialCoord> {
    let mut sites = Vec::with_capacity(resource.mine_count());
    match resource {
        Resource::Iron => {}
        Resource::Gold => {
            for i in 0..15 {
                sites.push(AxialCoord::new(-48 + i * 2, 8 + (i % 3) * 3));
            }
            for i in 0..15 {
                sites.push(AxialCoord::new(42 + i * 2, 12 + (i % 3) * 3));
            }
        }
        Resource::Galena => {
            for i in 0..50 {
                sites.push(AxialCoord::new(-65 + i, -5 + (i % 10)));
            }
            for i in 0..50 {
                sites.push(AxialCoord::new(35 + i, i % 10));
            }
        }
        Resource::Nickelite => {
            for i in 0..15 {
                sites.push(AxialCoord::new(-90 + i * 12, 85 + (i % 3) * 2));
            }
            for i in 0..15 {
                sites.push(AxialCoord::new(-90 + i * 12, -(85 + (i % 3) * 2)));
            }
        }
        Resource::Copper => {
            for i in 0..100 {
                sites.push(AxialCoord::new(-100 + i * 2, -40 + (i % 20)));
            }
            for i in 0..100 {
                sites.push(AxialCoord::new(30 + i, -20 + (i % 20)));
            }
        }
        Resource::Tin => {
            for i in 0..25 {
                sites.push(AxialCoord::new(-85 + i * 3, -25 + i));
            }
            for i in 0..25 {
                sites.push(AxialCoord::new(45 + i * 3, -10 + i));
            }
        }
    }
    sites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Q_MAX;

    #[test]
    fn test_iron_adjacency() {
        assert_eq!(
            iron_mine_coord(AxialCoord::new(-100, 82)),
            AxialCoord::new(-99, 82)
        );
        // Eastern edge flips to the west side.
        assert_eq!(
            iron_mine_coord(AxialCoord::new(Q_MAX, 0)),
            AxialCoord::new(208, 0)
        );
        assert_eq!(
            iron_mine_coord(AxialCoord::new(208, 0)),
            AxialCoord::new(209, 0)
        );
    }

    #[test]
    fn test_bulk_counts() {
        for resource in BULK_RESOURCES {
            assert_eq!(
                bulk_mine_sites(resource).len(),
                resource.mine_count(),
                "{:?}",
                resource
            );
        }
        assert!(bulk_mine_sites(Resource::Iron).is_empty());
    }

    #[test]
    fn test_bulk_sites_stay_in_bounds() {
        for resource in BULK_RESOURCES {
            for site in bulk_mine_sites(resource) {
                assert!(site.in_world_bounds(), "{:?} {}", resource, site);
                let (eq, er) = site.encode();
                assert!(eq <= 419 && er <= 219);
            }
        }
    }

    #[test]
    fn test_bulk_formula_spot_checks() {
        let gold = bulk_mine_sites(Resource::Gold);
        assert_eq!(gold[0], AxialCoord::new(-48, 8));
        assert_eq!(gold[15], AxialCoord::new(42, 12));

        let nickelite = bulk_mine_sites(Resource::Nickelite);
        assert_eq!(nickelite[0], AxialCoord::new(-90, 85));
        assert_eq!(nickelite[15], AxialCoord::new(-90, -85));

        let copper = bulk_mine_sites(Resource::Copper);
        assert_eq!(copper[99], AxialCoord::new(98, -21));
        assert_eq!(copper[100], AxialCoord::new(30, -20));
    }
}
