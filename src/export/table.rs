//! TypeScript data-table emitter for the front-end.

use crate::world::WorldLayout;

/// Render the `world-cities.ts` module: the `WorldCity` record shape plus
/// the ordered 360-entry array literal. Coordinates stay in world space;
/// mines are not included here.
pub fn render(layout: &WorldLayout) -> String {
    let entries: Vec<String> = layout
        .locations
        .iter()
        .map(|loc| {
            format!(
                "  {{ id: '{}', name: '{}', q: {}, r: {}, continent: '{}', biome: '{}', type: '{}' }}",
                loc.id(),
                loc.name,
                loc.coord.q,
                loc.coord.r,
                loc.continent.name(),
                loc.biome_label(),
                loc.kind_label(),
            )
        })
        .collect();

    format!(
        "\nexport interface WorldCity {{\n  \
         id: string;\n  \
         name: string;\n  \
         q: number;\n  \
         r: number;\n  \
         continent: string;\n  \
         biome: string;\n  \
         type: 'city' | 'city_state';\n\
         }}\n\n\
         export const WORLD_CITIES: WorldCity[] = [\n{}\n];\n",
        entries.join(",\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_interface_and_all_records() {
        let layout = WorldLayout::generate();
        let ts = render(&layout);

        assert!(ts.contains("export interface WorldCity {"));
        assert!(ts.contains("export const WORLD_CITIES: WorldCity[] = ["));
        assert_eq!(ts.matches("{ id: '").count(), 360);
        // The interface declaration also mentions both type literals, so
        // count full record tails only.
        assert_eq!(ts.matches("type: 'city' }").count(), 300);
        assert_eq!(ts.matches("type: 'city_state' }").count(), 60);
    }

    #[test]
    fn test_city_and_city_state_rows() {
        let layout = WorldLayout::generate();
        let ts = render(&layout);

        assert!(ts.contains(
            "  { id: 'city-1', name: 'Frostum', q: -100, r: 82, \
             continent: 'Drantium', biome: 'Tundra', type: 'city' }"
        ));
        assert!(ts.contains(
            "  { id: 'cs-1', name: 'Draxpolis', q: -90, r: -30, \
             continent: 'Drantium', biome: 'Mixed', type: 'city_state' }"
        ));
    }

    #[test]
    fn test_render_is_byte_stable() {
        let layout = WorldLayout::generate();
        assert_eq!(render(&layout), render(&layout));
    }
}
