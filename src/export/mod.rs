//! Artifact writers for the generated layout.
//!
//! Each emitter renders the full artifact to a `String`; `write_artifact`
//! persists it and reports the byte count for the confirmation line. The
//! emitters only read the layout, so they can run in any order.

pub mod catalog;
pub mod contract;
pub mod table;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::world::WorldLayout;

/// Write rendered artifact text to `path`, returning the byte count.
pub fn write_artifact(path: &Path, contents: &str) -> std::io::Result<usize> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    Ok(contents.len())
}

/// Machine-readable location row for analysis tooling.
#[derive(Serialize)]
struct LocationRecord<'a> {
    id: String,
    name: &'a str,
    q: i32,
    r: i32,
    continent: &'static str,
    biome: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Dump the full location stream as pretty-printed JSON.
pub fn export_json(layout: &WorldLayout, path: &Path) -> std::io::Result<usize> {
    let records: Vec<LocationRecord> = layout
        .locations
        .iter()
        .map(|loc| LocationRecord {
            id: loc.id(),
            name: &loc.name,
            q: loc.coord.q,
            r: loc.coord.r,
            continent: loc.continent.name(),
            biome: loc.biome_label(),
            kind: loc.kind_label(),
        })
        .collect();
    let json = serde_json::to_string_pretty(&records)?;
    write_artifact(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::WorldLayout;

    #[test]
    fn test_write_artifact_reports_byte_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.txt");
        let bytes = write_artifact(&path, "hello world\n").unwrap();
        assert_eq!(bytes, 12);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello world\n");
    }

    #[test]
    fn test_json_dump_covers_every_location() {
        let layout = WorldLayout::generate();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        export_json(&layout, &path).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 360);
        assert_eq!(rows[0]["id"], "city-1");
        assert_eq!(rows[0]["name"], "Frostum");
        assert_eq!(rows[300]["type"], "city_state");
        assert_eq!(rows[300]["biome"], "Mixed");
    }
}
