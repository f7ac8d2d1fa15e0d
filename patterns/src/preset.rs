//! Built-in and embedded pattern catalog.
//!
//! A handful of hardcoded starters plus every file under `presets/`,
//! embedded at compile time and sorted by name. The catalog is a cyclic
//! selector: the driving loop only ever asks for the current entry or the
//! next one.

use life_core::Pattern;

use crate::parse::{self, ParseError};

/// Pattern files compiled into the binary.
const EMBEDDED: &[(&str, &str)] = &[
    ("glider.cells", include_str!("../presets/glider.cells")),
    (
        "gosper-glider-gun.rle",
        include_str!("../presets/gosper-glider-gun.rle"),
    ),
    ("lwss.rle", include_str!("../presets/lwss.rle")),
    ("pulsar.cells", include_str!("../presets/pulsar.cells")),
];

#[derive(Debug)]
struct Preset {
    name: String,
    cells: Pattern,
}

/// The preset catalog with a current selection.
#[derive(Debug)]
pub struct Presets {
    current: usize,
    store: Vec<Preset>,
}

impl Presets {
    /// Build the catalog from the built-in patterns and the embedded files.
    ///
    /// Fails only if an embedded file does not parse, which is a packaging
    /// bug rather than a runtime condition.
    pub fn new() -> Result<Self, ParseError> {
        let mut store = builtins();
        for (file, contents) in EMBEDDED {
            let cells = parse::parse_str(contents, file)?;
            let name = file.rsplit_once('.').map_or(*file, |(stem, _)| stem);
            store.push(Preset {
                name: name.to_string(),
                cells,
            });
        }
        store.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(count = store.len(), "preset catalog loaded");
        Ok(Self { current: 0, store })
    }

    /// Name of the current preset.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.store[self.current].name
    }

    /// Cells of the current preset.
    #[must_use]
    pub fn cells(&self) -> &Pattern {
        &self.store[self.current].cells
    }

    /// Advance the selection, wrapping past the last entry.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.store.len();
    }
}

fn builtins() -> Vec<Preset> {
    let pattern = |name: &str, cells: &[&[u8]]| Preset {
        name: name.to_string(),
        cells: cells.iter().map(|row| row.to_vec()).collect(),
    };
    vec![
        pattern(
            "cross",
            &[
                &[0, 0, 1, 0, 0],
                &[0, 0, 1, 0, 0],
                &[0, 0, 1, 0, 0],
                &[1, 1, 0, 1, 1],
                &[0, 0, 1, 0, 0],
                &[0, 0, 1, 0, 0],
                &[0, 0, 1, 0, 0],
            ],
        ),
        pattern("donut", &[&[0, 1, 0], &[1, 0, 1], &[0, 1, 0]]),
        pattern(
            "quotes",
            &[&[0, 1, 1], &[0, 0, 1], &[1, 0, 0], &[1, 1, 0]],
        ),
        pattern("stone", &[&[1, 1], &[1, 1]]),
    ]
}

#[cfg(test)]
mod tests {
    use super::Presets;

    #[test]
    fn catalog_is_sorted_by_name() {
        let presets = Presets::new().unwrap();
        let names: Vec<&str> = presets.store.iter().map(|p| p.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn contains_builtins_and_embedded() {
        let presets = Presets::new().unwrap();
        for expected in ["cross", "donut", "quotes", "stone", "glider", "pulsar"] {
            assert!(
                presets.store.iter().any(|p| p.name == expected),
                "missing preset {expected:?}"
            );
        }
    }

    #[test]
    fn next_cycles_back_to_the_start() {
        let mut presets = Presets::new().unwrap();
        let first = presets.name().to_string();
        for _ in 0..presets.store.len() {
            presets.next();
        }
        assert_eq!(presets.name(), first);
    }

    #[test]
    fn embedded_gun_has_expected_extent() {
        let mut presets = Presets::new().unwrap();
        while presets.name() != "gosper-glider-gun" {
            presets.next();
        }
        assert_eq!(presets.cells().len(), 9);
        assert_eq!(presets.cells()[0].len(), 25); // jagged: trailing dead cells elided
    }
}
