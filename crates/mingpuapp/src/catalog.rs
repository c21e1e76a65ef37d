//! # Catalog Store
//!
//! The catalog is populated once at startup and never mutated afterwards. A
//! [`Catalog`] is always validated: ids are unique, compatibility scores are within
//! 0..=100 and every grid carries one of the three recognized luck values.
//!
//! ## Load Policy
//!
//! [`load`] separates two kinds of failure:
//!
//! - **Load failure** (I/O, malformed JSON, unknown element token, empty document):
//!   recovered locally. The built-in [`fallback_entry`] replaces the catalog so
//!   downstream components never see an empty or missing catalog.
//! - **Integrity failure** (duplicate ids, out-of-range score, loose luck spelling):
//!   the data source broke its contract. This is returned as
//!   [`MingpuError::DataIntegrity`] and is never papered over.

use crate::error::{MingpuError, Result};
use crate::model::{
    CatalogEntry, CharacterPair, CharacterSlot, Compatibility, Element, Grid, Hexagram, Luck,
    Meaning, Numerology,
};
use crate::store::CatalogSource;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashSet};

const MAX_SCORE: u8 = 100;

static FALLBACK_ENTRY: Lazy<CatalogEntry> = Lazy::new(|| CatalogEntry {
    id: 1,
    name: "李垣岩".to_string(),
    pinyin: "li yuan yan".to_string(),
    elements: CharacterPair {
        first: CharacterSlot {
            character: "垣".to_string(),
            strokes: 9,
            element: Element::Earth,
            radical: "土部".to_string(),
        },
        second: CharacterSlot {
            character: "岩".to_string(),
            strokes: 8,
            element: Element::Earth,
            radical: "山部".to_string(),
        },
    },
    compatibility: Compatibility {
        zodiac: "蛇".to_string(),
        favorable_roots: BTreeSet::from(["山".to_string(), "土".to_string()]),
        score: 95,
    },
    numerology: Numerology {
        heaven: Grid {
            value: 8,
            element: Element::Metal,
            luck: Luck::Auspicious,
        },
        person: Grid {
            value: 16,
            element: Element::Earth,
            luck: Luck::Auspicious,
        },
        earth: Grid {
            value: 17,
            element: Element::Metal,
            luck: Luck::Auspicious,
        },
        total: Grid {
            value: 24,
            element: Element::Fire,
            luck: Luck::Auspicious,
        },
        five_elements: "金土金".to_string(),
    },
    hexagram: Hexagram {
        name: "山地剥卦".to_string(),
        meaning: "厚积薄发".to_string(),
        derivation: "总笔画17÷8余1→乾卦".to_string(),
    },
    meaning: Meaning {
        symbolism: "垣表坚固，岩喻稳重".to_string(),
        interpretation: "象征意志坚定、根基深厚".to_string(),
    },
    risks: Vec::new(),
    notes: Some("岩书写需注意结构规范".to_string()),
    total_strokes: 17,
});

/// The built-in record substituted when the catalog cannot be loaded.
pub fn fallback_entry() -> CatalogEntry {
    FALLBACK_ENTRY.clone()
}

/// An immutable, validated list of catalog entries in source order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting data that violates the catalog contract.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    /// A catalog holding only the fallback record.
    pub fn fallback() -> Self {
        Self {
            entries: vec![fallback_entry()],
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct hexagram names in first-seen order, for populating a selector.
    pub fn hexagram_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.hexagram.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

/// Check the invariants a catalog must hold before any query runs against it.
pub fn validate(entries: &[CatalogEntry]) -> Result<()> {
    let mut ids = HashSet::with_capacity(entries.len());

    for entry in entries {
        if !ids.insert(entry.id) {
            return Err(MingpuError::DataIntegrity {
                id: entry.id,
                detail: "duplicate id".to_string(),
            });
        }

        if entry.compatibility.score > MAX_SCORE {
            return Err(MingpuError::DataIntegrity {
                id: entry.id,
                detail: format!(
                    "compatibility score {} exceeds {}",
                    entry.compatibility.score, MAX_SCORE
                ),
            });
        }

        for (grid_name, grid) in entry.numerology.grids() {
            if !grid.luck.is_recognized() {
                return Err(MingpuError::DataIntegrity {
                    id: entry.id,
                    detail: format!("{} grid has unrecognized luck \"{}\"", grid_name, grid.luck),
                });
            }
        }
    }

    Ok(())
}

/// Result of loading the catalog at startup.
#[derive(Debug)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    /// True when the source failed and the fallback record was substituted.
    pub fallback_used: bool,
}

/// Load the catalog from `source`, substituting the fallback record on load failure.
pub fn load<S: CatalogSource + ?Sized>(source: &S) -> Result<LoadOutcome> {
    let entries = match source.fetch() {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(source = %source.describe(), error = %err, "catalog load failed, using fallback record");
            return Ok(LoadOutcome {
                catalog: Catalog::fallback(),
                fallback_used: true,
            });
        }
    };

    if entries.is_empty() {
        tracing::warn!(source = %source.describe(), "catalog is empty, using fallback record");
        return Ok(LoadOutcome {
            catalog: Catalog::fallback(),
            fallback_used: true,
        });
    }

    let catalog = Catalog::new(entries)?;
    tracing::info!(source = %source.describe(), entries = catalog.len(), "catalog loaded");

    Ok(LoadOutcome {
        catalog,
        fallback_used: false,
    })
}
