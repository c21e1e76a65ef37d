//! # Catalog Statistics
//!
//! Grouped counts over the **whole** catalog, for the summary charts. These never look
//! at the current filter state: they describe the dataset, not the view.
//!
//! - [`by_element`]: element category of each character. A name whose two characters
//!   share an element counts once for that element.
//! - [`by_luck`]: luck of each entry's `total` grid, over exactly three buckets. A luck
//!   value outside the three is a [`MingpuError::DataIntegrity`] error.
//! - [`by_strokes`]: total stroke count in four fixed inclusive buckets. Entries outside
//!   every bucket are left out.

use crate::catalog::Catalog;
use crate::error::{MingpuError, Result};
use crate::model::{CatalogEntry, Element, Luck};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LuckCounts {
    pub auspicious: usize,
    pub neutral: usize,
    pub inauspicious: usize,
}

impl LuckCounts {
    pub fn get(&self, luck: &Luck) -> usize {
        match luck {
            Luck::Auspicious => self.auspicious,
            Luck::Neutral => self.neutral,
            Luck::Inauspicious => self.inauspicious,
            Luck::Unrecognized(_) => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.auspicious + self.neutral + self.inauspicious
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrokeBucket {
    pub min: u32,
    pub max: u32,
}

impl StrokeBucket {
    pub fn contains(&self, strokes: u32) -> bool {
        strokes >= self.min && strokes <= self.max
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

pub const STROKE_BUCKETS: [StrokeBucket; 4] = [
    StrokeBucket { min: 10, max: 15 },
    StrokeBucket { min: 16, max: 20 },
    StrokeBucket { min: 21, max: 25 },
    StrokeBucket { min: 26, max: 30 },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub label: String,
    pub min: u32,
    pub max: u32,
    pub count: usize,
}

/// All three summaries, ready to hand to chart renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub entries: usize,
    pub elements: BTreeMap<Element, usize>,
    pub luck: LuckCounts,
    pub strokes: Vec<BucketCount>,
}

pub fn by_element(entries: &[CatalogEntry]) -> BTreeMap<Element, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        let first = entry.elements.first.element;
        let second = entry.elements.second.element;
        *counts.entry(first).or_insert(0) += 1;
        if second != first {
            *counts.entry(second).or_insert(0) += 1;
        }
    }
    counts
}

pub fn by_luck(entries: &[CatalogEntry]) -> Result<LuckCounts> {
    let mut counts = LuckCounts::default();
    for entry in entries {
        match &entry.numerology.total.luck {
            Luck::Auspicious => counts.auspicious += 1,
            Luck::Neutral => counts.neutral += 1,
            Luck::Inauspicious => counts.inauspicious += 1,
            Luck::Unrecognized(raw) => {
                return Err(MingpuError::DataIntegrity {
                    id: entry.id,
                    detail: format!("total grid has unrecognized luck \"{}\"", raw),
                });
            }
        }
    }
    Ok(counts)
}

pub fn by_strokes(entries: &[CatalogEntry]) -> Vec<BucketCount> {
    STROKE_BUCKETS
        .iter()
        .map(|bucket| BucketCount {
            label: bucket.label(),
            min: bucket.min,
            max: bucket.max,
            count: entries
                .iter()
                .filter(|e| bucket.contains(e.total_strokes))
                .count(),
        })
        .collect()
}

pub fn summarize(catalog: &Catalog) -> Result<CatalogStats> {
    let entries = catalog.entries();
    Ok(CatalogStats {
        entries: entries.len(),
        elements: by_element(entries),
        luck: by_luck(entries)?,
        strokes: by_strokes(entries),
    })
}
