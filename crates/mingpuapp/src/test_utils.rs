use crate::model::{
    CatalogEntry, CharacterPair, CharacterSlot, Compatibility, Element, Grid, Hexagram, Luck,
    Meaning, Numerology,
};
use std::collections::BTreeSet;

/// Builds catalog entries with neutral defaults so tests only spell out what they check.
pub struct EntryBuilder {
    entry: CatalogEntry,
}

impl EntryBuilder {
    pub fn new(id: u32, name: &str) -> Self {
        let grid = |value| Grid {
            value,
            element: Element::Wood,
            luck: Luck::Neutral,
        };
        Self {
            entry: CatalogEntry {
                id,
                name: name.to_string(),
                pinyin: String::new(),
                elements: CharacterPair {
                    first: CharacterSlot {
                        character: "木".to_string(),
                        strokes: 10,
                        element: Element::Wood,
                        radical: "木部".to_string(),
                    },
                    second: CharacterSlot {
                        character: "林".to_string(),
                        strokes: 10,
                        element: Element::Wood,
                        radical: "木部".to_string(),
                    },
                },
                compatibility: Compatibility {
                    zodiac: "龙".to_string(),
                    favorable_roots: BTreeSet::new(),
                    score: 50,
                },
                numerology: Numerology {
                    heaven: grid(8),
                    person: grid(16),
                    earth: grid(20),
                    total: grid(28),
                    five_elements: "木木木".to_string(),
                },
                hexagram: Hexagram {
                    name: "乾为天".to_string(),
                    meaning: String::new(),
                    derivation: String::new(),
                },
                meaning: Meaning {
                    symbolism: String::new(),
                    interpretation: String::new(),
                },
                risks: Vec::new(),
                notes: None,
                total_strokes: 20,
            },
        }
    }

    pub fn pinyin(mut self, pinyin: &str) -> Self {
        self.entry.pinyin = pinyin.to_string();
        self
    }

    pub fn score(mut self, score: u8) -> Self {
        self.entry.compatibility.score = score;
        self
    }

    pub fn strokes(mut self, total: u32) -> Self {
        self.entry.total_strokes = total;
        self
    }

    pub fn elements(mut self, first: Element, second: Element) -> Self {
        self.entry.elements.first.element = first;
        self.entry.elements.second.element = second;
        self
    }

    pub fn grid_lucks(mut self, lucks: [Luck; 4]) -> Self {
        let [heaven, person, earth, total] = lucks;
        self.entry.numerology.heaven.luck = heaven;
        self.entry.numerology.person.luck = person;
        self.entry.numerology.earth.luck = earth;
        self.entry.numerology.total.luck = total;
        self
    }

    pub fn total_luck(mut self, luck: Luck) -> Self {
        self.entry.numerology.total.luck = luck;
        self
    }

    pub fn hexagram(mut self, name: &str) -> Self {
        self.entry.hexagram.name = name.to_string();
        self
    }

    pub fn symbolism(mut self, text: &str) -> Self {
        self.entry.meaning.symbolism = text.to_string();
        self
    }

    pub fn interpretation(mut self, text: &str) -> Self {
        self.entry.meaning.interpretation = text.to_string();
        self
    }

    pub fn risk(mut self, note: &str) -> Self {
        self.entry.risks.push(note.to_string());
        self
    }

    pub fn build(self) -> CatalogEntry {
        self.entry
    }
}

/// A deterministic catalog of `count` entries with varied scores, strokes and luck.
///
/// Ids run from 1. Scores cycle through 60..=99, strokes through 10..=29, and every
/// seventh entry's total grid is inauspicious.
pub fn sample_entries(count: usize) -> Vec<CatalogEntry> {
    (0..count)
        .map(|i| {
            let id = i as u32 + 1;
            let luck = if id % 7 == 0 {
                Luck::Inauspicious
            } else {
                Luck::Auspicious
            };
            let element = Element::ALL[i % Element::ALL.len()];
            EntryBuilder::new(id, &format!("名{}", id))
                .pinyin(&format!("ming {}", id))
                .score(60 + ((i * 13) % 40) as u8)
                .strokes(10 + ((i * 7) % 20) as u32)
                .elements(element, Element::Wood)
                .total_luck(luck)
                .build()
        })
        .collect()
}
