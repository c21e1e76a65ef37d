#![allow(dead_code)]

use mingpuapp::model::{
    CatalogEntry, CharacterPair, CharacterSlot, Compatibility, Element, Grid, Hexagram, Luck,
    Meaning, Numerology,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

pub const HEXAGRAMS: [&str; 3] = ["乾为天", "坤为地", "山地剥卦"];
pub const NAMES: [&str; 6] = ["李明", "王华", "alpha", "Beta", "张伟", "li"];

fn slot(character: &str, element: Element) -> CharacterSlot {
    CharacterSlot {
        character: character.to_string(),
        strokes: 8,
        element,
        radical: String::new(),
    }
}

fn grid(value: u32, luck: Luck) -> Grid {
    Grid {
        value,
        element: Element::Earth,
        luck,
    }
}

pub fn entry(
    id: u32,
    name: &str,
    score: u8,
    total_strokes: u32,
    lucks: [Luck; 4],
    hexagram: &str,
) -> CatalogEntry {
    let [heaven, person, earth, total] = lucks;
    CatalogEntry {
        id,
        name: name.to_string(),
        pinyin: format!("pinyin {}", id),
        elements: CharacterPair {
            first: slot("甲", Element::Wood),
            second: slot("乙", Element::Fire),
        },
        compatibility: Compatibility {
            zodiac: "龙".to_string(),
            favorable_roots: BTreeSet::new(),
            score,
        },
        numerology: Numerology {
            heaven: grid(1, heaven),
            person: grid(2, person),
            earth: grid(3, earth),
            total: grid(total_strokes, total),
            five_elements: "木火土".to_string(),
        },
        hexagram: Hexagram {
            name: hexagram.to_string(),
            meaning: String::new(),
            derivation: String::new(),
        },
        meaning: Meaning {
            symbolism: format!("象征 {}", id),
            interpretation: String::new(),
        },
        risks: Vec::new(),
        notes: None,
        total_strokes,
    }
}

pub fn arb_luck() -> impl Strategy<Value = Luck> {
    prop_oneof![
        Just(Luck::Auspicious),
        Just(Luck::Neutral),
        Just(Luck::Inauspicious),
    ]
}

/// Catalogs of up to `max` entries with unique ids in catalog order.
pub fn arb_catalog(max: usize) -> impl Strategy<Value = Vec<CatalogEntry>> {
    let fields = (
        0usize..NAMES.len(),
        0u8..=100,
        8u32..=32,
        proptest::array::uniform4(arb_luck()),
        0usize..HEXAGRAMS.len(),
    );
    proptest::collection::vec(fields, 0..=max).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, score, strokes, lucks, hexagram))| {
                entry(
                    i as u32 + 1,
                    NAMES[name],
                    score,
                    strokes,
                    lucks,
                    HEXAGRAMS[hexagram],
                )
            })
            .collect()
    })
}

pub fn range_token() -> impl Strategy<Value = String> {
    (0u32..=100, 0u32..=20).prop_map(|(min, span)| format!("{}-{}", min, min + span))
}
