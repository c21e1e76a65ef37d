//! # Catalog Data Model
//!
//! A [`CatalogEntry`] is one generated name with everything the catalog knows about it.
//! Entries arrive pre-annotated: nothing in this crate derives strokes, elements or
//! numerology from the characters themselves.
//!
//! ## Wire Format
//!
//! Entries serialize with English snake_case field names. The source data files use a
//! different vocabulary, so deserialization also accepts those names as aliases:
//!
//! | Canonical | Also accepted |
//! |-----------|---------------|
//! | `elements.first` / `elements.second` | `character1` / `character2` |
//! | `character` | `char` |
//! | `numerology.heaven/person/earth/total` | `tian_ge` / `ren_ge` / `di_ge` / `zong_ge` |
//! | `numerology.five_elements` | `san_cai` |
//! | `hexagram.derivation` | `calculation` |
//!
//! ## Categorical Tokens
//!
//! [`Element`] accepts `metal|wood|water|fire|earth` or the glyphs `金|木|水|火|土`.
//! An unknown element is a parse error.
//!
//! [`Luck`] accepts `auspicious|neutral|inauspicious` or `吉|半吉|凶` (and `大吉`).
//! Unknown luck tokens are *kept* as [`Luck::Unrecognized`] rather than failing the
//! parse, so that catalog validation and the aggregator can report them as integrity
//! errors naming the offending entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One of the five traditional elemental classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    #[serde(alias = "金")]
    Metal,
    #[serde(alias = "木")]
    Wood,
    #[serde(alias = "水")]
    Water,
    #[serde(alias = "火")]
    Fire,
    #[serde(alias = "土")]
    Earth,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Metal,
        Element::Wood,
        Element::Water,
        Element::Fire,
        Element::Earth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Metal => "metal",
            Element::Wood => "wood",
            Element::Water => "water",
            Element::Fire => "fire",
            Element::Earth => "earth",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Element::Metal => "金",
            Element::Wood => "木",
            Element::Water => "水",
            Element::Fire => "火",
            Element::Earth => "土",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Element::ALL
            .into_iter()
            .find(|e| e.as_str() == token || e.glyph() == token)
            .ok_or_else(|| format!("Unknown element: {}", s))
    }
}

/// Luck rating attached to a numerology grid.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Luck {
    Auspicious,
    Neutral,
    Inauspicious,
    /// A token outside the three recognized values, kept verbatim for reporting.
    Unrecognized(String),
}

impl Luck {
    pub const RECOGNIZED: [Luck; 3] = [Luck::Auspicious, Luck::Neutral, Luck::Inauspicious];

    pub fn parse(token: &str) -> Self {
        let trimmed = token.trim();
        match trimmed.to_lowercase().as_str() {
            "auspicious" | "吉" | "大吉" => Luck::Auspicious,
            "neutral" | "半吉" => Luck::Neutral,
            "inauspicious" | "凶" => Luck::Inauspicious,
            _ => Luck::Unrecognized(trimmed.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Luck::Unrecognized(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Luck::Auspicious => "auspicious",
            Luck::Neutral => "neutral",
            Luck::Inauspicious => "inauspicious",
            Luck::Unrecognized(raw) => raw,
        }
    }

    pub fn glyph(&self) -> &str {
        match self {
            Luck::Auspicious => "吉",
            Luck::Neutral => "半吉",
            Luck::Inauspicious => "凶",
            Luck::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Luck {
    fn from(s: String) -> Self {
        Luck::parse(&s)
    }
}

impl From<&str> for Luck {
    fn from(s: &str) -> Self {
        Luck::parse(s)
    }
}

impl From<Luck> for String {
    fn from(luck: Luck) -> Self {
        luck.as_str().to_string()
    }
}

impl fmt::Display for Luck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSlot {
    #[serde(alias = "char")]
    pub character: String,
    pub strokes: u32,
    pub element: Element,
    #[serde(default)]
    pub radical: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPair {
    #[serde(alias = "character1")]
    pub first: CharacterSlot,
    #[serde(alias = "character2")]
    pub second: CharacterSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    pub zodiac: String,
    #[serde(default)]
    pub favorable_roots: BTreeSet<String>,
    /// 0 to 100, checked when the catalog is built.
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub value: u32,
    pub element: Element,
    pub luck: Luck,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numerology {
    #[serde(alias = "tian_ge")]
    pub heaven: Grid,
    #[serde(alias = "ren_ge")]
    pub person: Grid,
    #[serde(alias = "di_ge")]
    pub earth: Grid,
    #[serde(alias = "zong_ge")]
    pub total: Grid,
    #[serde(alias = "san_cai", default)]
    pub five_elements: String,
}

impl Numerology {
    /// The four grids with their canonical names, in heaven/person/earth/total order.
    pub fn grids(&self) -> [(&'static str, &Grid); 4] {
        [
            ("heaven", &self.heaven),
            ("person", &self.person),
            ("earth", &self.earth),
            ("total", &self.total),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    pub name: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(alias = "calculation", default)]
    pub derivation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(default)]
    pub symbolism: String,
    #[serde(default)]
    pub interpretation: String,
}

/// One annotated candidate name. Immutable once loaded into a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pinyin: String,
    pub elements: CharacterPair,
    pub compatibility: Compatibility,
    pub numerology: Numerology,
    pub hexagram: Hexagram,
    pub meaning: Meaning,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub total_strokes: u32,
}

impl CatalogEntry {
    /// True when at least one risk note is attached.
    pub fn has_risk(&self) -> bool {
        !self.risks.is_empty()
    }

    /// How many of the four grids are rated auspicious.
    pub fn auspicious_grids(&self) -> usize {
        self.numerology
            .grids()
            .iter()
            .filter(|(_, grid)| grid.luck == Luck::Auspicious)
            .count()
    }
}

/// The top-level JSON document: `{ "names": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub names: Vec<CatalogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE_ENTRY: &str = r#"{
        "id": 7,
        "name": "李垣岩",
        "pinyin": "li yuan yan",
        "elements": {
            "character1": { "char": "垣", "strokes": 9, "element": "土", "radical": "土部" },
            "character2": { "char": "岩", "strokes": 8, "element": "土", "radical": "山部" }
        },
        "compatibility": { "zodiac": "蛇", "favorable_roots": ["山", "土"], "score": 95 },
        "numerology": {
            "tian_ge": { "value": 8, "element": "金", "luck": "吉" },
            "ren_ge": { "value": 16, "element": "土", "luck": "半吉" },
            "di_ge": { "value": 17, "element": "金", "luck": "凶" },
            "zong_ge": { "value": 24, "element": "火", "luck": "吉" },
            "san_cai": "金土金"
        },
        "hexagram": { "name": "山地剥卦", "meaning": "厚积薄发", "calculation": "总笔画17÷8余1→乾卦" },
        "meaning": { "symbolism": "垣表坚固，岩喻稳重", "interpretation": "象征意志坚定、根基深厚" },
        "risks": [],
        "notes": "岩书写需注意结构规范",
        "total_strokes": 17
    }"#;

    #[test]
    fn parses_source_vocabulary() {
        let entry: CatalogEntry = serde_json::from_str(SOURCE_ENTRY).unwrap();

        assert_eq!(entry.id, 7);
        assert_eq!(entry.elements.first.character, "垣");
        assert_eq!(entry.elements.second.element, Element::Earth);
        assert_eq!(entry.numerology.heaven.element, Element::Metal);
        assert_eq!(entry.numerology.person.luck, Luck::Neutral);
        assert_eq!(entry.numerology.earth.luck, Luck::Inauspicious);
        assert_eq!(entry.numerology.total.luck, Luck::Auspicious);
        assert_eq!(entry.numerology.five_elements, "金土金");
        assert_eq!(entry.hexagram.derivation, "总笔画17÷8余1→乾卦");
        assert!(entry.compatibility.favorable_roots.contains("山"));
        assert!(!entry.has_risk());
        assert_eq!(entry.auspicious_grids(), 2);
    }

    #[test]
    fn serializes_canonical_names() {
        let entry: CatalogEntry = serde_json::from_str(SOURCE_ENTRY).unwrap();
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["elements"]["first"]["character"], "垣");
        assert_eq!(json["numerology"]["total"]["luck"], "auspicious");
        assert_eq!(json["numerology"]["heaven"]["element"], "metal");
        assert!(json["numerology"].get("zong_ge").is_none());

        let reparsed: CatalogEntry = serde_json::from_value(json).unwrap();
        assert_eq!(reparsed, entry);
    }

    #[test]
    fn unknown_element_fails_to_parse() {
        let broken = SOURCE_ENTRY.replace(r#""element": "土", "radical": "土部""#, r#""element": "光", "radical": "土部""#);
        assert!(serde_json::from_str::<CatalogEntry>(&broken).is_err());
    }

    #[test]
    fn unknown_luck_is_kept_verbatim() {
        let loose = SOURCE_ENTRY.replace(r#""luck": "半吉""#, r#""luck": "小吉""#);
        let entry: CatalogEntry = serde_json::from_str(&loose).unwrap();
        assert_eq!(entry.numerology.person.luck, Luck::Unrecognized("小吉".into()));
        assert!(!entry.numerology.person.luck.is_recognized());
    }

    #[test]
    fn luck_parse_accepts_both_vocabularies() {
        assert_eq!(Luck::parse("Auspicious"), Luck::Auspicious);
        assert_eq!(Luck::parse("大吉"), Luck::Auspicious);
        assert_eq!(Luck::parse(" 半吉 "), Luck::Neutral);
        assert_eq!(Luck::parse("凶"), Luck::Inauspicious);
        assert_eq!(Luck::parse("meh"), Luck::Unrecognized("meh".into()));
    }

    #[test]
    fn element_from_str() {
        assert_eq!("Wood".parse::<Element>().unwrap(), Element::Wood);
        assert_eq!("水".parse::<Element>().unwrap(), Element::Water);
        assert!("plasma".parse::<Element>().is_err());
    }
}
