//! # Filtering
//!
//! Narrowing the catalog happens in two steps:
//!
//! 1. [`FilterState`] records what the user has selected: a set of value tokens per
//!    [`FilterCategory`], plus an optional hexagram name.
//! 2. [`build`] compiles a `FilterState` and the free-text query into a single
//!    [`Predicate`] that the query engine tests each entry against.
//!
//! ## Matching Rules
//!
//! | Category | Token | An entry matches when |
//! |----------|-------|-----------------------|
//! | `score` | `"min-max"` | its compatibility score is inside **any** selected range |
//! | `strokes` | `"min-max"` | its total stroke count is inside **any** selected range |
//! | `luck` | luck value | **any** of its four grids carries **any** selected luck |
//! | hexagram | name | its hexagram name is exactly equal |
//! | text | query | name, pinyin, symbolism, interpretation or hexagram name contains it |
//!
//! Tokens within a category are OR-ed; active categories are AND-ed. A category that is
//! absent from the state does not constrain anything.
//!
//! Ranges are inclusive on both ends. A range token that is not two integers separated
//! by `-` never matches, so a category holding only malformed tokens excludes every
//! entry rather than failing.

use crate::model::{CatalogEntry, Luck};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// The multi-valued filter categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Score,
    Luck,
    Strokes,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 3] = [
        FilterCategory::Score,
        FilterCategory::Luck,
        FilterCategory::Strokes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCategory::Score => "score",
            FilterCategory::Luck => "luck",
            FilterCategory::Strokes => "strokes",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        FilterCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| format!("Unknown filter category: {}", s))
    }
}

/// The user's active filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    categories: BTreeMap<FilterCategory, BTreeSet<String>>,
    hexagram: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style selection, handy when constructing a state in one expression.
    pub fn with(mut self, category: FilterCategory, token: impl Into<String>) -> Self {
        self.select(category, token);
        self
    }

    /// Flip a token on or off. Returns whether the token is selected afterwards.
    pub fn toggle(&mut self, category: FilterCategory, token: impl Into<String>) -> bool {
        let token = token.into();
        let selected = self
            .categories
            .get(&category)
            .is_some_and(|tokens| tokens.contains(&token));

        if selected {
            self.deselect(category, &token);
            false
        } else {
            self.select(category, token);
            true
        }
    }

    pub fn select(&mut self, category: FilterCategory, token: impl Into<String>) {
        self.categories
            .entry(category)
            .or_default()
            .insert(token.into());
    }

    /// Remove a token; a category left with no tokens stops constraining.
    pub fn deselect(&mut self, category: FilterCategory, token: &str) {
        if let Some(tokens) = self.categories.get_mut(&category) {
            tokens.remove(token);
            if tokens.is_empty() {
                self.categories.remove(&category);
            }
        }
    }

    pub fn selected(&self, category: FilterCategory) -> Option<&BTreeSet<String>> {
        self.categories.get(&category)
    }

    pub fn active_categories(&self) -> impl Iterator<Item = FilterCategory> + '_ {
        self.categories.keys().copied()
    }

    /// Set or clear the hexagram constraint. An empty name clears it.
    pub fn set_hexagram(&mut self, name: Option<String>) {
        self.hexagram = name.filter(|n| !n.is_empty());
    }

    pub fn hexagram(&self) -> Option<&str> {
        self.hexagram.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.hexagram.is_none()
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.hexagram = None;
    }
}

/// An inclusive `min-max` range parsed from a filter token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeToken {
    pub min: i64,
    pub max: i64,
}

impl RangeToken {
    /// Parse `"min-max"`. Returns `None` for anything else.
    pub fn parse(token: &str) -> Option<Self> {
        let (min, max) = token.split_once('-')?;
        let min = min.trim().parse().ok()?;
        let max = max.trim().parse().ok()?;
        Some(Self { min, max })
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone)]
enum Clause {
    /// `None` marks a malformed token, which never matches.
    Score(Vec<Option<RangeToken>>),
    Strokes(Vec<Option<RangeToken>>),
    Luck(Vec<Luck>),
    Hexagram(String),
}

impl Clause {
    fn matches(&self, entry: &CatalogEntry) -> bool {
        match self {
            Clause::Score(ranges) => any_range(ranges, i64::from(entry.compatibility.score)),
            Clause::Strokes(ranges) => any_range(ranges, i64::from(entry.total_strokes)),
            Clause::Luck(wanted) => entry
                .numerology
                .grids()
                .iter()
                .any(|(_, grid)| wanted.contains(&grid.luck)),
            Clause::Hexagram(name) => entry.hexagram.name == *name,
        }
    }
}

fn any_range(ranges: &[Option<RangeToken>], value: i64) -> bool {
    ranges.iter().flatten().any(|range| range.contains(value))
}

/// A compiled boolean test over a catalog entry.
#[derive(Debug, Clone, Default)]
pub struct Predicate {
    /// Lower-cased, trimmed query. `None` when the query was blank.
    text: Option<String>,
    clauses: Vec<Clause>,
}

impl Predicate {
    /// A predicate that accepts every entry.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if let Some(needle) = &self.text {
            if !text_matches(entry, needle) {
                return false;
            }
        }
        self.clauses.iter().all(|clause| clause.matches(entry))
    }

    /// True when the predicate constrains nothing.
    pub fn is_trivial(&self) -> bool {
        self.text.is_none() && self.clauses.is_empty()
    }
}

fn text_matches(entry: &CatalogEntry, needle: &str) -> bool {
    [
        entry.name.as_str(),
        entry.pinyin.as_str(),
        entry.meaning.symbolism.as_str(),
        entry.meaning.interpretation.as_str(),
        entry.hexagram.name.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn parse_ranges(category: FilterCategory, tokens: &BTreeSet<String>) -> Vec<Option<RangeToken>> {
    tokens
        .iter()
        .map(|token| {
            let parsed = RangeToken::parse(token);
            if parsed.is_none() {
                tracing::debug!(%category, token = %token, "malformed range token matches nothing");
            }
            parsed
        })
        .collect()
}

/// Compile filter selections and the free-text query into one predicate.
pub fn build(filters: &FilterState, query: &str) -> Predicate {
    let needle = query.trim().to_lowercase();
    let text = if needle.is_empty() { None } else { Some(needle) };

    let mut clauses: Vec<Clause> = filters
        .categories
        .iter()
        .map(|(category, tokens)| match category {
            FilterCategory::Score => Clause::Score(parse_ranges(*category, tokens)),
            FilterCategory::Strokes => Clause::Strokes(parse_ranges(*category, tokens)),
            FilterCategory::Luck => Clause::Luck(tokens.iter().map(|t| Luck::parse(t)).collect()),
        })
        .collect();

    if let Some(name) = &filters.hexagram {
        clauses.push(Clause::Hexagram(name.clone()));
    }

    Predicate { text, clauses }
}
