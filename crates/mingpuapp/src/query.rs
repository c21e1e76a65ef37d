//! # Query Engine
//!
//! [`run`] rebuilds the result set from the full catalog: one stable filter pass with a
//! [`Predicate`], then a stable sort by the active [`SortKey`]. There is no incremental
//! update; every filter, search or sort change runs the whole pipeline again.
//!
//! All sorts are stable, so entries that compare equal keep their catalog order.
//! [`SortKey::None`] keeps catalog order outright.

use crate::filter::Predicate;
use crate::model::CatalogEntry;
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The ordered, materialized output of a query.
pub type QueryResult = Vec<CatalogEntry>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    None,
    /// Compatibility score, highest first.
    Score,
    /// Total stroke count, lowest first.
    Strokes,
    /// Display name, ascending.
    Name,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Score => "score",
            SortKey::Strokes => "strokes",
            SortKey::Name => "name",
        }
    }

    /// Comparator for this key. `None` treats everything as equal.
    pub fn compare(&self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::Score => b.compatibility.score.cmp(&a.compatibility.score),
            SortKey::Strokes => a.total_strokes.cmp(&b.total_strokes),
            SortKey::Name => compare_names(&a.name, &b.name),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "default" => Ok(SortKey::None),
            "score" => Ok(SortKey::Score),
            "strokes" => Ok(SortKey::Strokes),
            "name" => Ok(SortKey::Name),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

thread_local! {
    /// `zh` collation: pinyin order for Han, accent-aware Latin ahead of it.
    static NAME_COLLATOR: Option<Collator> =
        Collator::try_new(&locale!("zh").into(), CollatorOptions::new())
            .map_err(|err| tracing::warn!(error = %err, "name collator unavailable, sorting by code point"))
            .ok();
}

/// Collation order of display names. Names the collator ranks equal fall back to
/// exact code points, so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

/// Stable in-place sort by `key`.
pub fn sort(entries: &mut [CatalogEntry], key: SortKey) {
    if key == SortKey::None {
        return;
    }
    entries.sort_by(|a, b| key.compare(a, b));
}

/// Filter `catalog` with `predicate` and order the survivors by `key`.
pub fn run(catalog: &[CatalogEntry], predicate: &Predicate, key: SortKey) -> QueryResult {
    let mut result: QueryResult = catalog
        .iter()
        .filter(|entry| predicate.matches(entry))
        .cloned()
        .collect();
    sort(&mut result, key);

    tracing::debug!(
        catalog = catalog.len(),
        matched = result.len(),
        sort = %key,
        "query recomputed"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{build, FilterCategory, FilterState};
    use crate::test_utils::{sample_entries, EntryBuilder};

    fn ids(result: &[CatalogEntry]) -> Vec<u32> {
        result.iter().map(|e| e.id).collect()
    }

    #[test]
    fn empty_catalog_gives_empty_result() {
        assert!(run(&[], &Predicate::all(), SortKey::Score).is_empty());
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let catalog = vec![
            EntryBuilder::new(1, "a").score(90).build(),
            EntryBuilder::new(2, "b").score(40).build(),
            EntryBuilder::new(3, "c").score(85).build(),
        ];
        let predicate = build(&FilterState::new().with(FilterCategory::Score, "80-100"), "");

        assert_eq!(ids(&run(&catalog, &predicate, SortKey::None)), vec![1, 3]);
    }

    #[test]
    fn score_sort_is_descending_and_stable() {
        let catalog = vec![
            EntryBuilder::new(1, "a").score(80).build(),
            EntryBuilder::new(2, "b").score(95).build(),
            EntryBuilder::new(3, "c").score(80).build(),
            EntryBuilder::new(4, "d").score(95).build(),
        ];

        let sorted = run(&catalog, &Predicate::all(), SortKey::Score);
        assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);

        let mut again = sorted.clone();
        sort(&mut again, SortKey::Score);
        assert_eq!(again, sorted);
    }

    #[test]
    fn strokes_sort_ascending() {
        let catalog = vec![
            EntryBuilder::new(1, "a").strokes(25).build(),
            EntryBuilder::new(2, "b").strokes(12).build(),
            EntryBuilder::new(3, "c").strokes(18).build(),
        ];
        assert_eq!(
            ids(&run(&catalog, &Predicate::all(), SortKey::Strokes)),
            vec![2, 3, 1]
        );
    }

    #[test]
    fn name_sort_ignores_case_at_first_level() {
        let catalog = vec![
            EntryBuilder::new(1, "beta").build(),
            EntryBuilder::new(2, "Alpha").build(),
            EntryBuilder::new(3, "alpha").build(),
        ];
        let sorted = ids(&run(&catalog, &Predicate::all(), SortKey::Name));
        assert_eq!(sorted[2], 1);
    }

    #[test]
    fn accented_latin_sorts_with_its_base_letter() {
        let mut names = vec!["Zoe", "Émile", "Eva"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["Émile", "Eva", "Zoe"]);
        assert_eq!(compare_names("Émile", "Zoe"), Ordering::Less);
    }

    #[test]
    fn han_names_sort_by_pinyin() {
        let catalog = vec![
            EntryBuilder::new(1, "王华").build(),
            EntryBuilder::new(2, "张伟").build(),
            EntryBuilder::new(3, "李明").build(),
        ];
        // li, wang, zhang
        assert_eq!(
            ids(&run(&catalog, &Predicate::all(), SortKey::Name)),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn name_order_is_total() {
        assert_eq!(compare_names("李明", "李明"), Ordering::Equal);
        assert_ne!(compare_names("alpha", "Alpha"), Ordering::Equal);
    }

    #[test]
    fn no_sort_preserves_order() {
        let catalog = sample_entries(12);
        let result = run(&catalog, &Predicate::all(), SortKey::None);
        assert_eq!(result, catalog);
    }

    #[test]
    fn sort_key_from_str() {
        assert_eq!("Score".parse::<SortKey>().unwrap(), SortKey::Score);
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::None);
        assert!("random".parse::<SortKey>().is_err());
    }
}
