mod common;

use common::entry;
use mingpuapp::api::MingpuApi;
use mingpuapp::catalog::{self, Catalog};
use mingpuapp::filter::FilterCategory;
use mingpuapp::handoff::{HandoffKey, HandoffStore, InMemoryHandoff};
use mingpuapp::model::{CatalogEntry, Luck};
use mingpuapp::query::SortKey;
use mingpuapp::store::memory::MemorySource;
use std::time::{Duration, Instant};

const QUIET: Duration = Duration::from_millis(300);

/// Twenty entries, strokes 30 down to 11; entries 4, 9 and 14 have an inauspicious total grid.
fn twenty() -> Vec<CatalogEntry> {
    (1..=20)
        .map(|id| {
            let mut lucks = [Luck::Auspicious, Luck::Neutral, Luck::Auspicious, Luck::Auspicious];
            if matches!(id, 4 | 9 | 14) {
                lucks[3] = Luck::Inauspicious;
            }
            entry(id, &format!("名{}", id), 50 + id as u8, 31 - id, lucks, "乾为天")
        })
        .collect()
}

fn api(entries: Vec<CatalogEntry>) -> MingpuApi<InMemoryHandoff> {
    let outcome = catalog::load(&MemorySource::new(entries)).unwrap();
    MingpuApi::new(outcome.catalog, 9, QUIET, InMemoryHandoff::new())
}

#[test]
fn strokes_sort_first_page() {
    let mut api = api(twenty());
    let result = api.set_sort(SortKey::Strokes).unwrap();
    let view = result.view.unwrap();

    assert_eq!(view.entries.len(), 9);
    assert_eq!(view.total_count, 20);
    assert!(view.has_more);
    let strokes: Vec<u32> = view.entries.iter().map(|e| e.total_strokes).collect();
    assert_eq!(strokes, (11..=19).collect::<Vec<_>>());
}

#[test]
fn inauspicious_filter_finds_three() {
    let mut api = api(twenty());
    let view = api
        .toggle_filter(FilterCategory::Luck, "inauspicious")
        .unwrap()
        .view
        .unwrap();

    assert_eq!(view.total_count, 3);
    let ids: Vec<u32> = view.entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4, 9, 14]);
}

#[test]
fn show_more_until_exhausted() {
    let mut api = api(twenty());
    assert_eq!(api.show_more().unwrap().view.unwrap().entries.len(), 18);
    assert_eq!(api.show_more().unwrap().view.unwrap().entries.len(), 20);

    let last = api.show_more().unwrap();
    assert!(!last.view.unwrap().has_more);
    assert_eq!(last.messages.len(), 1);
}

#[test]
fn search_burst_then_sort_then_clear() {
    let mut api = api(twenty());
    let start = Instant::now();

    api.search("名", start).unwrap();
    api.search("名1", start + Duration::from_millis(50)).unwrap();
    let applied = api.tick(start + Duration::from_millis(350)).unwrap().unwrap();
    // 名1 and 名10..名19
    assert_eq!(applied.view.unwrap().total_count, 11);

    api.show_more().unwrap();
    let sorted = api.set_sort(SortKey::Name).unwrap().view.unwrap();
    assert_eq!(sorted.page_count, 1);
    assert_eq!(sorted.entries[0].name, "名1");

    let cleared = api.clear_filters().unwrap().view.unwrap();
    assert_eq!(cleared.total_count, 20);
    assert_eq!(api.state().sort(), SortKey::Name);
}

#[test]
fn selection_flow_hands_off_ids() {
    let mut api = api(twenty());
    for id in [3, 7, 11, 15] {
        assert!(!api.select(id).unwrap().has_warnings());
    }
    assert!(api.select(19).unwrap().has_warnings());
    assert!(api.select(3).unwrap().has_warnings());

    let result = api.start_comparison().unwrap();
    assert_eq!(result.handoff, Some(HandoffKey::CompareList));
    assert_eq!(
        api.handoff().get(HandoffKey::CompareList).unwrap().as_deref(),
        Some("[3,7,11,15]")
    );
}

#[test]
fn stats_over_full_catalog_while_filtered() {
    let mut api = api(twenty());
    api.toggle_filter(FilterCategory::Score, "60-62").unwrap();

    let stats = api.statistics().unwrap().stats.unwrap();
    assert_eq!(stats.entries, 20);
    assert_eq!(stats.luck.total(), 20);
    assert_eq!(stats.luck.inauspicious, 3);
    assert_eq!(stats.luck.auspicious, 17);
    assert_eq!(stats.strokes.iter().map(|b| b.count).sum::<usize>(), 20);
}

#[test]
fn failed_source_browses_fallback() {
    let outcome = catalog::load(&MemorySource::failing("unreachable")).unwrap();
    assert!(outcome.fallback_used);

    let mut api = MingpuApi::new(outcome.catalog, 9, QUIET, InMemoryHandoff::new());
    let view = api.view();
    assert_eq!(view.total_count, 1);
    assert_eq!(view.entries[0], catalog::fallback_entry());

    let detail = api.show_detail(1).unwrap();
    assert_eq!(detail.entries[0].name, "李垣岩");
}

#[test]
fn strokes_range_filter_is_inclusive() {
    let catalog = Catalog::new(twenty()).unwrap();
    let mut api = MingpuApi::new(catalog, 9, QUIET, InMemoryHandoff::new());
    api.toggle_filter(FilterCategory::Strokes, "11-15").unwrap();
    assert_eq!(api.view().total_count, 5);
}
