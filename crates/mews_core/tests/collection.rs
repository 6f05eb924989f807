use mews_core::{Cat, CatCollection, InvalidIndexError};

fn cats(count: usize) -> Vec<Cat> {
    (0..count)
        .map(|i| {
            let mut cat = Cat::new(format!("{}", 100 + i));
            cat.name = format!("Cat {i}");
            cat
        })
        .collect()
}

fn populated(count: usize) -> CatCollection {
    let mut collection = CatCollection::new();
    assert!(collection.populate(cats(count)));
    collection
}

#[test]
fn empty_until_populated() {
    mews_logging::initialize_for_tests();
    let collection = CatCollection::new();
    assert!(collection.cats().is_empty());
    assert!(!collection.is_populated());
    assert_eq!(collection.active_index(), None);
}

#[test]
fn populate_happens_once() {
    mews_logging::initialize_for_tests();
    let mut collection = populated(3);
    assert!(!collection.populate(cats(7)));
    assert_eq!(collection.len(), 3);
}

#[test]
fn empty_load_still_counts_as_populated() {
    let mut collection = CatCollection::new();
    assert!(collection.populate(Vec::new()));
    assert!(collection.is_populated());
    assert!(collection.is_empty());
}

#[test]
fn select_by_id_sets_active_index() {
    let mut collection = populated(5);
    let name = collection.select_by_id("103").map(|cat| cat.name.clone());
    assert_eq!(name.as_deref(), Some("Cat 3"));
    assert_eq!(collection.active_index(), Some(3));
    assert_eq!(collection.active_cat().map(Cat::id), Some("103"));
}

#[test]
fn select_by_unknown_id_is_none_and_keeps_cursor() {
    let mut collection = populated(5);
    collection.set_active_index(1).unwrap();
    assert!(collection.select_by_id("999").is_none());
    assert_eq!(collection.active_index(), Some(1));
}

#[test]
fn find_returns_first_match() {
    let mut dupes = cats(2);
    dupes.push(Cat::new("100"));
    let mut collection = CatCollection::new();
    collection.populate(dupes);
    assert_eq!(collection.find("100").map(|(index, _)| index), Some(0));
}

#[test]
fn out_of_range_index_is_an_error_and_unsets() {
    let mut collection = populated(5);
    collection.set_active_index(2).unwrap();

    let err = collection.set_active_index(5).unwrap_err();
    assert_eq!(err, InvalidIndexError { index: 5, len: 5 });
    assert_eq!(collection.active_index(), None);

    let err = collection.set_active_index(42).unwrap_err();
    assert_eq!(err.index, 42);
    assert_eq!(collection.active_index(), None);
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn in_range_index_is_accepted() {
    let mut collection = populated(5);
    assert_eq!(collection.set_active_index(4), Ok(()));
    assert_eq!(collection.active_index(), Some(4));
}

#[test]
fn cycling_wraps_both_ends() {
    let mut collection = populated(5);
    assert_eq!(collection.cycle_to(-1).map(Cat::id), Some("104"));
    assert_eq!(collection.active_index(), Some(4));

    assert_eq!(collection.cycle_to(5).map(Cat::id), Some("100"));
    assert_eq!(collection.active_index(), Some(0));

    assert_eq!(collection.cycle_to(2).map(Cat::id), Some("102"));
    assert_eq!(collection.active_index(), Some(2));
}

#[test]
fn cycling_an_empty_collection_selects_nothing() {
    let mut collection = populated(0);
    assert!(collection.cycle_to(0).is_none());
    assert!(collection.cycle_to(-1).is_none());
    assert_eq!(collection.active_index(), None);
}
