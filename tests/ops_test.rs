use tabq::filter::row_matches_pattern;
use tabq::select::{column_mapping, ColumnSelection, HiddenColumns};
use tabq::sort::{resolve_sort_column, sort_rows};
use tabq::{FilterPipeline, Row, WhereFilter};

fn ages(rows: &[Row]) -> Vec<&str> {
    rows.iter().map(|r| r.get(0).unwrap()).collect()
}

#[test]
fn test_sort_numeric_ascending() {
    let mut rows = vec![
        Row::from(vec!["30"]),
        Row::from(vec!["9"]),
        Row::from(vec!["100"]),
    ];
    sort_rows(&mut rows, 0, false);
    assert_eq!(ages(&rows), vec!["9", "30", "100"]);
}

#[test]
fn test_sort_descending() {
    let mut rows = vec![
        Row::from(vec!["30"]),
        Row::from(vec!["9"]),
        Row::from(vec!["100"]),
    ];
    sort_rows(&mut rows, 0, true);
    assert_eq!(ages(&rows), vec!["100", "30", "9"]);
}

#[test]
fn test_sort_falls_back_to_string_comparison() {
    let mut rows = vec![
        Row::from(vec!["banana"]),
        Row::from(vec!["Apple"]),
        Row::from(vec!["cherry"]),
    ];
    sort_rows(&mut rows, 0, false);
    assert_eq!(ages(&rows), vec!["Apple", "banana", "cherry"]);
}

#[test]
fn test_sort_missing_cells_compare_as_empty() {
    let mut rows = vec![
        Row::from(vec!["x", "b"]),
        Row::from(vec!["y"]),
        Row::from(vec!["z", "a"]),
    ];
    sort_rows(&mut rows, 1, false);
    // The short row's missing cell sorts first as ""
    assert_eq!(rows[0].get(0), Some("y"));
}

#[test]
fn test_resolve_sort_column() {
    let header = Row::from(vec!["id", "Age"]);
    assert_eq!(resolve_sort_column("1", Some(&header)), Some(1));
    assert_eq!(resolve_sort_column("age", Some(&header)), Some(1));
    assert_eq!(resolve_sort_column("missing", Some(&header)), None);
    assert_eq!(resolve_sort_column("age", None), None);
    assert_eq!(resolve_sort_column("2", None), Some(2));
}

#[test]
fn test_pattern_filter() {
    let row = Row::from(vec!["1", "Alice", "active"]);
    assert!(row_matches_pattern(&row, "ALICE"));
    assert!(row_matches_pattern(&row, "act"));
    assert!(!row_matches_pattern(&row, "bob"));
    assert!(row_matches_pattern(&row, ""));
}

#[test]
fn test_pipeline_requires_both_filters_to_pass() {
    let header = Row::from(vec!["name", "age"]);
    let mut filter = WhereFilter::parse("age > 25").unwrap();
    filter.resolve(&header);

    let mut pipeline = FilterPipeline::new()
        .with_pattern("ali")
        .with_where(filter);
    pipeline.resolve(&header);

    // Passes both
    assert!(pipeline.matches(&Row::from(vec!["Alice", "30"])));
    // Fails the pattern
    assert!(!pipeline.matches(&Row::from(vec!["Bob", "30"])));
    // Fails the where clause
    assert!(!pipeline.matches(&Row::from(vec!["Alina", "20"])));
}

#[test]
fn test_empty_pipeline_passes_everything() {
    let pipeline = FilterPipeline::new();
    assert!(!pipeline.is_active());
    assert!(pipeline.matches(&Row::from(vec!["anything"])));
}

#[test]
fn test_pipeline_is_active() {
    assert!(FilterPipeline::new().with_pattern("x").is_active());

    let filter = WhereFilter::parse("a = 1").unwrap();
    assert!(FilterPipeline::new().with_where(filter).is_active());

    assert!(!FilterPipeline::new().with_pattern("").is_active());
}

#[test]
fn test_selection_by_name_and_index() {
    let header = Row::from(vec!["id", "name", "age"]);
    let selection = ColumnSelection::parse("age,0", Some(&header)).unwrap();
    assert_eq!(selection.indices(), &[2, 0]);
}

#[test]
fn test_selection_skips_unknown_names() {
    let header = Row::from(vec!["id", "name"]);
    let selection = ColumnSelection::parse("name,ghost,id", Some(&header)).unwrap();
    assert_eq!(selection.indices(), &[1, 0]);
}

#[test]
fn test_selection_with_nothing_resolvable() {
    let header = Row::from(vec!["id"]);
    assert!(ColumnSelection::parse("ghost", Some(&header)).is_none());
    assert!(ColumnSelection::parse("ghost", None).is_none());
}

#[test]
fn test_column_mapping_hides_and_selects() {
    let hidden = HiddenColumns::parse("1");
    assert_eq!(column_mapping(4, None, &hidden), vec![0, 2, 3]);

    let header = Row::from(vec!["a", "b", "c", "d"]);
    let selection = ColumnSelection::parse("b,d", Some(&header));
    // Selection wins over hiding
    assert_eq!(column_mapping(4, selection.as_ref(), &hidden), vec![1, 3]);
}
