//! Unit tests for relationship-result flattening.

use repligraph::Related;

fn collect(related: Related<i64>) -> Vec<i64> {
    related.into_iter().collect()
}

#[test]
fn test_single_record() {
    let related: Related<i64> = 5.into();
    assert_eq!(collect(related), vec![5]);
}

#[test]
fn test_absent_reference() {
    let related: Related<i64> = Option::<i64>::None.into();
    assert_eq!(collect(related), Vec::<i64>::new());
}

#[test]
fn test_present_reference() {
    let related: Related<i64> = Some(5).into();
    assert_eq!(collect(related), vec![5]);
}

#[test]
fn test_collection_preserves_order() {
    let related: Related<i64> = vec![3, 1, 2].into();
    assert_eq!(collect(related), vec![3, 1, 2]);
}

#[test]
fn test_borrowed_slice() {
    let records = [1i64, 2, 3];
    let related: Related<i64> = records.as_slice().into();
    assert_eq!(collect(related), vec![1, 2, 3]);
}

#[test]
fn test_absent_collection() {
    let related: Related<i64> = Option::<Vec<i64>>::None.into();
    assert_eq!(collect(related), Vec::<i64>::new());
}

#[test]
fn test_collection_of_options_flattens() {
    let related: Related<i64> = vec![Some(1), None, Some(3)].into();
    assert_eq!(collect(related), vec![1, 3]);
}

#[test]
fn test_nested_collections_flatten_one_level() {
    let related: Related<i64> = vec![vec![1, 2], vec![], vec![3]].into();
    assert_eq!(collect(related), vec![1, 2, 3]);
}
