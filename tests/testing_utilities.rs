//! Integration tests demonstrating the testing utilities.

use sequery::testing::*;
use sequery::*;

#[test]
fn test_ordered_and_unordered_comparison() {
    let q = from_vec(vec![3, 1, 2, 1]).map(|x| x * 10);
    assert_query_eq(&q, &[30, 10, 20, 10]);
    assert_query_unordered_eq(&q, &[10, 10, 20, 30]);
}

#[test]
#[should_panic(expected = "Query content mismatch")]
fn test_unordered_comparison_counts_duplicates() {
    let q = from_vec(vec![1, 1, 2]);
    assert_query_unordered_eq(&q, &[1, 2, 2]);
}

#[test]
#[should_panic(expected = "Query mismatch at index 1")]
fn test_ordered_comparison_reports_index() {
    assert_query_eq(&from_vec(vec![1, 2, 3]), &[1, 3, 2]);
}

#[test]
fn test_group_assertions() {
    let groups = from_vec(vec!["a", "b", "a"]).group_by(|s| s.to_string());
    assert_groups_eq(
        &groups,
        &[("a".to_string(), vec!["a", "a"]), ("b".to_string(), vec!["b"])],
    );
}

#[test]
fn test_predicate_assertions() {
    let q = from_vec(vec![2, 4, 6, 8]).map(|x| x * 2);
    assert_all(q.as_slice(), |x| *x % 2 == 0);
    assert_none(q.as_slice(), |x| *x < 0);
    assert_query_len(&q, 4);
}

#[test]
fn test_debug_taps_pass_data_through() {
    let q = from_iter(0..25)
        .debug_inspect("source")
        .debug_sample("first three", 3)
        .filter(|x| x % 5 == 0)
        .debug_count("after filter");
    assert_query_eq(&q, &[0, 5, 10, 15, 20]);
}

#[test]
fn test_with_fixtures() {
    let products = sample_products();
    let categories = sample_categories();
    assert_eq!(products.len(), 4);
    assert!(categories.iter().any(|c| c.name == "Garden"));
    assert!(
        products
            .iter()
            .all(|p| categories.iter().any(|c| c.name == p.category))
    );
}
