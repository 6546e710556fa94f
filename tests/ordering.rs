use sequery::testing::*;
use sequery::*;

fn tagged() -> Vec<(u32, char)> {
    vec![(2, 'a'), (1, 'b'), (2, 'c'), (0, 'd'), (1, 'e'), (2, 'f')]
}

#[test]
fn ascending_is_stable() {
    let out = from_vec(tagged()).order_by(|t| t.0).map(|t| t.1);
    assert_query_eq(&out, &['d', 'b', 'e', 'a', 'c', 'f']);
}

#[test]
fn descending_reverses_keys_not_ties() {
    let out = from_vec(tagged()).order_by_descending(|t| t.0).map(|t| t.1);
    assert_query_eq(&out, &['a', 'c', 'f', 'b', 'e', 'd']);
}

#[test]
fn order_by_with_matches_dedicated_methods() {
    let asc = from_vec(tagged()).order_by_with(|t| t.0, SortOrder::Ascending);
    let desc = from_vec(tagged()).order_by_with(|t| t.0, SortOrder::Descending);
    assert_eq!(asc, from_vec(tagged()).order_by(|t| t.0));
    assert_eq!(desc, from_vec(tagged()).order_by_descending(|t| t.0));
    assert_eq!(SortOrder::default(), SortOrder::Ascending);
}

#[test]
fn float_keys_via_ordered_float() {
    let out = from_vec(vec![2.5f64, -0.5, 10.0, 2.5])
        .order_by_descending(|x| OrderedFloat(*x));
    assert_query_eq(&out, &[10.0, 2.5, 2.5, -0.5]);
}

#[test]
fn string_keys_sort_lexicographically() {
    let out = from_vec(sample_products())
        .order_by(|p| p.name.clone())
        .map(|p| p.name.clone());
    assert_query_eq(
        &out,
        &[
            "Chair".to_string(),
            "Desk".to_string(),
            "Laptop".to_string(),
            "Mouse".to_string(),
        ],
    );
}

#[test]
fn key_selector_runs_once_per_element() {
    let mut calls = 0;
    let _ = from_iter(0..50).order_by(|x| {
        calls += 1;
        -x
    });
    assert_eq!(calls, 50);
}

#[test]
fn float_keys_via_not_nan() {
    let out = from_vec(vec![3.5f64, -1.0, 0.25])
        .order_by(|x| NotNan::new(*x).expect("test data has no NaN"));
    assert_query_eq(&out, &[-1.0, 0.25, 3.5]);
    assert!(NotNan::new(f64::NAN).is_err());
}
