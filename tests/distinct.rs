use sequery::testing::*;
use sequery::*;

#[test]
fn distinct_keeps_first_occurrence_in_order() {
    let out = from_vec(vec![4, 1, 4, 2, 1, 3, 2]).distinct();
    assert_query_eq(&out, &[4, 1, 2, 3]);
}

#[test]
fn distinct_by_keeps_earliest_element_per_key() {
    let out = from_vec(sample_products())
        .distinct_by(|p| p.category.clone())
        .map(|p| p.name.clone());
    assert_query_eq(&out, &["Laptop".to_string(), "Desk".to_string()]);
}

#[test]
fn distinct_by_projection_to_primitive() {
    let out = from_vec(vec![(1, "x"), (2, "y"), (1, "z")]).distinct_by(|t| t.0);
    assert_query_eq(&out, &[(1, "x"), (2, "y")]);
}

#[test]
fn distinct_on_strings() {
    let out = from_vec(
        ["b", "a", "b", "c", "a"]
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>(),
    )
    .distinct();
    assert_query_eq(&out, &["b".to_string(), "a".to_string(), "c".to_string()]);
}
