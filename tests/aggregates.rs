use sequery::testing::*;
use sequery::*;

#[test]
fn first_and_last_with_and_without_predicate() {
    let q = from_vec(vec![3, 8, 5, 6, 7]);
    assert_eq!(q.first(), Some(&3));
    assert_eq!(q.last(), Some(&7));
    assert_eq!(q.first_where(|x| x % 2 == 0), Some(&8));
    assert_eq!(q.last_where(|x| x % 2 == 0), Some(&6));
    assert_eq!(q.first_where(|x| *x > 100), None);
    assert_eq!(q.last_where(|x| *x > 100), None);
}

#[test]
fn counting_and_quantifiers() {
    let q = from_vec(sample_products());
    assert_eq!(q.count(), 4);
    assert_eq!(q.count_where(|p| p.category == "Furniture"), 2);
    assert!(q.any());
    assert!(q.any_where(|p| p.price < 50));
    assert!(!q.any_where(|p| p.price > 5000));
    assert!(q.all(|p| p.price > 0));
    assert!(!q.all(|p| p.price > 100));
}

#[test]
fn empty_query_terminal_policies() {
    let q = from_vec(Vec::<u32>::new());
    assert_eq!(q.first(), None);
    assert_eq!(q.last(), None);
    assert_eq!(q.count(), 0);
    assert!(!q.any());
    assert!(q.all(|_| false));
    assert_eq!(q.sum(), 0);
    assert_eq!(q.average(), 0.0);
    assert_eq!(q.max(), None);
    assert_eq!(q.min(), None);
    assert_eq!(q.average_of(|x| *x), 0.0);
}

#[test]
fn numeric_aggregates_over_products() {
    let q = from_vec(sample_products());
    assert_eq!(q.sum_of(|p| p.price), 1475);
    assert!((q.average_of(|p| p.price) - 368.75).abs() < 1e-9);
    assert_eq!(q.max_of(|p| p.price), Some(1000));
    assert_eq!(q.min_of(|p| p.price), Some(25));
    assert_eq!(q.max_of(|p| p.name.clone()), Some("Mouse".to_string()));
}

#[test]
fn identity_aggregates() {
    let q = from_vec(vec![4i32, -2, 9, 1]);
    assert_eq!(q.sum(), 12);
    assert_eq!(q.max(), Some(9));
    assert_eq!(q.min(), Some(-2));
    assert!((q.average() - 3.0).abs() < 1e-9);
}

#[test]
fn float_sums_and_extremes() {
    let q = from_vec(vec![0.5f64, 1.25, -3.0]);
    assert!((q.sum() - (-1.25)).abs() < 1e-12);
    assert_eq!(q.max_of(|x| OrderedFloat(*x)), Some(OrderedFloat(1.25)));
    assert_eq!(q.min_of(|x| OrderedFloat(*x)).map(|f| f.0), Some(-3.0));
}

#[test]
fn custom_combiner_through_aggregate() {
    struct Concat;
    impl CombineFn<String, String, String> for Concat {
        fn create(&self) -> String {
            String::new()
        }
        fn add_input(&self, acc: &mut String, v: String) {
            if !acc.is_empty() {
                acc.push(',');
            }
            acc.push_str(&v);
        }
        fn finish(&self, acc: String) -> String {
            acc
        }
    }

    let q = from_vec(sample_products());
    assert_eq!(q.aggregate(Concat, |p| p.name.clone()), "Laptop,Mouse,Desk,Chair");
    assert_eq!(q.aggregate(Count, |p| p.id), 4);
}

#[test]
fn terminals_do_not_consume_the_query() {
    let q = from_vec(vec![1, 2, 3]);
    let _ = q.count();
    let _ = q.sum();
    let _ = q.first();
    assert_query_eq(&q, &[1, 2, 3]);
}

#[test]
fn wide_integers_average_through_a_cast() {
    let q = from_vec(vec![1i64, 2, 3, 6]);
    assert!((q.average_of(|x| *x as f64) - 3.0).abs() < 1e-9);

    let sizes = from_vec(vec![10usize, 20]);
    assert!((sizes.average_of(|x| *x as f64) - 15.0).abs() < 1e-9);
}

#[test]
fn sum_of_widens_to_avoid_overflow() {
    let q = from_vec(vec![i32::MAX, 1]);
    assert_eq!(q.sum_of(|x| i64::from(*x)), i64::from(i32::MAX) + 1);
}
