use anyhow::{anyhow, bail, Result};
use sequery::testing::*;
use sequery::*;

fn parse(s: &&str) -> Result<i32> {
    s.parse::<i32>().map_err(|e| anyhow!("bad number {s:?}: {e}"))
}

#[test]
fn try_map_all_ok() -> Result<()> {
    let q = from_vec(vec!["1", "22", "-3"]).try_map(parse)?;
    assert_query_eq(&q, &[1, 22, -3]);
    Ok(())
}

#[test]
fn try_map_fails_fast_with_index_context() {
    let mut calls = 0;
    let err = from_vec(vec!["1", "oops", "3", "nope"])
        .try_map(|s| {
            calls += 1;
            parse(s)
        })
        .unwrap_err();

    assert_eq!(calls, 2);
    assert_eq!(err.to_string(), "try_map failed at index 1");
    assert!(format!("{err:#}").contains("bad number \"oops\""));
}

#[test]
fn try_filter_keeps_matching_elements() -> Result<()> {
    let q = from_vec(vec![5, 12, 7, 30]).try_filter(|x| Ok(*x > 6))?;
    assert_query_eq(&q, &[12, 7, 30]);
    Ok(())
}

#[test]
fn try_filter_propagates_error() {
    let err = from_vec(vec![1, 2, 0, 4])
        .try_filter(|x| {
            if *x == 0 {
                bail!("zero is not allowed");
            }
            Ok(true)
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "try_filter failed at index 2");
    assert_eq!(err.root_cause().to_string(), "zero is not allowed");
}
