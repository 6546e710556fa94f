//! Basic arithmetic combiners: Sum, Min, Max, Count

use crate::combiners::CombineFn;
use std::marker::PhantomData;
use std::mem::take;
use std::ops::Add;

/* ===================== Sum<T> ===================== */

/// Sum of values.
///
/// - Accumulator: `T`
/// - Output: `T`
///
/// Requires `T: Add<Output=T> + Default`; an empty input sums to `T::default()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(pub PhantomData<T>);
impl<T> Sum<T> {
    /// Convenience constructor (same as `Default`).
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, T, T> for Sum<T>
where
    T: Add<Output = T> + Default,
{
    fn create(&self) -> T {
        T::default()
    }

    fn add_input(&self, acc: &mut T, v: T) {
        *acc = take(acc) + v;
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

/* ===================== Min<T> ===================== */

/// Minimum value (requires `Ord`). The first of several equal minima wins.
///
/// - Accumulator: `Option<T>`
/// - Output: `Option<T>`, `None` for an empty input
#[derive(Clone, Copy, Debug, Default)]
pub struct Min<T>(pub PhantomData<T>);
impl<T> Min<T> {
    /// Convenience constructor (same as `Default`).
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Ord> CombineFn<T, Option<T>, Option<T>> for Min<T> {
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) => {
                if v < *cur {
                    *cur = v;
                }
            }
            None => *acc = Some(v),
        }
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}

/* ===================== Max<T> ===================== */

/// Maximum value (requires `Ord`). The first of several equal maxima wins.
///
/// - Accumulator: `Option<T>`
/// - Output: `Option<T>`, `None` for an empty input
#[derive(Clone, Copy, Debug, Default)]
pub struct Max<T>(pub PhantomData<T>);
impl<T> Max<T> {
    /// Convenience constructor (same as `Default`).
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Ord> CombineFn<T, Option<T>, Option<T>> for Max<T> {
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) => {
                if v > *cur {
                    *cur = v;
                }
            }
            None => *acc = Some(v),
        }
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}

/* ===================== Count ===================== */

/// Number of values seen, regardless of their content.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V> CombineFn<V, usize, usize> for Count {
    fn create(&self) -> usize {
        0
    }

    fn add_input(&self, acc: &mut usize, _v: V) {
        *acc += 1;
    }

    fn finish(&self, acc: usize) -> usize {
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<V, A, O>(c: &impl CombineFn<V, A, O>, values: Vec<V>) -> O {
        let mut acc = c.create();
        for v in values {
            c.add_input(&mut acc, v);
        }
        c.finish(acc)
    }

    #[test]
    fn min_max_empty_is_none() {
        assert_eq!(run(&Min::<i32>::new(), vec![]), None);
        assert_eq!(run(&Max::<i32>::new(), vec![]), None);
    }

    #[test]
    fn sum_of_nothing_is_default() {
        assert_eq!(run(&Sum::<i64>::new(), vec![]), 0);
        assert_eq!(run(&Sum::<i64>::new(), vec![2, -5, 10]), 7);
    }
}
