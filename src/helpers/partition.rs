//! Split a query in two by a predicate.

use crate::SequenceQuery;

impl<T: Clone> SequenceQuery<T> {
    /// Return `(matching, rest)` as two new queries, each in original order.
    /// The query itself is left untouched.
    ///
    /// ```
    /// use sequery::*;
    ///
    /// let q = from_vec(vec![1, 2, 3, 4, 5]);
    /// let (even, odd) = q.partition(|x| x % 2 == 0);
    /// assert_eq!(even.into_vec(), vec![2, 4]);
    /// assert_eq!(odd.into_vec(), vec![1, 3, 5]);
    /// assert_eq!(q.count(), 5);
    /// ```
    pub fn partition<P>(&self, mut pred: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let (yes, no): (Vec<T>, Vec<T>) = self.data.iter().cloned().partition(|t| pred(t));
        (Self::new(yes), Self::new(no))
    }
}

impl<T> SequenceQuery<T> {
    /// Consuming form of [`partition`](SequenceQuery::partition); moves the
    /// elements instead of cloning them.
    #[must_use]
    pub fn into_partition<P>(self, mut pred: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let (yes, no): (Vec<T>, Vec<T>) = self.data.into_iter().partition(|t| pred(t));
        (Self::new(yes), Self::new(no))
    }
}
