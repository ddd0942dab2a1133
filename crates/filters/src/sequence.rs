//! Filters over template sequences.

/// Keeps the first `n` items, or the last `|n|` items when `n` is negative.
///
/// Out-of-range counts are clamped to the length of `items`.
///
/// ```rust
/// use pineapple_filters::slice;
///
/// let episodes = [1, 2, 3, 4, 5];
/// assert_eq!(slice(&episodes, 2), &[1, 2]);
/// assert_eq!(slice(&episodes, -2), &[4, 5]);
/// ```
pub fn slice<T>(items: &[T], n: isize) -> &[T] {
    let count = n.unsigned_abs().min(items.len());
    match n < 0 {
        true => &items[items.len() - count..],
        false => &items[..count],
    }
}

/// The smallest of `values`, or `None` if there are none.
///
/// Incomparable values (such as `NaN`) are skipped.
pub fn min<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .filter(|value| value.partial_cmp(value).is_some())
        .reduce(|smallest, value| if value < smallest { value } else { smallest })
}
