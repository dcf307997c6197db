//! Folding a slice into a single accumulated value.

/// Reduce (fold) all elements into an accumulator.
///
/// The accumulator starts as `P::default()` and is replaced by `reducer(acc, element)` once per
/// element, in ascending index order. There is no explicit seed: an empty slice yields
/// `P::default()` (e.g. `0` for numbers, `""` for `String`).
///
/// This is similar to `Iterator::fold` with `Default::default()` as the initial value.
pub fn reduce<T, P, F>(values: &[T], mut reducer: F) -> P
where
    P: Default,
    F: FnMut(P, &T) -> P,
{
    let mut acc = P::default();
    for value in values {
        acc = reducer(acc, value);
    }
    acc
}

/// Fallible [`reduce`].
///
/// The first `Err` returned by `reducer` is returned unchanged and the accumulator built so far
/// is discarded.
pub fn try_reduce<T, P, E, F>(values: &[T], mut reducer: F) -> Result<P, E>
where
    P: Default,
    F: FnMut(P, &T) -> Result<P, E>,
{
    let mut acc = P::default();
    for value in values {
        acc = reducer(acc, value)?;
    }
    Ok(acc)
}
