//! Element mapping over borrowed slices.

/// Returns a new `Vec` by applying `mapper` to every element of `values`.
///
/// The output always has exactly `values.len()` elements, in input order. `mapper` is called once
/// per element, in ascending index order. If `mapper` panics the panic propagates and no result is
/// produced.
pub fn map<T, U, F>(values: &[T], mut mapper: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        out.push(mapper(value));
    }
    out
}

/// Like [`map`], but `mapper` also receives the element's zero-based position in `values`.
pub fn map_indexed<T, U, F>(values: &[T], mut mapper: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    let mut out = Vec::with_capacity(values.len());
    for (idx, value) in values.iter().enumerate() {
        out.push(mapper(value, idx));
    }
    out
}

/// Fallible [`map`].
///
/// Stops at the first `Err` returned by `mapper` and returns it unchanged; elements after the
/// failing one are never visited and the partially built output is dropped.
pub fn try_map<T, U, E, F>(values: &[T], mut mapper: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        out.push(mapper(value)?);
    }
    Ok(out)
}

/// Fallible [`map_indexed`].
pub fn try_map_indexed<T, U, E, F>(values: &[T], mut mapper: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T, usize) -> Result<U, E>,
{
    let mut out = Vec::with_capacity(values.len());
    for (idx, value) in values.iter().enumerate() {
        out.push(mapper(value, idx)?);
    }
    Ok(out)
}
