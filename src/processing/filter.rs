//! Element filtering over borrowed slices.

/// Returns a new `Vec` containing clones of the elements for which `predicate` returns `true`.
///
/// Retained elements keep their original relative order. `predicate` is evaluated exactly once per
/// element, in ascending index order.
pub fn filter<T, F>(values: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut out = Vec::new();
    for value in values {
        if predicate(value) {
            out.push(value.clone());
        }
    }
    out
}

/// Like [`filter`], but `predicate` also receives the element's position.
///
/// The position is always the element's index in `values`, never its index in the output, so
/// rejecting earlier elements does not shift the positions seen by later ones.
pub fn filter_indexed<T, F>(values: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    let mut out = Vec::new();
    for (idx, value) in values.iter().enumerate() {
        if predicate(value, idx) {
            out.push(value.clone());
        }
    }
    out
}

/// Fallible [`filter`]. The first `Err` from `predicate` is returned unchanged.
pub fn try_filter<T, E, F>(values: &[T], mut predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T) -> Result<bool, E>,
{
    let mut out = Vec::new();
    for value in values {
        if predicate(value)? {
            out.push(value.clone());
        }
    }
    Ok(out)
}

/// Fallible [`filter_indexed`].
pub fn try_filter_indexed<T, E, F>(values: &[T], mut predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut out = Vec::new();
    for (idx, value) in values.iter().enumerate() {
        if predicate(value, idx)? {
            out.push(value.clone());
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{filter, filter_indexed, try_filter, try_filter_indexed};

    fn ages() -> Vec<i64> {
        vec![22, 21, 21, 24, 18, 21]
    }

    #[test]
    fn filter_by_numeric_predicate() {
        let input = ages();
        let out = filter(&input, |age| *age >= 21);

        assert_eq!(out, vec![22, 21, 21, 24, 21]);
        // Original unchanged
        assert_eq!(input.len(), 6);
    }

    #[test]
    fn filter_can_return_empty() {
        let out = filter(&ages(), |_| false);
        assert!(out.is_empty());
    }

    #[test]
    fn filter_always_true_copies_input() {
        let input = ages();
        assert_eq!(filter(&input, |_| true), input);
    }

    #[test]
    fn filter_of_empty_slice_is_empty() {
        let input: Vec<String> = Vec::new();
        assert!(filter(&input, |_| true).is_empty());
    }

    #[test]
    fn filter_indexed_sees_input_positions_not_output_positions() {
        let input = vec!['a', 'b', 'c', 'd', 'e'];
        let mut seen = Vec::new();
        let out = filter_indexed(&input, |c, idx| {
            seen.push(idx);
            *c != 'a' && *c != 'b' && idx % 2 == 0
        });

        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        // 'c' is the first kept element but still sees index 2.
        assert_eq!(out, vec!['c', 'e']);
    }

    #[test]
    fn filter_indexed_keeps_every_even_position() {
        let input = vec![22, 21, 21, 24, 21];
        let out = filter_indexed(&input, |_, idx| idx % 2 == 0);
        assert_eq!(out, vec![22, 21, 21]);
    }

    #[test]
    fn try_filter_propagates_predicate_error() {
        let input = vec![1, 2, 3, 4];
        let mut calls = 0;
        let out = try_filter(&input, |v| {
            calls += 1;
            if *v == 3 {
                Err("three")
            } else {
                Ok(v % 2 == 0)
            }
        });

        assert_eq!(out, Err("three"));
        assert_eq!(calls, 3);
    }

    #[test]
    fn try_filter_indexed_matches_infallible_version_on_success() {
        let input = ages();
        let fallible: Result<Vec<i64>, ()> = try_filter_indexed(&input, |_, idx| Ok(idx > 2));
        assert_eq!(fallible.unwrap(), filter_indexed(&input, |_, idx| idx > 2));
    }

    #[test]
    fn try_filter_indexed_stops_at_first_error() {
        let input = ages();
        let mut calls = 0;
        let out = try_filter_indexed(&input, |age, idx| {
            calls += 1;
            if *age < 21 {
                Err(format!("underage at {idx}"))
            } else {
                Ok(true)
            }
        });

        assert_eq!(out, Err("underage at 4".to_string()));
        // The element after the failing one is never visited.
        assert_eq!(calls, 5);
    }

    #[test]
    #[should_panic(expected = "predicate failed")]
    fn filter_indexed_propagates_predicate_panic() {
        let input = ages();
        let _ = filter_indexed(&input, |_, idx| {
            if idx == 2 {
                panic!("predicate failed");
            }
            true
        });
    }
}
