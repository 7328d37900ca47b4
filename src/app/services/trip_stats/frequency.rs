//! Frequency counting with deterministic tie-breaks
//!
//! The standard library offers no mode, and an ad-hoc hash map walk would
//! give nondeterministic tie-breaks. All frequency questions in the
//! aggregators go through these helpers, which break count ties by first
//! appearance in a stable left-to-right scan of the input.

use std::collections::HashMap;
use std::hash::Hash;

/// Count occurrences, preserving first-appearance order of distinct values
fn count_in_order<T, I>(values: I) -> (HashMap<T, usize>, Vec<T>)
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();

    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    (counts, order)
}

/// All most-frequent values, in first-appearance order
///
/// Returns an empty vector for empty input.
pub fn modes<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let (counts, order) = count_in_order(values);
    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };
    order.into_iter().filter(|v| counts[v] == max).collect()
}

/// The single most frequent value
///
/// Count ties resolve to the value encountered first, so repeated calls on
/// the same input always agree.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    modes(values).into_iter().next()
}

/// All distinct values with their counts, most frequent first
///
/// Count ties keep first-appearance order (the sort is stable).
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let (counts, order) = count_in_order(values);
    let mut result: Vec<(T, usize)> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();
    result.sort_by(|a, b| b.1.cmp(&a.1));
    result
}
