//! Capped subset collection.

use crate::dataset::Record;

/// Collect up to `cap` records satisfying `predicate`, in dataset order.
///
/// Iteration stops as soon as the cap is reached, so the result is a prefix
/// of all satisfying records rather than a uniform sample. That order bias
/// is observed behavior of the pipeline and kept intentionally.
pub fn collect_subset<'r, I, P>(records: I, mut predicate: P, cap: usize) -> Vec<&'r Record>
where
    I: IntoIterator<Item = &'r Record>,
    P: FnMut(&Record) -> bool,
{
    let mut subset = Vec::new();
    if cap == 0 {
        return subset;
    }
    for record in records {
        if predicate(record) {
            subset.push(record);
            if subset.len() >= cap {
                break;
            }
        }
    }
    subset
}
