//! Pure ballot counting

use std::collections::HashMap;

/// Count votes per target seat, ignoring abstentions (`None` ballots)
#[must_use]
pub fn tally(ballots: &HashMap<u32, Option<u32>>) -> HashMap<u32, u32> {
    let mut counts = HashMap::new();
    for target in ballots.values().flatten() {
        *counts.entry(*target).or_insert(0) += 1;
    }
    counts
}

/// Seats tied for the highest count, ascending, with that count
///
/// Empty counts yield `(vec![], 0)`.
#[must_use]
pub fn leaders(counts: &HashMap<u32, u32>) -> (Vec<u32>, u32) {
    let Some(top) = counts.values().copied().max() else {
        return (Vec::new(), 0);
    };

    let mut leaders: Vec<u32> = counts
        .iter()
        .filter(|(_, count)| **count == top)
        .map(|(seat, _)| *seat)
        .collect();
    leaders.sort_unstable();

    (leaders, top)
}
