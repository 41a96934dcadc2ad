//! Subset-sum reachability.

use itertools::Itertools;

/// Check whether some non-empty subset of `available` sums exactly to
/// `target`.
///
/// Exhaustive search over subset sizes 1..=n, early-exiting on the first
/// hit. A twelve-tile board has at most 4095 non-empty subsets, so brute
/// force stays well inside a microsecond budget even when the target is
/// unreachable and every subset is visited.
///
/// ```
/// use shutbox::can_reach;
///
/// assert!(can_reach(&[1, 2, 3], 6));
/// assert!(!can_reach(&[9, 10, 11, 12], 7));
/// ```
#[must_use]
pub fn can_reach(available: &[u8], target: u8) -> bool {
    if available.is_empty() {
        return false;
    }
    let target = u16::from(target);
    (1..=available.len()).any(|size| {
        available
            .iter()
            .combinations(size)
            .any(|combo| combo.into_iter().map(|&v| u16::from(v)).sum::<u16>() == target)
    })
}
