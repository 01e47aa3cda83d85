//! Confidence scoring for translation pairs.

use crate::constants::WILSON_Z_95;

/// Lower bound of the Wilson score interval for `up` successes out of
/// `up + down` trials at 95% confidence.
///
/// Returns 0.0 for a pair nobody has voted on. A pair with many votes and a high
/// upvote share outranks one with a single upvote.
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "vote counts are far below 2^52")]
pub fn confidence(up: u64, down: u64) -> f64 {
    let total = up.saturating_add(down);
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    let p = up as f64 / n;
    let z = WILSON_Z_95;
    let z2 = z * z;
    let denom = 1.0 + z2 / n;
    let center = (p + z2 / (2.0 * n)) / denom;
    let margin = (z * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt()) / denom;
    (center - margin).max(0.0)
}

/// Sort items by descending score. The sort is stable, so callers that pass items
/// in creation order get creation order as the tie-break.
pub fn rank_by_confidence<T, F>(items: &mut [T], mut score: F)
where
    F: FnMut(&T) -> f64,
{
    items.sort_by(|a, b| score(b).total_cmp(&score(a)));
}
