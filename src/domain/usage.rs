//! Usage recency ranks.
//!
//! Converts absolute activation timestamps into ranks relative to the current
//! set of records: the most recently activated file gets 1.0, the least recently
//! activated gets 0.0, and the rest are spread evenly in between by position.
//! Ranks are only meaningful for the set they were computed over, so any change
//! to the timestamps requires a full recomputation.

use chrono::{DateTime, Utc};

/// Computes normalized recency ranks.
///
/// Returns one rank per input timestamp, in input order. Equal timestamps are
/// ordered by their position in the input, the earlier entry ranking lower. A
/// single timestamp ranks 1.0.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use docket::domain::usage::normalize;
///
/// let a = Utc.timestamp_opt(1, 0).unwrap();
/// let b = Utc.timestamp_opt(2, 0).unwrap();
/// assert_eq!(normalize(&[a, b]), vec![0.0, 1.0]);
/// ```
#[must_use]
pub fn normalize(timestamps: &[DateTime<Utc>]) -> Vec<f64> {
    let count = timestamps.len();
    let mut ranks = vec![0.0; count];

    match count {
        0 => return ranks,
        1 => {
            ranks[0] = 1.0;
            return ranks;
        }
        _ => {}
    }

    let mut order: Vec<usize> = (0..count).collect();
    // Stable: ties keep input order.
    order.sort_by_key(|&i| timestamps[i]);

    #[allow(clippy::cast_precision_loss)]
    let span = (count - 1) as f64;
    for (position, &index) in order.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let rank = position as f64 / span;
        ranks[index] = rank;
    }

    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn most_recent_ranks_highest() {
        assert_eq!(normalize(&[at(1), at(2)]), vec![0.0, 1.0]);
        assert_eq!(normalize(&[at(2), at(1)]), vec![1.0, 0.0]);
    }

    #[test]
    fn ranks_spread_evenly() {
        let ranks = normalize(&[at(30), at(10), at(20), at(40), at(50)]);
        assert_eq!(ranks, vec![0.5, 0.0, 0.25, 0.75, 1.0]);
    }

    #[test]
    fn ties_follow_input_order() {
        assert_eq!(normalize(&[at(5), at(5), at(5)]), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn degenerate_sets() {
        assert!(normalize(&[]).is_empty());
        assert_eq!(normalize(&[at(9)]), vec![1.0]);
    }
}
