//! Block discovery time estimator
//!
//! Block discovery is a Poisson process, so the waiting time for the next
//! block is exponentially distributed around the mean `difficulty × 2^32 /
//! hash_rate`. Solving `P = 1 - e^(-t/mean)` for `t` gives the time by which
//! a block has been found with probability `P`.

use crate::calculator::reward::{HASHES_PER_DIFFICULTY, HASHES_PER_TERAHASH};
use crate::types::metrics::{BlockTimeEstimate, BlockTimeProbability};

const SECONDS_PER_DAY: f64 = 86400.0;

/// Confidence levels reported by the estimator, ascending
pub const PROBABILITY_THRESHOLDS: [u8; 4] = [50, 65, 90, 95];

/// Estimate solo block discovery times for a rig against a network
///
/// Returns one row per threshold in ascending probability order, followed by
/// the mean waiting time as the final row.
pub fn estimate_block_times(hash_rate_ths: f64, difficulty: f64) -> Vec<BlockTimeEstimate> {
    let mean_seconds =
        (difficulty * HASHES_PER_DIFFICULTY) / (hash_rate_ths * HASHES_PER_TERAHASH);
    let mean_days = mean_seconds / SECONDS_PER_DAY;

    let mut estimates: Vec<BlockTimeEstimate> = PROBABILITY_THRESHOLDS
        .iter()
        .map(|&p| BlockTimeEstimate {
            probability: BlockTimeProbability::Percentile(p),
            days: -mean_days * (1.0 - f64::from(p) / 100.0).ln(),
        })
        .collect();

    estimates.push(BlockTimeEstimate {
        probability: BlockTimeProbability::Mean,
        days: mean_days,
    });
    estimates
}
