//! Expected mining reward model
//!
//! A miner's chance of finding a block with one hash is `1 / (difficulty ×
//! 2^32)`, so the expected reward over a period is the number of hashes
//! performed times that probability times the block reward. No input guards
//! here; degenerate inputs propagate through IEEE-754 arithmetic and are
//! rejected once at the parameter boundary instead.

/// Expected hashes needed per unit of difficulty (2^32)
pub const HASHES_PER_DIFFICULTY: f64 = 4_294_967_296.0;

/// One terahash per second expressed in H/s
pub const HASHES_PER_TERAHASH: f64 = 1e12;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Expected reward for one hour of hashing, in asset units
///
/// `hash_rate_ths` is in TH/s, `pool_fee_percent` in 0-100.
///
/// # Examples
/// ```
/// use mining_profit_calculator::calculator::reward::hourly_reward;
///
/// // 100 TH/s against current Bitcoin difficulty, 1% pool fee
/// let reward = hourly_reward(100.0, 112_149_504_190_349.0, 3.125, 1.0);
/// assert!((reward - 2.31222715821701e-6).abs() < 1e-18);
///
/// // A 100% pool fee consumes the entire reward
/// assert_eq!(hourly_reward(100.0, 112_149_504_190_349.0, 3.125, 100.0), 0.0);
/// ```
pub fn hourly_reward(
    hash_rate_ths: f64,
    difficulty: f64,
    block_reward: f64,
    pool_fee_percent: f64,
) -> f64 {
    ((hash_rate_ths * HASHES_PER_TERAHASH * SECONDS_PER_HOUR * block_reward)
        / (difficulty * HASHES_PER_DIFFICULTY))
        * (1.0 - pool_fee_percent / 100.0)
}
