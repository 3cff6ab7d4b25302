//! Loyalty reward tokens.

/// Reward tokens earned per kilometer flown.
pub const REWARD_TOKENS_PER_KM: f64 = 1.5;

/// Tokens earned for a quoted distance, rounded to the nearest whole token.
///
/// Applied to the same distance the price sees: for round trips the caller
/// doubles the distance before calling, consistent with the rest of the
/// pipeline.
pub fn reward_tokens(distance_km: f64) -> i64 {
    (distance_km * REWARD_TOKENS_PER_KM).round() as i64
}
