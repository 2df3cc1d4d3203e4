//! Reroll Economy
//!
//! A reroll replaces today's set with a fresh one and consumes one reroll.
//! The counter is the only limiter: nothing stops several rerolls on one day.

use rand::Rng;
use tracing::info;

use crate::daily::generate_daily_set;
use crate::error::{HobbyError, Result};
use crate::progression::ProgressionRecord;

/// Replace today's daily set, consuming one reroll.
///
/// Fails with `NoRerollsLeft` without touching the record when the counter is zero.
pub fn reroll<R: Rng + ?Sized>(
    hobbies: &[String],
    record: &mut ProgressionRecord,
    today: &str,
    rng: &mut R,
) -> Result<()> {
    if record.rerolls_remaining == 0 {
        return Err(HobbyError::NoRerollsLeft);
    }

    record.daily_set = Some(generate_daily_set(hobbies, today, rng));
    record.rerolls_remaining -= 1;

    info!(
        "Rerolled daily set for {} ({} reroll(s) left)",
        today, record.rerolls_remaining
    );
    Ok(())
}
