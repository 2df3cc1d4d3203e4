//! XP and Level system
//!
//! Every level costs a flat amount of XP. Excess XP carries over into the
//! next level, so a large award can raise several levels at once.

/// XP needed to advance one level
pub const XP_PER_LEVEL: u32 = 1000;

/// Smallest XP reward a daily challenge can carry
pub const MIN_CHALLENGE_XP: u32 = 200;

/// Largest XP reward a daily challenge can carry (inclusive)
pub const MAX_CHALLENGE_XP: u32 = 300;

/// Carry excess XP into levels until `xp < XP_PER_LEVEL`.
///
/// Returns the number of levels gained.
pub fn normalize(level: &mut u32, xp: &mut u32) -> u32 {
    let mut gained = 0;
    while *xp >= XP_PER_LEVEL {
        *xp -= XP_PER_LEVEL;
        *level += 1;
        gained += 1;
    }
    gained
}

/// Total XP represented by a level/xp pair, counting level 1 as zero
pub fn lifetime_xp(level: u32, xp: u32) -> u64 {
    u64::from(level.saturating_sub(1)) * u64::from(XP_PER_LEVEL) + u64::from(xp)
}

/// Progress towards the next level (0.0 - 1.0)
pub fn progress_to_next(xp: u32) -> f32 {
    (xp as f32 / XP_PER_LEVEL as f32).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_below_threshold() {
        let (mut level, mut xp) = (3, 999);
        assert_eq!(normalize(&mut level, &mut xp), 0);
        assert_eq!((level, xp), (3, 999));
    }

    #[test]
    fn test_normalize_carryover() {
        let (mut level, mut xp) = (1, 1150);
        assert_eq!(normalize(&mut level, &mut xp), 1);
        assert_eq!((level, xp), (2, 150));
    }

    #[test]
    fn test_normalize_multiple_levels() {
        let (mut level, mut xp) = (4, 3000);
        assert_eq!(normalize(&mut level, &mut xp), 3);
        assert_eq!((level, xp), (7, 0));
    }

    #[test]
    fn test_lifetime_xp_is_preserved_by_normalize() {
        let (mut level, mut xp) = (2, 2750);
        let before = lifetime_xp(level, xp);
        normalize(&mut level, &mut xp);
        assert_eq!(lifetime_xp(level, xp), before);
    }

    #[test]
    fn test_progress_to_next() {
        assert!((progress_to_next(250) - 0.25).abs() < 0.001);
        assert_eq!(progress_to_next(0), 0.0);
    }
}
