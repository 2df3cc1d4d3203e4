//! Daily Set Generator
//!
//! Ensures exactly one challenge set per calendar day. A new set picks one or
//! two distinct hobbies (from the user's choices, or the whole catalog when the
//! user has none), one random challenge per hobby, and a random XP reward.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::catalog::Hobby;
use crate::progression::{
    ChallengeEntry, DailySet, ProgressionRecord, MAX_CHALLENGE_XP, MIN_CHALLENGE_XP,
};

/// Most hobbies a single daily set can cover
pub const MAX_HOBBIES_PER_DAY: usize = 2;

/// Generate a set for `today` unless the record already holds one.
///
/// Returns true if a new set was generated (the caller must persist it).
pub fn ensure_daily_set<R: Rng + ?Sized>(
    hobbies: &[String],
    record: &mut ProgressionRecord,
    today: &str,
    rng: &mut R,
) -> bool {
    if record.has_set_for(today) {
        return false;
    }

    let set = generate_daily_set(hobbies, today, rng);
    debug!(
        "Generated daily set for {} with {} challenge(s)",
        today,
        set.entries.len()
    );
    record.daily_set = Some(set);
    true
}

/// Build a brand-new daily set, ignoring any existing one
pub fn generate_daily_set<R: Rng + ?Sized>(
    hobbies: &[String],
    today: &str,
    rng: &mut R,
) -> DailySet {
    let mut pool = selection_pool(hobbies);
    let count: usize = rng.gen_range(1..=MAX_HOBBIES_PER_DAY);

    // Unbiased shuffle, then take the prefix
    pool.shuffle(rng);
    pool.truncate(count.min(pool.len()));

    let entries = pool
        .into_iter()
        .map(|name| challenge_for(name, &mut *rng))
        .collect();

    DailySet {
        date: today.to_string(),
        entries,
    }
}

/// The user's hobbies, or every catalog hobby if the user picked none
fn selection_pool(hobbies: &[String]) -> Vec<String> {
    if hobbies.is_empty() {
        Hobby::names()
    } else {
        hobbies.to_vec()
    }
}

fn challenge_for<R: Rng + ?Sized>(hobby_name: String, rng: &mut R) -> ChallengeEntry {
    let hobby = Hobby::get_or_fallback(&hobby_name);
    let text = hobby
        .challenges
        .choose(rng)
        .copied()
        .unwrap_or(crate::catalog::FALLBACK_CHALLENGE);

    ChallengeEntry {
        hobby: hobby_name,
        icon: hobby.icon.to_string(),
        text: text.to_string(),
        experience_reward: rng.gen_range(MIN_CHALLENGE_XP..=MAX_CHALLENGE_XP),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FALLBACK_CHALLENGE, FALLBACK_ICON};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn hobbies(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generates_when_absent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut record = ProgressionRecord::default();

        let user_hobbies = hobbies(&["Art", "Coding", "Piano"]);

        assert!(ensure_daily_set(&user_hobbies, &mut record, "2025-09-10", &mut rng));
        let set = record.daily_set.as_ref().unwrap();
        assert_eq!(set.date, "2025-09-10");
        assert!((1..=2).contains(&set.entries.len()));
    }

    #[test]
    fn test_same_day_is_noop() {
        let mut rng = StdRng::seed_from_u64(11);
        let user_hobbies = hobbies(&["Art", "Coding", "Piano"]);
        let mut record = ProgressionRecord::default();

        ensure_daily_set(&user_hobbies, &mut record, "2025-09-10", &mut rng);
        let first = record.daily_set.clone();

        for _ in 0..20 {
            assert!(!ensure_daily_set(&user_hobbies, &mut record, "2025-09-10", &mut rng));
        }
        assert_eq!(record.daily_set, first);
    }

    #[test]
    fn test_new_day_replaces_set() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut record = ProgressionRecord::default();
        record.daily_set = Some(DailySet {
            date: "2025-09-09".to_string(),
            entries: Vec::new(),
        });

        assert!(ensure_daily_set(&[], &mut record, "2025-09-10", &mut rng));
        let set = record.daily_set.as_ref().unwrap();
        assert_eq!(set.date, "2025-09-10");
        assert!(!set.entries.is_empty());
    }

    #[test]
    fn test_entries_respect_pool_and_reward_range() {
        let user_hobbies = hobbies(&["Art", "Coding", "Crochet"]);
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = generate_daily_set(&user_hobbies, "2025-09-10", &mut rng);

            let mut seen = HashSet::new();
            for entry in &set.entries {
                assert!(user_hobbies.contains(&entry.hobby));
                assert!((200..=300).contains(&entry.experience_reward));
                let hobby = Hobby::get(&entry.hobby).unwrap();
                assert!(hobby.challenges.contains(&entry.text.as_str()));
                assert_eq!(entry.icon, hobby.icon);
                assert!(seen.insert(entry.hobby.clone()), "hobbies must be distinct");
            }
        }
    }

    #[test]
    fn test_empty_hobbies_draw_from_catalog() {
        let catalog = Hobby::names();
        let mut drawn = HashSet::new();
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            for entry in generate_daily_set(&[], "2025-09-10", &mut rng).entries {
                assert!(catalog.contains(&entry.hobby));
                drawn.insert(entry.hobby);
            }
        }
        assert_eq!(drawn.len(), catalog.len());
    }

    #[test]
    fn test_count_is_one_or_two() {
        let mut sizes = HashSet::new();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = generate_daily_set(&hobbies(&["Art", "Guitar", "Piano"]), "d", &mut rng);
            sizes.insert(set.entries.len());
        }
        assert_eq!(sizes, HashSet::from([1, 2]));
    }

    #[test]
    fn test_draws_are_uniform() {
        const DRAWS: u32 = 60_000;
        let pool = hobbies(&["Art", "Coding", "Piano"]);
        let mut rng = StdRng::seed_from_u64(2024);

        let mut sizes = [0u32; 3];
        let mut subsets: HashMap<Vec<String>, u32> = HashMap::new();
        let mut rewards = HashSet::new();

        for _ in 0..DRAWS {
            let set = generate_daily_set(&pool, "d", &mut rng);
            sizes[set.entries.len()] += 1;

            let mut names: Vec<String> = set.entries.iter().map(|e| e.hobby.clone()).collect();
            names.sort();
            *subsets.entry(names).or_default() += 1;
            rewards.extend(set.entries.iter().map(|e| e.experience_reward));
        }

        // One or two hobbies, half the time each
        assert_eq!(sizes[0], 0);
        for count in &sizes[1..] {
            assert!(count.abs_diff(DRAWS / 2) < 900, "sizes {:?}", sizes);
        }

        // 3 singletons + 3 pairs, each a sixth of the draws
        assert_eq!(subsets.len(), 6);
        for (subset, count) in &subsets {
            assert!(count.abs_diff(DRAWS / 6) < 600, "{:?} drawn {} times", subset, count);
        }

        assert_eq!(rewards.len(), 101);
        assert_eq!(rewards.iter().min(), Some(&MIN_CHALLENGE_XP));
        assert_eq!(rewards.iter().max(), Some(&MAX_CHALLENGE_XP));
    }

    #[test]
    fn test_single_hobby_pool_caps_count() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = generate_daily_set(&hobbies(&["Sewing"]), "d", &mut rng);
            assert_eq!(set.entries.len(), 1);
            assert_eq!(set.entries[0].hobby, "Sewing");
        }
    }

    #[test]
    fn test_unknown_hobby_uses_fallback() {
        let mut rng = StdRng::seed_from_u64(1);
        let set = generate_daily_set(&hobbies(&["Juggling"]), "d", &mut rng);
        assert_eq!(set.entries.len(), 1);
        let entry = &set.entries[0];
        assert_eq!(entry.hobby, "Juggling");
        assert_eq!(entry.icon, FALLBACK_ICON);
        assert_eq!(entry.text, FALLBACK_CHALLENGE);
        assert!((200..=300).contains(&entry.experience_reward));
    }
}
