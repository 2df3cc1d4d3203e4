//! Challenge Resolution Engine
//!
//! Applies completions to a progression record: XP, completed count, streak,
//! removal from today's set, then level carryover.

use tracing::{debug, info};

use crate::error::{HobbyError, Result};
use crate::progression::{normalize, ChallengeEntry, ProgressionRecord};

/// Outcome of completing a single challenge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub entry: ChallengeEntry,
    pub reward_granted: u32,
    pub leveled_up: bool,
    pub new_level: u32,
    pub levels_gained: u32,
}

/// Outcome of claiming every remaining challenge at once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClaimSummary {
    pub claimed: usize,
    pub total_granted: u32,
    pub levels_gained: u32,
}

/// Complete the entry at `index` in today's set.
///
/// Later entries shift down by one. Fails with `NotFound` if the index is out
/// of bounds or there is no daily set.
pub fn complete_entry(record: &mut ProgressionRecord, index: usize) -> Result<Completion> {
    let entry = match record.daily_set.as_mut() {
        Some(set) if index < set.entries.len() => set.entries.remove(index),
        _ => return Err(HobbyError::NotFound { index }),
    };

    let reward = entry.experience_reward;
    accumulate(record, reward);
    let levels_gained = normalize(&mut record.level, &mut record.experience);

    if levels_gained > 0 {
        info!("Level up! Reached level {}", record.level);
    }
    debug!(
        "Completed '{}' ({}) for {} XP",
        entry.text, entry.hobby, reward
    );

    Ok(Completion {
        entry,
        reward_granted: reward,
        leveled_up: levels_gained > 0,
        new_level: record.level,
        levels_gained,
    })
}

/// Complete every remaining entry, normalizing levels once at the end.
///
/// Always leaves today's set empty; an already empty set yields zero totals.
pub fn claim_all(record: &mut ProgressionRecord) -> ClaimSummary {
    let entries = record
        .daily_set
        .as_mut()
        .map(|set| std::mem::take(&mut set.entries))
        .unwrap_or_default();

    let mut summary = ClaimSummary {
        claimed: entries.len(),
        ..ClaimSummary::default()
    };
    for entry in &entries {
        accumulate(record, entry.experience_reward);
        summary.total_granted += entry.experience_reward;
    }
    summary.levels_gained = normalize(&mut record.level, &mut record.experience);

    if summary.claimed > 0 {
        info!(
            "Claimed {} challenge(s) for {} XP (+{} levels)",
            summary.claimed, summary.total_granted, summary.levels_gained
        );
    }
    summary
}

fn accumulate(record: &mut ProgressionRecord, reward: u32) {
    record.experience += reward;
    record.completed_count += 1;
    record.streak += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::{lifetime_xp, DailySet};

    fn entry(hobby: &str, xp: u32) -> ChallengeEntry {
        ChallengeEntry {
            hobby: hobby.to_string(),
            icon: "✨".to_string(),
            text: format!("{} challenge", hobby),
            experience_reward: xp,
        }
    }

    fn record_with(level: u32, xp: u32, entries: Vec<ChallengeEntry>) -> ProgressionRecord {
        ProgressionRecord {
            level,
            experience: xp,
            daily_set: Some(DailySet {
                date: "2025-09-10".to_string(),
                entries,
            }),
            ..ProgressionRecord::new(1)
        }
    }

    #[test]
    fn test_complete_with_level_up() {
        let mut record = record_with(1, 900, vec![entry("Art", 250)]);

        let done = complete_entry(&mut record, 0).unwrap();

        assert_eq!(done.reward_granted, 250);
        assert!(done.leveled_up);
        assert_eq!(done.new_level, 2);
        assert_eq!(record.level, 2);
        assert_eq!(record.experience, 150);
        assert_eq!(record.completed_count, 1);
        assert_eq!(record.streak, 1);
        assert!(record.entries().is_empty());
    }

    #[test]
    fn test_complete_without_level_up() {
        let mut record = record_with(1, 100, vec![entry("Art", 200), entry("Coding", 300)]);

        let done = complete_entry(&mut record, 1).unwrap();

        assert_eq!(done.entry.hobby, "Coding");
        assert!(!done.leveled_up);
        assert_eq!(record.experience, 400);
        assert_eq!(record.entries().len(), 1);
        assert_eq!(record.entries()[0].hobby, "Art");
    }

    #[test]
    fn test_indices_shift_after_removal() {
        let mut record = record_with(1, 0, vec![entry("Art", 200), entry("Coding", 210)]);

        complete_entry(&mut record, 0).unwrap();
        let second = complete_entry(&mut record, 0).unwrap();

        assert_eq!(second.entry.hobby, "Coding");
        assert!(matches!(
            complete_entry(&mut record, 0),
            Err(HobbyError::NotFound { index: 0 })
        ));
    }

    #[test]
    fn test_complete_out_of_bounds_leaves_record_untouched() {
        let mut record = record_with(2, 10, vec![entry("Art", 200)]);
        let before = record.clone();

        assert!(matches!(
            complete_entry(&mut record, 5),
            Err(HobbyError::NotFound { index: 5 })
        ));
        assert_eq!(record, before);
    }

    #[test]
    fn test_complete_without_daily_set() {
        let mut record = ProgressionRecord::default();
        assert!(matches!(
            complete_entry(&mut record, 0),
            Err(HobbyError::NotFound { .. })
        ));
    }

    #[test]
    fn test_completions_preserve_total_xp() {
        let rewards = [290, 300, 260, 275];
        let entries = rewards.iter().map(|xp| entry("Piano", *xp)).collect();
        let mut record = record_with(3, 700, entries);
        let start = lifetime_xp(record.level, record.experience);

        while !record.entries().is_empty() {
            complete_entry(&mut record, 0).unwrap();
        }

        let gained = lifetime_xp(record.level, record.experience) - start;
        assert_eq!(gained, rewards.iter().map(|x| u64::from(*x)).sum::<u64>());
        assert_eq!(record.completed_count, 4);
        assert_eq!(record.streak, 4);
        assert!(record.experience < 1000);
    }

    #[test]
    fn test_claim_all_batches_levels() {
        let mut record = record_with(1, 800, vec![entry("Art", 300), entry("Coding", 300)]);

        let summary = claim_all(&mut record);

        assert_eq!(summary.claimed, 2);
        assert_eq!(summary.total_granted, 600);
        assert_eq!(summary.levels_gained, 1);
        assert_eq!(record.level, 2);
        assert_eq!(record.experience, 400);
        assert_eq!(record.completed_count, 2);
        assert_eq!(record.streak, 2);
        assert!(record.daily_set.as_ref().unwrap().entries.is_empty());
    }

    #[test]
    fn test_claim_all_multi_level_carryover() {
        let mut record = record_with(1, 999, vec![entry("Art", 300), entry("Coding", 300)]);
        record.experience = 1500; // transiently above threshold

        let summary = claim_all(&mut record);

        assert_eq!(summary.levels_gained, 2);
        assert_eq!(record.level, 3);
        assert_eq!(record.experience, 100);
    }

    #[test]
    fn test_claim_all_empty_is_noop() {
        let mut record = record_with(4, 321, Vec::new());
        let before = record.clone();

        let summary = claim_all(&mut record);

        assert_eq!(summary, ClaimSummary::default());
        assert_eq!(record, before);
    }

    #[test]
    fn test_claim_all_without_daily_set() {
        let mut record = ProgressionRecord::default();
        assert_eq!(claim_all(&mut record), ClaimSummary::default());
        assert!(record.daily_set.is_none());
    }
}
