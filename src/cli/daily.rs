//! Daily challenge and progress commands

use anyhow::{Context, Result};

use hobbyverse::store::KeyValueStore;
use hobbyverse::{Clock, DailySetView, HobbyEngine, UserId};

fn print_set(view: &DailySetView) {
    if view.is_empty() {
        println!("Congratulations! All of today's challenges ({}) are done.", view.date);
        println!("Come back tomorrow for a new set.");
        return;
    }

    println!("Challenges for {}:\n", view.date);
    for (i, entry) in view.entries.iter().enumerate() {
        println!(
            "  {}. {} {} - {} (+{} XP)",
            i + 1,
            entry.icon,
            entry.hobby,
            entry.text,
            entry.experience_reward
        );
    }
}

pub fn today_command<S: KeyValueStore, C: Clock>(
    engine: &mut HobbyEngine<S, C>,
    email: &str,
    json: bool,
) -> Result<()> {
    let view = engine.load_today(&UserId::new(email))?;

    if json {
        let entries: Vec<_> = view
            .entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "hobby": e.hobby,
                    "icon": e.icon,
                    "text": e.text,
                    "xp": e.experience_reward,
                })
            })
            .collect();
        let out = serde_json::json!({ "date": view.date, "challenges": entries });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_set(&view);
    Ok(())
}

/// Complete a challenge by its 1-based number in the `today` listing
pub fn complete_command<S: KeyValueStore, C: Clock>(
    engine: &mut HobbyEngine<S, C>,
    email: &str,
    number: usize,
) -> Result<()> {
    let index = number
        .checked_sub(1)
        .context("Challenge numbers start at 1")?;
    let done = engine.complete(&UserId::new(email), index)?;

    println!(
        "Completed: {} {} (+{} XP)",
        done.entry.icon, done.entry.text, done.reward_granted
    );
    if done.leveled_up {
        println!("Level up! You reached level {}.", done.new_level);
    }
    Ok(())
}

pub fn claim_command<S: KeyValueStore, C: Clock>(
    engine: &mut HobbyEngine<S, C>,
    email: &str,
) -> Result<()> {
    let summary = engine.claim_all(&UserId::new(email))?;

    if summary.claimed == 0 {
        println!("Nothing left to claim today.");
        return Ok(());
    }

    println!(
        "Claimed {} challenge(s) for +{} XP.",
        summary.claimed, summary.total_granted
    );
    if summary.levels_gained > 0 {
        let status = engine.status(&UserId::new(email))?;
        println!("Level up! You reached level {}.", status.level);
    }
    Ok(())
}

pub fn reroll_command<S: KeyValueStore, C: Clock>(
    engine: &mut HobbyEngine<S, C>,
    email: &str,
) -> Result<()> {
    let view = engine.reroll(&UserId::new(email))?;
    println!("Rerolled!\n");
    print_set(&view);
    Ok(())
}

pub fn status_command<S: KeyValueStore, C: Clock>(
    engine: &HobbyEngine<S, C>,
    email: &str,
    json: bool,
) -> Result<()> {
    let user = UserId::new(email);
    let profile = engine.profile(&user)?;
    let status = engine.status(&user)?;

    if json {
        let out = serde_json::json!({
            "user": user.as_str(),
            "level": status.level,
            "xp": status.xp,
            "xpToNext": status.xp_to_next,
            "completed": status.completed,
            "streak": status.streak,
            "rerollsLeft": status.rerolls_left,
            "dailyRemaining": status.daily_remaining,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} {}",
        profile.avatar.as_deref().unwrap_or_default(),
        profile.display_name()
    );
    println!(
        "  Level {}  {}/{} XP ({:.0}%)",
        status.level,
        status.xp,
        status.xp_to_next,
        status.progress() * 100.0
    );
    println!("  Completed:  {}", status.completed);
    println!("  Streak:     {}", status.streak);
    println!("  Rerolls:    {}", status.rerolls_left);
    println!("  Left today: {}", status.daily_remaining);
    Ok(())
}
