//! Account and profile setup commands

use anyhow::Result;

use hobbyverse::catalog::HOBBIES;
use hobbyverse::store::{KeyValueStore, SqliteStore, USER_PREFIX};
use hobbyverse::{Clock, HobbyEngine, UserId};

/// List every hobby offered during setup
pub fn hobbies_command() {
    println!("Hobbies ({}):\n", HOBBIES.len());
    for hobby in HOBBIES {
        println!(
            "  {} {:<8} {} challenges",
            hobby.icon,
            hobby.name,
            hobby.challenges.len()
        );
    }
}

/// List registered accounts by email
pub fn users_command(store: &SqliteStore) -> Result<()> {
    let keys = store.keys_with_prefix(USER_PREFIX)?;
    if keys.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    println!("Users ({}):\n", keys.len());
    for key in keys {
        println!("  {}", key.trim_start_matches(USER_PREFIX));
    }
    Ok(())
}

pub fn signup_command<S: KeyValueStore, C: Clock>(
    engine: &HobbyEngine<S, C>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    let profile = engine.signup(name, email, password)?;
    println!("Welcome, {}! Account created for {}.", profile.name, profile.email);
    println!("Next: hobbyverse setup --user {} --avatar <emoji> --hobby <name> ...", profile.email);
    Ok(())
}

pub fn login_command<S: KeyValueStore, C: Clock>(
    engine: &HobbyEngine<S, C>,
    email: &str,
    password: &str,
) -> Result<()> {
    let outcome = engine.login(email, password)?;
    println!("Logged in as {}.", outcome.profile.display_name());
    if outcome.needs_setup {
        println!("Profile setup is not finished yet. Run `hobbyverse setup` to continue.");
    } else {
        println!("Hobbies: {}", outcome.profile.hobbies.join(", "));
    }
    Ok(())
}

/// Run the setup wizard non-interactively from command-line choices
pub fn setup_command<S: KeyValueStore, C: Clock>(
    engine: &mut HobbyEngine<S, C>,
    email: &str,
    avatar: &str,
    hobbies: &[String],
    username: Option<String>,
) -> Result<()> {
    let user = UserId::new(email);
    // Fail before walking the wizard if the account is missing
    engine.profile(&user)?;

    let mut setup = engine.start_setup();
    setup.select_avatar(avatar)?;
    engine.advance_setup(&mut setup)?;

    for hobby in hobbies {
        // Repeating a hobby on the command line should not deselect it
        if !setup.hobbies().contains(hobby) {
            setup.toggle_hobby(hobby)?;
        }
    }
    engine.advance_setup(&mut setup)?;

    match username {
        Some(name) => setup.set_username(&name)?,
        None => println!("Suggested username: {}", setup.username()),
    }

    let finished = setup.finish()?;
    let profile = engine.complete_setup(&user, finished)?;

    println!(
        "Profile ready: {} {} ({})",
        profile.avatar.as_deref().unwrap_or_default(),
        profile.display_name(),
        profile.hobbies.join(", ")
    );
    println!("Progress has been reset. Run `hobbyverse today --user {}` to begin.", user);
    Ok(())
}
