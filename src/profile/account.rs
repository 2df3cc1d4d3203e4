//! Account records: signup, login and applying a finished setup

use chrono::Utc;
use tracing::info;

use super::{FinishedSetup, UserId, UserProfile};
use crate::error::{HobbyError, Result};
use crate::progression::ProgressionRecord;
use crate::store::{game_key, get_json, normalize_email, put_json, user_key, KeyValueStore};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub profile: UserProfile,
    /// Avatar, username or hobbies still need to be chosen
    pub needs_setup: bool,
}

/// Create an account with an empty profile and a fresh progression record
pub fn signup<S: KeyValueStore + ?Sized>(
    store: &S,
    name: &str,
    email: &str,
    password: &str,
    starting_rerolls: u32,
) -> Result<UserProfile> {
    let name = name.trim();
    let email = normalize_email(email);
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(HobbyError::InvalidInput("please fill all fields".to_string()));
    }

    if load_profile(store, &UserId::new(&email))?.is_some() {
        return Err(HobbyError::UserExists(email));
    }

    let profile = UserProfile {
        name: name.to_string(),
        email: email.clone(),
        password: password.to_string(),
        avatar: None,
        hobbies: Vec::new(),
        username: None,
        created_at: Utc::now().to_rfc3339(),
    };
    put_json(store, &user_key(&email), &profile)?;
    put_json(store, &game_key(&email), &ProgressionRecord::new(starting_rerolls))?;

    info!("Created account for {}", email);
    Ok(profile)
}

/// Check credentials and report whether profile setup is still pending
pub fn login<S: KeyValueStore + ?Sized>(
    store: &S,
    email: &str,
    password: &str,
    min_hobbies: usize,
) -> Result<LoginOutcome> {
    let user = UserId::new(email);
    if user.as_str().is_empty() || password.is_empty() {
        return Err(HobbyError::InvalidInput("please fill all fields".to_string()));
    }

    let profile =
        load_profile(store, &user)?.ok_or_else(|| HobbyError::UserNotFound(user.to_string()))?;
    if profile.password != password {
        return Err(HobbyError::InvalidCredentials);
    }

    let needs_setup = !profile.is_setup_complete(min_hobbies);
    Ok(LoginOutcome {
        profile,
        needs_setup,
    })
}

/// Store the wizard's choices and reset progression to a fresh record.
///
/// This is the only path that resets progression; prior progress is discarded.
/// Choices that would leave the profile incomplete are rejected and nothing is written.
pub fn complete_setup<S: KeyValueStore + ?Sized>(
    store: &S,
    user: &UserId,
    setup: FinishedSetup,
    starting_rerolls: u32,
    min_hobbies: usize,
) -> Result<UserProfile> {
    let mut profile =
        load_profile(store, user)?.ok_or_else(|| HobbyError::UserNotFound(user.to_string()))?;

    profile.avatar = Some(setup.avatar.trim().to_string());
    profile.hobbies = setup.hobbies;
    profile.username = Some(setup.username.trim().to_string());
    if let Some(missing) = profile.missing_setup(min_hobbies) {
        return Err(HobbyError::ProfileIncomplete(missing));
    }

    put_json(store, &user_key(user.as_str()), &profile)?;
    put_json(store, &game_key(user.as_str()), &ProgressionRecord::new(starting_rerolls))?;

    info!(
        "Profile setup complete for {} ({} hobbies)",
        user,
        profile.hobbies.len()
    );
    Ok(profile)
}

pub fn load_profile<S: KeyValueStore + ?Sized>(
    store: &S,
    user: &UserId,
) -> Result<Option<UserProfile>> {
    get_json(store, &user_key(user.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn finished() -> FinishedSetup {
        FinishedSetup {
            avatar: "🦊".to_string(),
            hobbies: vec!["Art".to_string(), "Coding".to_string(), "Piano".to_string()],
            username: "foxy".to_string(),
        }
    }

    #[test]
    fn test_signup_creates_records() {
        let store = MemoryStore::new();
        let profile = signup(&store, " Ada ", "Ada@Example.com", "secret", 1).unwrap();

        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.email, "ada@example.com");
        assert!(profile.avatar.is_none());

        let record: ProgressionRecord = get_json(&store, "hobbyverse_game_ada@example.com")
            .unwrap()
            .unwrap();
        assert_eq!(record, ProgressionRecord::new(1));
    }

    #[test]
    fn test_signup_rejects_duplicates_and_blanks() {
        let store = MemoryStore::new();
        signup(&store, "Ada", "ada@example.com", "secret", 1).unwrap();

        assert!(matches!(
            signup(&store, "Ada2", "ADA@example.com", "x", 1),
            Err(HobbyError::UserExists(_))
        ));
        assert!(matches!(
            signup(&store, "  ", "bob@example.com", "x", 1),
            Err(HobbyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_login() {
        let store = MemoryStore::new();
        signup(&store, "Ada", "ada@example.com", "secret", 1).unwrap();

        let outcome = login(&store, " ADA@example.com ", "secret", 3).unwrap();
        assert!(outcome.needs_setup);

        assert!(matches!(
            login(&store, "ada@example.com", "wrong", 3),
            Err(HobbyError::InvalidCredentials)
        ));
        assert!(matches!(
            login(&store, "bob@example.com", "secret", 3),
            Err(HobbyError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_complete_setup_resets_progression() {
        let store = MemoryStore::new();
        signup(&store, "Ada", "ada@example.com", "secret", 1).unwrap();
        let user = UserId::new("ada@example.com");

        let mut played = ProgressionRecord::new(0);
        played.level = 5;
        played.streak = 9;
        put_json(&store, &game_key(user.as_str()), &played).unwrap();

        let profile = complete_setup(&store, &user, finished(), 1, 3).unwrap();
        assert!(profile.is_setup_complete(3));

        let record: ProgressionRecord = get_json(&store, &game_key(user.as_str())).unwrap().unwrap();
        assert_eq!(record, ProgressionRecord::new(1));

        let outcome = login(&store, "ada@example.com", "secret", 3).unwrap();
        assert!(!outcome.needs_setup);
        assert_eq!(outcome.profile.username.as_deref(), Some("foxy"));
    }

    #[test]
    fn test_complete_setup_unknown_user() {
        let store = MemoryStore::new();
        let result = complete_setup(&store, &UserId::new("ghost@example.com"), finished(), 1, 3);
        assert!(matches!(result, Err(HobbyError::UserNotFound(_))));
    }

    #[test]
    fn test_complete_setup_rejects_incomplete_choices() {
        let store = MemoryStore::new();
        signup(&store, "Ada", "ada@example.com", "secret", 1).unwrap();
        let user = UserId::new("ada@example.com");

        let too_few = FinishedSetup {
            hobbies: vec!["Art".to_string()],
            ..finished()
        };
        let blank_name = FinishedSetup {
            username: "   ".to_string(),
            ..finished()
        };
        let blank_avatar = FinishedSetup {
            avatar: String::new(),
            ..finished()
        };

        for setup in [too_few, blank_name, blank_avatar] {
            assert!(matches!(
                complete_setup(&store, &user, setup, 1, 3),
                Err(HobbyError::ProfileIncomplete(_))
            ));
        }

        let profile = load_profile(&store, &user).unwrap().unwrap();
        assert!(profile.avatar.is_none());
        assert!(profile.hobbies.is_empty());
    }
}
