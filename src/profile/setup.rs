//! Profile setup wizard
//!
//! AvatarSelect -> HobbiesSelect -> UsernameEntry -> Complete
//!
//! Each action is only valid in its own step; the wizard holds no rendering
//! state and hands back a `FinishedSetup` once complete.

use rand::Rng;

use crate::catalog::Hobby;
use crate::error::{HobbyError, Result};

/// Upper bound (exclusive) of the number appended to a suggested username
const SUGGESTION_SUFFIX_MAX: u32 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    AvatarSelect,
    HobbiesSelect,
    UsernameEntry,
    Complete,
}

impl SetupStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AvatarSelect => "avatar",
            Self::HobbiesSelect => "hobbies",
            Self::UsernameEntry => "username",
            Self::Complete => "complete",
        }
    }
}

/// Choices gathered by a completed wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedSetup {
    pub avatar: String,
    pub hobbies: Vec<String>,
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct ProfileSetup {
    step: SetupStep,
    avatar: Option<String>,
    hobbies: Vec<String>,
    username: String,
    min_hobbies: usize,
}

impl ProfileSetup {
    pub fn new(min_hobbies: usize) -> Self {
        Self {
            step: SetupStep::AvatarSelect,
            avatar: None,
            hobbies: Vec::new(),
            username: String::new(),
            min_hobbies,
        }
    }

    pub fn step(&self) -> SetupStep {
        self.step
    }

    pub fn hobbies(&self) -> &[String] {
        &self.hobbies
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether `next()` would currently succeed
    pub fn can_advance(&self) -> bool {
        match self.step {
            SetupStep::AvatarSelect => self.avatar.is_some(),
            SetupStep::HobbiesSelect => self.hobbies.len() >= self.min_hobbies,
            SetupStep::UsernameEntry | SetupStep::Complete => false,
        }
    }

    /// Pick (or replace) the avatar symbol
    pub fn select_avatar(&mut self, symbol: &str) -> Result<()> {
        self.expect_step(SetupStep::AvatarSelect, "select an avatar")?;
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(HobbyError::InvalidInput("avatar cannot be empty".to_string()));
        }
        self.avatar = Some(symbol.to_string());
        Ok(())
    }

    /// Add the hobby if unselected, remove it otherwise. Returns whether it is now selected.
    ///
    /// Only catalog hobbies can be chosen.
    pub fn toggle_hobby(&mut self, name: &str) -> Result<bool> {
        self.expect_step(SetupStep::HobbiesSelect, "choose hobbies")?;
        if !Hobby::is_known(name) {
            return Err(HobbyError::InvalidInput(format!(
                "unknown hobby '{}' (available: {})",
                name,
                Hobby::names().join(", ")
            )));
        }
        if let Some(pos) = self.hobbies.iter().position(|h| h == name) {
            self.hobbies.remove(pos);
            Ok(false)
        } else {
            self.hobbies.push(name.to_string());
            Ok(true)
        }
    }

    /// Advance to the next step.
    ///
    /// Entering the username step pre-fills a suggestion derived from the avatar.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SetupStep> {
        match self.step {
            SetupStep::AvatarSelect => {
                if !self.can_advance() {
                    return Err(HobbyError::ProfileIncomplete(
                        "select an avatar first".to_string(),
                    ));
                }
                self.step = SetupStep::HobbiesSelect;
            }
            SetupStep::HobbiesSelect => {
                if !self.can_advance() {
                    return Err(HobbyError::ProfileIncomplete(format!(
                        "select at least {} hobbies",
                        self.min_hobbies
                    )));
                }
                self.username = suggest_username(self.avatar.as_deref(), rng);
                self.step = SetupStep::UsernameEntry;
            }
            SetupStep::UsernameEntry | SetupStep::Complete => {
                return Err(self.invalid("advance"));
            }
        }
        Ok(self.step)
    }

    pub fn set_username(&mut self, name: &str) -> Result<()> {
        self.expect_step(SetupStep::UsernameEntry, "set a username")?;
        self.username = name.trim().to_string();
        Ok(())
    }

    /// Finish the wizard and hand back the gathered choices
    pub fn finish(&mut self) -> Result<FinishedSetup> {
        self.expect_step(SetupStep::UsernameEntry, "finish setup")?;
        if self.username.is_empty() {
            return Err(HobbyError::ProfileIncomplete(
                "please enter a username".to_string(),
            ));
        }
        let avatar = self
            .avatar
            .clone()
            .ok_or_else(|| HobbyError::ProfileIncomplete("no avatar selected".to_string()))?;

        self.step = SetupStep::Complete;
        Ok(FinishedSetup {
            avatar,
            hobbies: self.hobbies.clone(),
            username: self.username.clone(),
        })
    }

    fn expect_step(&self, step: SetupStep, action: &'static str) -> Result<()> {
        if self.step == step {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> HobbyError {
        HobbyError::InvalidTransition {
            state: self.step.as_str(),
            action,
        }
    }
}

/// Avatar with whitespace stripped and lower-cased, plus a random number
fn suggest_username<R: Rng + ?Sized>(avatar: Option<&str>, rng: &mut R) -> String {
    let base: String = avatar
        .unwrap_or("user")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    format!("{}{}", base, rng.gen_range(0..SUGGESTION_SUFFIX_MAX))
}
