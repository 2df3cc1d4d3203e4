//! Engine facade used by the presentation layer
//!
//! Every call names its user explicitly; there is no ambient signed-in user.
//! Each operation is a single read-modify-write of the user's progression record.
//!
//! ```ignore
//! let store = SqliteStore::open(&config.db_path())?;
//! let mut engine = HobbyEngine::new(store, SystemClock, config.settings);
//! let user = UserId::new("ada@example.com");
//!
//! let today = engine.load_today(&user)?;
//! let done = engine.complete(&user, 0)?;
//! if done.leveled_up { println!("Level {}!", done.new_level); }
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::config::Settings;
use crate::daily::ensure_daily_set;
use crate::error::{HobbyError, Result};
use crate::profile::{
    self, FinishedSetup, LoginOutcome, ProfileSetup, SetupStep, UserId, UserProfile,
};
use crate::progression::{ChallengeEntry, ProgressionRecord, XP_PER_LEVEL};
use crate::reroll;
use crate::resolution::{self, ClaimSummary, Completion};
use crate::store::{game_key, get_json, put_json, KeyValueStore};

/// Today's challenges as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySetView {
    pub date: String,
    pub entries: Vec<ChallengeEntry>,
}

impl DailySetView {
    /// All of today's challenges are done (offer "claim all")
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_record(record: &ProgressionRecord, today: &str) -> Self {
        Self {
            date: record
                .daily_set
                .as_ref()
                .map(|set| set.date.clone())
                .unwrap_or_else(|| today.to_string()),
            entries: record.entries().to_vec(),
        }
    }
}

/// Progression summary for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub completed: u32,
    pub streak: u32,
    pub rerolls_left: u32,
    pub daily_remaining: usize,
}

impl StatusView {
    /// Progress towards the next level (0.0 - 1.0)
    pub fn progress(&self) -> f32 {
        crate::progression::progress_to_next(self.xp)
    }
}

pub struct HobbyEngine<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
    settings: Settings,
    rng: StdRng,
}

impl<S: KeyValueStore, C: Clock> HobbyEngine<S, C> {
    pub fn new(store: S, clock: C, settings: Settings) -> Self {
        Self {
            store,
            clock,
            settings,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic engine for tests and replays
    pub fn with_seed(store: S, clock: C, settings: Settings, seed: u64) -> Self {
        Self {
            store,
            clock,
            settings,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ========================================
    // ACCOUNTS & PROFILE SETUP
    // ========================================

    pub fn signup(&self, name: &str, email: &str, password: &str) -> Result<UserProfile> {
        profile::signup(
            &self.store,
            name,
            email,
            password,
            self.settings.starting_rerolls,
        )
    }

    pub fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        profile::login(&self.store, email, password, self.settings.min_hobbies)
    }

    /// A fresh setup wizard using the configured hobby minimum
    pub fn start_setup(&self) -> ProfileSetup {
        ProfileSetup::new(self.settings.min_hobbies)
    }

    /// Advance the wizard (entering the username step draws a suggestion)
    pub fn advance_setup(&mut self, setup: &mut ProfileSetup) -> Result<SetupStep> {
        setup.next(&mut self.rng)
    }

    /// Save the wizard's choices and reset the user's progression
    pub fn complete_setup(&self, user: &UserId, setup: FinishedSetup) -> Result<UserProfile> {
        profile::complete_setup(
            &self.store,
            user,
            setup,
            self.settings.starting_rerolls,
            self.settings.min_hobbies,
        )
    }

    pub fn profile(&self, user: &UserId) -> Result<UserProfile> {
        profile::load_profile(&self.store, user)?
            .ok_or_else(|| HobbyError::UserNotFound(user.to_string()))
    }

    // ========================================
    // DAILY CHALLENGES
    // ========================================

    /// Today's set, generating it first if the stored one is missing or stale
    pub fn load_today(&mut self, user: &UserId) -> Result<DailySetView> {
        let profile = self.ready_profile(user)?;
        let mut record = self.load_progression(user)?;
        let today = self.clock.today_string();

        if ensure_daily_set(&profile.hobbies, &mut record, &today, &mut self.rng) {
            self.save_progression(user, &record)?;
            info!("New daily set for {} on {}", user, today);
        }
        Ok(DailySetView::from_record(&record, &today))
    }

    /// Complete the challenge at `index` (0-based) in the stored set
    pub fn complete(&mut self, user: &UserId, index: usize) -> Result<Completion> {
        self.ready_profile(user)?;
        let mut record = self.load_progression(user)?;

        let completion = resolution::complete_entry(&mut record, index)?;
        self.save_progression(user, &record)?;

        info!(
            "{} completed a {} challenge (+{} XP)",
            user, completion.entry.hobby, completion.reward_granted
        );
        Ok(completion)
    }

    /// Complete every remaining challenge at once
    pub fn claim_all(&mut self, user: &UserId) -> Result<ClaimSummary> {
        self.ready_profile(user)?;
        let mut record = self.load_progression(user)?;

        let summary = resolution::claim_all(&mut record);
        self.save_progression(user, &record)?;
        Ok(summary)
    }

    /// Replace today's set, consuming one reroll
    pub fn reroll(&mut self, user: &UserId) -> Result<DailySetView> {
        let profile = self.ready_profile(user)?;
        let mut record = self.load_progression(user)?;
        let today = self.clock.today_string();

        reroll::reroll(&profile.hobbies, &mut record, &today, &mut self.rng)?;
        self.save_progression(user, &record)?;
        Ok(DailySetView::from_record(&record, &today))
    }

    pub fn status(&self, user: &UserId) -> Result<StatusView> {
        self.ready_profile(user)?;
        let record = self.load_progression(user)?;

        Ok(StatusView {
            level: record.level,
            xp: record.experience,
            xp_to_next: XP_PER_LEVEL,
            completed: record.completed_count,
            streak: record.streak,
            rerolls_left: record.rerolls_remaining,
            daily_remaining: record.entries().len(),
        })
    }

    // ========================================
    // RECORD ACCESS
    // ========================================

    /// The user's profile, provided setup has finished
    fn ready_profile(&self, user: &UserId) -> Result<UserProfile> {
        let profile = self.profile(user)?;
        match profile.missing_setup(self.settings.min_hobbies) {
            Some(missing) => Err(HobbyError::ProfileIncomplete(missing)),
            None => Ok(profile),
        }
    }

    fn load_progression(&self, user: &UserId) -> Result<ProgressionRecord> {
        let record = get_json(&self.store, &game_key(user.as_str()))?;
        Ok(record.unwrap_or_else(|| {
            debug!("No progression record for {}, starting fresh", user);
            ProgressionRecord::new(self.settings.starting_rerolls)
        }))
    }

    fn save_progression(&self, user: &UserId, record: &ProgressionRecord) -> Result<()> {
        put_json(&self.store, &game_key(user.as_str()), record)
    }
}
