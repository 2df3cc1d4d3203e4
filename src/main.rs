use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use hobbyverse::config::Config;
use hobbyverse::store::SqliteStore;
use hobbyverse::{HobbyEngine, SystemClock};

mod cli;

#[derive(Parser)]
#[command(name = "hobbyverse")]
#[command(about = "Daily hobby challenges with XP, levels, streaks and rerolls")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.hobbyverse/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the database (overrides the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// List the hobbies that can be chosen during setup
    Hobbies,

    /// List registered accounts
    Users,

    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Check credentials and show whether profile setup is pending
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Choose avatar, hobbies and username (resets progression)
    Setup {
        /// Account email
        #[arg(long)]
        user: String,
        /// Avatar symbol, e.g. an emoji
        #[arg(long)]
        avatar: String,
        /// Hobby to follow (repeat for each hobby)
        #[arg(long = "hobby", required = true)]
        hobbies: Vec<String>,
        /// Display handle (a suggestion is generated when omitted)
        #[arg(long)]
        username: Option<String>,
    },

    /// Show today's challenges (generated on first call each day)
    Today {
        #[arg(long)]
        user: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Complete one of today's challenges
    Complete {
        #[arg(long)]
        user: String,
        /// Challenge number as listed by `today` (starting at 1)
        number: usize,
    },

    /// Claim every remaining challenge of today
    Claim {
        #[arg(long)]
        user: String,
    },

    /// Swap today's challenges for a new set (uses a reroll)
    Reroll {
        #[arg(long)]
        user: String,
    },

    /// Show level, XP, streak and rerolls
    Status {
        #[arg(long)]
        user: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Initialize logging
    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.settings.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    if let Commands::Init { force } = cli.command {
        return cli::init::init_command(cli.config, force);
    }
    if let Commands::Hobbies = cli.command {
        cli::account::hobbies_command();
        return Ok(());
    }

    let db_path = cli.db.unwrap_or_else(|| config.db_path());
    let store = SqliteStore::open(&db_path)?;
    if let Commands::Users = cli.command {
        return cli::account::users_command(&store);
    }

    let mut engine = HobbyEngine::new(store, SystemClock, config.settings);

    match cli.command {
        Commands::Signup {
            name,
            email,
            password,
        } => cli::account::signup_command(&engine, &name, &email, &password)?,
        Commands::Login { email, password } => {
            cli::account::login_command(&engine, &email, &password)?
        }
        Commands::Setup {
            user,
            avatar,
            hobbies,
            username,
        } => cli::account::setup_command(&mut engine, &user, &avatar, &hobbies, username)?,
        Commands::Today { user, json } => cli::daily::today_command(&mut engine, &user, json)?,
        Commands::Complete { user, number } => {
            cli::daily::complete_command(&mut engine, &user, number)?
        }
        Commands::Claim { user } => cli::daily::claim_command(&mut engine, &user)?,
        Commands::Reroll { user } => cli::daily::reroll_command(&mut engine, &user)?,
        Commands::Status { user, json } => cli::daily::status_command(&engine, &user, json)?,
        Commands::Init { .. } | Commands::Hobbies | Commands::Users => {}
    }

    Ok(())
}
