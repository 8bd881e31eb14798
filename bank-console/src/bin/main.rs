use std::io;

use account_service::{AccountService, AccountServiceConfig, DuplicateNamePolicy};
use bank_console::CommandLoop;
use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Policy for opening an account under a name that is already taken
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DuplicateNames {
    /// Refuse the new account
    Reject,
    /// Replace the existing account
    Overwrite,
}

impl From<DuplicateNames> for DuplicateNamePolicy {
    fn from(value: DuplicateNames) -> Self {
        match value {
            DuplicateNames::Reject => DuplicateNamePolicy::Reject,
            DuplicateNames::Overwrite => DuplicateNamePolicy::Overwrite,
        }
    }
}

/// In-memory console bank
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Set the log level (logs go to stderr)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Override MYBANK_DUPLICATE_NAMES
    #[arg(long, value_enum)]
    duplicate_names: Option<DuplicateNames>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins over the command line
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "bank_console={level},account_service={level},common={level}",
            level = cli.log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = AccountServiceConfig::from_env()?;
    if let Some(policy) = cli.duplicate_names {
        config.duplicate_names = policy.into();
    }
    info!("Starting bank console, duplicate names: {}", config.duplicate_names);

    let service = AccountService::with_config(&config);
    let stdin = io::stdin();
    let mut session = CommandLoop::new(service, stdin.lock(), io::stdout());

    if let Err(e) = session.run() {
        error!("Console failure: {}", e);
        return Err(e.into());
    }

    Ok(())
}
