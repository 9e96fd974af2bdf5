//! Settings CLI - prints the resolved settings record.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use settings_lib::{constants::ENV_PROFILE, ProcessEnv, Profile};

#[derive(Parser)]
#[command(name = "cvat-settings")]
#[command(about = "Resolve annotation server settings from the environment")]
struct Cli {
    /// Settings profile (development or production)
    #[arg(long, global = true, env = ENV_PROFILE, default_value = "production")]
    profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the whole settings record as JSON
    Show {
        #[arg(long)]
        pretty: bool,
    },
    /// Print a single setting, e.g. `queue.default.host`
    Get { key: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    info!("Loading {} settings", cli.profile);
    let settings = cli.profile.load(&ProcessEnv);

    let rendered = match cli.command {
        Commands::Show { pretty } => settings.to_json(pretty),
        Commands::Get { key } => settings.get(&key),
    }
    .map_err(|e| {
        error!(code = e.code(), "{}", e.user_message());
        e
    })?;

    println!("{}", rendered);

    Ok(())
}
