use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

use commands::bootstrap::{App, Overrides};

#[derive(Parser)]
#[command(name = "beacon")]
#[command(version, about = "Beacon - demo backend for a notification-delivery admin dashboard", long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the mock dataset
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Answer mocked requests without simulated latency
    #[arg(long, global = true)]
    no_latency: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the navigation registry
    Nav,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(flatten)]
    Api(ApiCommand),
}

/// Commands that talk to the mock backend.
#[derive(Subcommand)]
pub enum ApiCommand {
    /// Send a raw request through the intercepting client
    Request {
        /// HTTP method (GET, POST, PUT, PATCH, DELETE)
        method: String,
        url: String,
        #[arg(long)]
        body: Option<String>,
    },
    /// Print one page of notifications
    Notifications {
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long)]
        cursor: Option<String>,
    },
    /// Print a notification detail and its event timeline
    Show { id: String },
    /// Print contact messages
    Contacts {
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
    /// Print a daily activity series
    Activity {
        #[arg(value_enum)]
        series: ActivitySeries,
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Load the home page data
    Overview,
    /// Run the sign-in and sign-out flow and print each observed state
    Whoami,
    /// Post an admin command
    Command { text: String },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ActivitySeries {
    Notifications,
    Contacts,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let overrides = Overrides {
        config_path: cli.config,
        seed: cli.seed,
        no_latency: cli.no_latency,
    };

    match cli.command {
        Commands::Nav => commands::nav::run()?,
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(&overrides)?,
            ConfigAction::Show => commands::config::show(&overrides)?,
            ConfigAction::Init { force } => commands::config::init(&overrides, force)?,
        },
        Commands::Api(command) => {
            let app = App::bootstrap(&overrides)?;
            commands::api::run(&app, command).await?
        }
    }

    Ok(())
}
