mod community;
mod history;
mod stats;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use ecosteps_core::repository::{
    StoreActivityRepository, StoreDailyFootprintRepository, StoreJoinedActionRepository,
};
use ecosteps_core::{
    seed_members, Activity, AppConfig, DailyFootprintService, DashboardUseCase, EcoActionService,
    FileKeyValueStore, TrackingService,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ecosteps")]
#[command(about = "Track the carbon footprint of your daily activities", long_about = None)]
struct Cli {
    /// Directory for data files (overrides ECOSTEPS_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log an activity for today
    Track {
        #[command(subcommand)]
        activity: TrackCommand,
    },
    /// Show today's footprint
    Today,
    /// Show daily totals grouped by week
    History,
    /// List every logged activity
    Activities,
    /// Show dashboard statistics (default)
    Stats,
    /// Show the community leaderboard
    Leaderboard,
    /// List community eco actions
    Actions,
    /// Join a community eco action
    Join { id: u32 },
    /// Delete all logged activities and daily totals
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(clap::Subcommand)]
enum TrackCommand {
    /// Travel (usage: track transport --mode car --distance 12)
    Transport {
        /// walking, bike, bus or car
        #[arg(long)]
        mode: String,
        /// Distance in km
        #[arg(long, allow_hyphen_values = true)]
        distance: String,
    },
    /// Electricity usage for the day
    Electricity {
        /// low, medium or high
        #[arg(long)]
        usage: String,
    },
    /// Diet for the day
    Food {
        /// vegan, vegetarian, mixed or meat
        #[arg(long)]
        diet: String,
    },
}

impl From<TrackCommand> for Activity {
    fn from(cmd: TrackCommand) -> Self {
        match cmd {
            TrackCommand::Transport { mode, distance } => Activity::transport(mode, distance),
            TrackCommand::Electricity { usage } => Activity::electricity(usage),
            TrackCommand::Food { diet } => Activity::food(diet),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Env vars can also be set externally
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.data_dir)?;
    debug!(daily_target_kg = config.daily_target_kg, "loaded configuration");

    let store = FileKeyValueStore::new(Some(config.data_dir.clone()))?;
    debug!(data_dir = %store.base_dir().display(), "opened data store");
    let tracking = TrackingService::new(
        StoreActivityRepository::new(&store),
        DailyFootprintService::new(StoreDailyFootprintRepository::new(&store)),
        config.factors.clone(),
    );
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Track { activity }) => {
            let outcome = tracking.track(activity.into(), today)?;
            println!("Activity tracked! 🌱");
            println!("  Carbon footprint: {:.2} kg CO₂", outcome.carbon_kg);
            println!("  Today's total:    {:.2} kg CO₂", outcome.day_total_kg);
        }
        Some(Commands::Today) => {
            let total = tracking.daily().total_for(today)?;
            println!("{}: {:.2} kg CO₂", today.format("%Y-%m-%d"), total);
        }
        Some(Commands::History) => {
            let usecase = DashboardUseCase::new(tracking.activities(), tracking.daily());
            history::show_history(usecase.weekly_history()?);
        }
        Some(Commands::Activities) => {
            history::show_activities(tracking.list_activities()?);
        }
        Some(Commands::Leaderboard) => {
            community::show_leaderboard(&seed_members());
        }
        Some(Commands::Actions) => {
            let service = EcoActionService::new(StoreJoinedActionRepository::new(&store));
            community::show_actions(service.list()?);
        }
        Some(Commands::Join { id }) => {
            let service = EcoActionService::new(StoreJoinedActionRepository::new(&store));
            let view = service.join(id)?;
            println!("Successfully joined! 🎉");
            println!("  {} on {} at {}", view.action.title, view.action.date.format("%Y-%m-%d"), view.action.location);
        }
        Some(Commands::Reset { yes }) => {
            if !yes {
                println!("This deletes all activities and daily totals. Re-run with --yes to confirm.");
                return Ok(());
            }
            tracking.reset()?;
            info!(data_dir = %store.base_dir().display(), "reset tracking data");
            println!("All tracking data cleared.");
        }
        Some(Commands::Stats) | None => {
            let usecase = DashboardUseCase::new(tracking.activities(), tracking.daily())
                .with_daily_target(config.daily_target_kg);
            stats::show_summary(&usecase.summary(today)?);
        }
    }
    Ok(())
}
