pub mod adjust;
pub mod goal;
pub mod init;
pub mod pause;
pub mod phase;
pub mod resume;
pub mod start;
pub mod status;
pub mod stop;
pub mod watch;

use crate::libs::config::Config;
use crate::libs::storage::Storage;
use crate::libs::timer::Timer;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start tracking an activity")]
    Start(start::StartArgs),
    #[command(about = "Pause the running session")]
    Pause,
    #[command(about = "Resume the paused session")]
    Resume,
    #[command(about = "Stop the session and record an entry")]
    Stop(stop::StopArgs),
    #[command(about = "Show the current session and recorded entries")]
    Status(status::StatusArgs),
    #[command(about = "Correct the running session's start time")]
    Adjust(adjust::AdjustArgs),
    #[command(about = "Switch between work and break phases")]
    Phase,
    #[command(about = "Manage goals and show progress")]
    Goal(goal::GoalArgs),
    #[command(about = "Run the safety monitor for the active session")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start(args) => start::cmd(args).await,
            Commands::Pause => pause::cmd().await,
            Commands::Resume => resume::cmd().await,
            Commands::Stop(args) => stop::cmd(args).await,
            Commands::Status(args) => status::cmd(args).await,
            Commands::Adjust(args) => adjust::cmd(args).await,
            Commands::Phase => phase::cmd().await,
            Commands::Goal(args) => goal::cmd(args).await,
            Commands::Watch => watch::cmd().await,
        }
    }
}

/// Builds the timer coordinator from the saved configuration, restoring
/// any persisted session. Loading heals a session left over from an
/// earlier day before the command sees it.
pub(crate) async fn load_timer() -> Result<Timer> {
    let config = Config::read()?;
    let timer_config = config.timer.clone().unwrap_or_default();
    let storage = Storage::new(&config)?;
    Timer::load(timer_config, storage).await
}
