//! Manage goal targets and show live progress.
//!
//! Progress always includes the running session when it matches a goal's
//! category, so a target can be watched filling up in real time.

use crate::commands::load_timer;
use crate::db::entries::Entries;
use crate::db::goals::Goals;
use crate::libs::goal::{compute_progress, period_window, GoalTarget, PeriodKind};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand, ValueEnum};

#[derive(Debug, Clone, ValueEnum)]
enum Period {
    Daily,
    Weekly,
}

impl From<Period> for PeriodKind {
    fn from(period: Period) -> Self {
        match period {
            Period::Daily => PeriodKind::Daily,
            Period::Weekly => PeriodKind::Weekly,
        }
    }
}

#[derive(Debug, Subcommand)]
enum GoalCommands {
    /// Create a new goal target
    Set {
        /// Category the goal applies to
        #[arg(long, short)]
        category: String,
        /// Narrow the goal to one subcategory
        #[arg(long, short)]
        subcategory: Option<String>,
        /// Period the target is measured over
        #[arg(long, value_enum, default_value = "daily")]
        period: Period,
        /// Target in minutes per period
        #[arg(long, short)]
        minutes: i64,
    },
    /// Delete a goal by id
    Delete {
        id: i64,
    },
    /// Show progress for all goals (default)
    Show,
}

#[derive(Debug, Args)]
pub struct GoalArgs {
    #[command(subcommand)]
    command: Option<GoalCommands>,
}

pub async fn cmd(args: GoalArgs) -> Result<()> {
    let goals_db = Goals::new()?;

    match args.command.unwrap_or(GoalCommands::Show) {
        GoalCommands::Set {
            category,
            subcategory,
            period,
            minutes,
        } => {
            goals_db.insert(&GoalTarget {
                id: 0,
                category_id: category,
                subcategory_id: subcategory,
                period: period.into(),
                target_minutes: minutes,
            })?;
            msg_success!(Message::GoalCreated);
        }
        GoalCommands::Delete { id } => {
            if goals_db.delete(id)? {
                msg_success!(Message::GoalDeleted);
            } else {
                msg_error!(Message::GoalNotFound(id));
            }
        }
        GoalCommands::Show => {
            let goals = goals_db.fetch_all()?;
            if goals.is_empty() {
                msg_info!(Message::GoalsNotFound);
                return Ok(());
            }

            let timer = load_timer().await?;
            let entries_db = Entries::new()?;
            let now = Local::now().naive_local();

            // One fetch covering the widest window; compute_progress
            // re-filters per goal.
            let (week_start, _) = period_window(PeriodKind::Weekly, now);
            let entries = entries_db.fetch_since(week_start)?;

            let progress: Vec<_> = goals
                .into_iter()
                .map(|goal| {
                    let progress = compute_progress(&goal, &entries, timer.session(), now);
                    (goal, progress)
                })
                .collect();

            crate::msg_print!(Message::GoalsTitle, true);
            View::goals(&progress)?;
        }
    }
    Ok(())
}
