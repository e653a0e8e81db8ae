//! Application configuration initialization command.
//!
//! Provides the interactive setup wizard for first-time use: timer engine
//! thresholds and the optional remote record server.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::default().save()?;
        return Ok(());
    }

    // Run the interactive configuration wizard and persist the result
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
