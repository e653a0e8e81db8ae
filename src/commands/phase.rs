//! Switch the session between work and break phases.

use crate::commands::load_timer;
use crate::libs::messages::Message;
use crate::libs::timer::TimerError;
use crate::{msg_success, msg_warning};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let mut timer = load_timer().await?;

    if timer.session().is_none() {
        msg_warning!(Message::TimerNotRunning);
        return Ok(());
    }

    match timer.switch_phase().await {
        Ok(phase) => msg_success!(Message::PhaseSwitched(phase.label().to_string())),
        Err(err) => match err.downcast_ref::<TimerError>() {
            Some(TimerError::PreconditionFailed) => msg_warning!(Message::CyclingNotEnabled),
            _ => return Err(err),
        },
    }
    Ok(())
}
