//! Persistence port for session state and completed entries.
//!
//! Writes go to the configured remote record store first and always land in
//! the local SQLite store, which stays authoritative: a failed remote call
//! is reported as a warning and never rolls back a state transition the
//! user already observed. Reads come from the local store only, so a
//! restarted process recovers its session without a network round-trip.

use crate::api::records::RemoteStore;
use crate::db::entries::Entries;
use crate::db::sessions::Sessions;
use crate::libs::config::Config;
use crate::libs::entry::CompletedEntry;
use crate::libs::messages::Message;
use crate::libs::timer::TimerSession;
use crate::{msg_debug, msg_warning};
use anyhow::Result;

/// The storage facade handed to the timer coordinator.
///
/// The timer does not depend on which backend accepted a write; the
/// fallback order (remote, then local) is fixed here.
pub struct Storage {
    remote: Option<RemoteStore>,
    sessions: Sessions,
    entries: Entries,
}

impl Storage {
    /// Opens the local store and, when a server is configured, the remote
    /// record client.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Storage {
            remote: config.server.as_ref().map(RemoteStore::new),
            sessions: Sessions::new()?,
            entries: Entries::new()?,
        })
    }

    /// Local-only store, used by tests and offline operation.
    pub fn local_only() -> Result<Self> {
        Ok(Storage {
            remote: None,
            sessions: Sessions::new()?,
            entries: Entries::new()?,
        })
    }

    /// Loads the at-most-one persisted session.
    pub fn load_session(&self) -> Result<Option<TimerSession>> {
        self.sessions.fetch()
    }

    /// Persists the full session after a transition.
    pub async fn save_session(&self, session: &TimerSession) -> Result<()> {
        if let Some(remote) = &self.remote {
            if let Err(err) = remote.put_session(session).await {
                msg_warning!(Message::RemoteSaveFailed(err.to_string()));
            }
        }
        self.sessions.save(session)
    }

    /// Deletes the persisted session once the timer returns to idle.
    pub async fn clear_session(&self) -> Result<()> {
        if let Some(remote) = &self.remote {
            if let Err(err) = remote.delete_session().await {
                msg_debug!(Message::RemoteSaveFailed(err.to_string()));
            }
        }
        self.sessions.clear()
    }

    /// Appends the one completed entry minted by a stop transition.
    pub async fn append_entry(&self, entry: &CompletedEntry) -> Result<()> {
        if let Some(remote) = &self.remote {
            if let Err(err) = remote.post_entry(entry).await {
                msg_warning!(Message::RemoteEntryFailed(err.to_string()));
            }
        }
        self.entries.insert(entry)
    }

    /// Read access to locally stored entries for status and goal displays.
    pub fn entries(&self) -> &Entries {
        &self.entries
    }
}
