//! Remote record store client.
//!
//! Posts session snapshots and completed entries to the configured record
//! server as JSON. The client is deliberately thin: callers treat any
//! non-success status or transport error as a failed write and fall back to
//! the local store without retrying here.

use crate::libs::config::ServerConfig;
use crate::libs::entry::CompletedEntry;
use crate::libs::timer::TimerSession;
use anyhow::{bail, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, StatusCode,
};

const SESSION_URL: &str = "session";
const ENTRIES_URL: &str = "entries";

pub struct RemoteStore {
    client: Client,
    config: ServerConfig,
}

impl RemoteStore {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", self.config.auth_token))?);
        Ok(headers)
    }

    /// Replaces the server-side session snapshot.
    pub async fn put_session(&self, session: &TimerSession) -> Result<StatusCode> {
        let res = self
            .client
            .put(self.url(SESSION_URL))
            .headers(self.headers()?)
            .json(session)
            .send()
            .await?;
        Self::check(res.status())
    }

    /// Removes the server-side session snapshot.
    pub async fn delete_session(&self) -> Result<StatusCode> {
        let res = self
            .client
            .delete(self.url(SESSION_URL))
            .headers(self.headers()?)
            .send()
            .await?;
        Self::check(res.status())
    }

    /// Appends one completed entry on the server.
    pub async fn post_entry(&self, entry: &CompletedEntry) -> Result<StatusCode> {
        let res = self
            .client
            .post(self.url(ENTRIES_URL))
            .headers(self.headers()?)
            .json(entry)
            .send()
            .await?;
        Self::check(res.status())
    }

    fn check(status: StatusCode) -> Result<StatusCode> {
        if !status.is_success() {
            bail!("record server responded with {}", status);
        }
        Ok(status)
    }
}
