use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::{
    cache::ResponseCache,
    config::Config,
    error::AppResult,
    middleware::SessionId,
    models::{UiEvent, ViewState},
    services::{ApiClient, MovieCatalog},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: MovieCatalog,
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Sessions untouched for this long are forgotten
pub const SESSION_IDLE_TIMEOUT_SECS: i64 = 2 * 60 * 60;

/// Inner state that can be modified
pub struct AppStateInner {
    /// Browser sessions whose view differs from the default one
    pub sessions: HashMap<SessionId, SessionEntry>,
}

pub struct SessionEntry {
    pub view_state: ViewState,
    pub last_seen: DateTime<Utc>,
}

impl AppState {
    /// Creates state around an existing catalog, with no sessions yet
    pub fn new(catalog: MovieCatalog) -> Self {
        Self {
            catalog,
            inner: Arc::new(RwLock::new(AppStateInner {
                sessions: HashMap::new(),
            })),
        }
    }

    /// Wires an API client for `config` on top of `cache`
    pub fn from_config(config: &Config, cache: ResponseCache) -> AppResult<Self> {
        let client = ApiClient::new(config.api_base_url.clone(), cache)?;
        Ok(Self::new(MovieCatalog::new(Arc::new(client))))
    }

    /// Current view state of `session`; unknown sessions start on Home
    pub async fn view_state(&self, session: SessionId) -> ViewState {
        let mut inner = self.inner.write().await;
        match inner.sessions.get_mut(&session) {
            Some(entry) => {
                entry.last_seen = Utc::now();
                entry.view_state.clone()
            }
            None => ViewState::default(),
        }
    }

    /// Applies `event` to the session's state and stores the result
    pub async fn dispatch(&self, session: SessionId, event: UiEvent) -> ViewState {
        self.dispatch_at(session, event, Utc::now()).await
    }

    pub async fn dispatch_at(
        &self,
        session: SessionId,
        event: UiEvent,
        now: DateTime<Utc>,
    ) -> ViewState {
        let mut inner = self.inner.write().await;
        let current = inner
            .sessions
            .remove(&session)
            .map(|entry| entry.view_state)
            .unwrap_or_default();

        tracing::debug!(session_id = %session, event = ?event, "Applying UI event");
        let next = current.apply(event);

        // A default state renders the same as an unknown session
        if next != ViewState::default() {
            inner.sessions.insert(
                session,
                SessionEntry {
                    view_state: next.clone(),
                    last_seen: now,
                },
            );
        }
        next
    }

    /// Drops sessions idle for longer than [`SESSION_IDLE_TIMEOUT_SECS`]
    pub async fn purge_idle_sessions(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - Duration::seconds(SESSION_IDLE_TIMEOUT_SECS);
        let mut inner = self.inner.write().await;
        let before = inner.sessions.len();
        inner.sessions.retain(|_, entry| entry.last_seen > cutoff);
        before - inner.sessions.len()
    }

    pub async fn session_count(&self) -> usize {
        self.inner.read().await.sessions.len()
    }
}
