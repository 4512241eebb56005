// jersey_orders/src/session.rs

//! Per-client session state and the registry that hands it out.
//!
//! Every session owns an independent `OrderStore` and its own "exported"
//! flag. Nothing mutable is shared between sessions: the registry only maps
//! ids to separately locked `ContextData<Session>` handles.

use crate::core::context_data::ContextData;
use crate::error::{OrderError, OrderResult};
use crate::export::{export_csv, CsvExport};
use crate::store::OrderStore;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{event, instrument, Level};
use uuid::Uuid;

pub type SessionId = Uuid;

#[derive(Debug)]
pub struct Session {
  id: SessionId,
  created_at: DateTime<Utc>,
  pub store: OrderStore,
  exported: bool,
  last_active: DateTime<Utc>,
}

impl Session {
  pub fn new(id: SessionId) -> Self {
    let now = Utc::now();
    Self {
      id,
      created_at: now,
      store: OrderStore::new(),
      exported: false,
      last_active: now,
    }
  }

  pub fn id(&self) -> SessionId {
    self.id
  }

  pub fn created_at(&self) -> DateTime<Utc> {
    self.created_at
  }

  /// Last time the session was handed out by the registry.
  pub fn last_active(&self) -> DateTime<Utc> {
    self.last_active
  }

  pub fn touch(&mut self) {
    self.last_active = Utc::now();
  }

  /// Whether this session has already produced an export.
  pub fn exported(&self) -> bool {
    self.exported
  }

  /// Renders the export snapshot and latches the exported flag.
  ///
  /// An empty store has nothing to export. Once the flag is set it stays set
  /// for the rest of the session, so every later call fails with
  /// `AlreadyExported`.
  #[instrument(name = "Session::export_csv", skip_all, fields(session_id = %self.id), err(Display))]
  pub fn export_csv(&mut self) -> OrderResult<CsvExport> {
    if self.store.is_empty() {
      return Err(OrderError::EmptyStore);
    }
    if self.exported {
      return Err(OrderError::AlreadyExported);
    }
    let export = export_csv(&self.store)?;
    self.exported = true;
    Ok(export)
  }
}

/// Session id to session map.
///
/// The map lock is only held while looking up, inserting or removing an
/// entry; work on a session happens under that session's own lock.
///
/// Clients are not required to end their sessions, so the map is bounded by
/// [`SessionRegistry::evict_idle`]: sessions not handed out for longer than
/// the idle timeout are dropped together with their orders.
#[derive(Debug, Default)]
pub struct SessionRegistry {
  sessions: RwLock<HashMap<SessionId, ContextData<Session>>>,
}

impl SessionRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Starts a new, empty session.
  pub fn create(&self) -> (SessionId, ContextData<Session>) {
    let id = Uuid::new_v4();
    let session = ContextData::new(Session::new(id));
    self.sessions.write().insert(id, session.clone());
    event!(Level::INFO, session_id = %id, "Session created.");
    (id, session)
  }

  /// Looks up a session and marks it active.
  pub fn get(&self, id: &SessionId) -> Option<ContextData<Session>> {
    let session = self.sessions.read().get(id).cloned()?;
    session.write().touch();
    Some(session)
  }

  /// Drops every session idle for longer than `max_idle`. Returns how many went.
  pub fn evict_idle(&self, max_idle: Duration) -> usize {
    self.evict_idle_at(Utc::now(), max_idle)
  }

  /// [`evict_idle`](Self::evict_idle) against an explicit clock reading.
  /// A session whose lock is currently held is in use and always kept.
  #[instrument(name = "SessionRegistry::evict_idle", skip(self))]
  pub fn evict_idle_at(&self, now: DateTime<Utc>, max_idle: Duration) -> usize {
    let mut sessions = self.sessions.write();
    let before = sessions.len();
    sessions.retain(|_, session| match session.try_read() {
      Some(guard) => now.signed_duration_since(guard.last_active()) <= max_idle,
      None => true,
    });
    let evicted = before - sessions.len();
    if evicted > 0 {
      event!(Level::INFO, evicted, remaining = sessions.len(), "Idle sessions evicted.");
    }
    evicted
  }

  /// Ends a session; its orders are dropped with it.
  pub fn remove(&self, id: &SessionId) -> Option<ContextData<Session>> {
    let removed = self.sessions.write().remove(id);
    if let Some(session) = &removed {
      // Requests still holding a handle finish against the detached session.
      event!(Level::INFO, session_id = %id, open_handles = session.handle_count() - 1, "Session ended.");
    }
    removed
  }

  pub fn len(&self) -> usize {
    self.sessions.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.sessions.read().is_empty()
  }
}
