// jersey_orders/src/core/context_data.rs

//! `ContextData<T>`: the lockable handle that pipeline steps and sessions share.
//!
//! Two kinds of state live behind it:
//!  - `IntakeCtxData`, created per submission and passed by clone to every
//!    step handler of the intake pipeline;
//!  - `Session`, created once per client and handed out by the
//!    `SessionRegistry` to each HTTP request for that client.
//!
//! Locks come from `parking_lot`. They never poison, so `read`/`write` return
//! guards directly. They also block, so a guard must be released before the
//! holder yields to an executor.

use parking_lot::{MappedRwLockReadGuard, MappedRwLockWriteGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Reference-counted, read/write-locked value. `clone()` is a new handle to
/// the same value, never a copy of it.
#[derive(Debug)]
pub struct ContextData<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> ContextData<T> {
  pub fn new(data: T) -> Self {
    ContextData(Arc::new(RwLock::new(data)))
  }

  /// Shared access. Blocks while a writer holds the lock.
  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  /// Exclusive access. Blocks until all readers and writers are gone.
  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }

  /// Non-blocking read; `None` while a writer holds the lock. The session
  /// sweep uses this to leave in-flight sessions alone.
  pub fn try_read(&self) -> Option<RwLockReadGuard<'_, T>> {
    self.0.try_read()
  }

  pub fn try_write(&self) -> Option<RwLockWriteGuard<'_, T>> {
    self.0.try_write()
  }

  /// Read guard narrowed to one field, e.g. `session.map_read(|s| &s.store)`.
  pub fn map_read<F, U: ?Sized>(&self, f: F) -> MappedRwLockReadGuard<'_, U>
  where
    F: FnOnce(&T) -> &U,
  {
    RwLockReadGuard::map(self.read(), f)
  }

  /// Write guard narrowed to one field, e.g. `session.map_write(|s| &mut s.store)`.
  pub fn map_write<F, U: ?Sized>(&self, f: F) -> MappedRwLockWriteGuard<'_, U>
  where
    F: FnOnce(&mut T) -> &mut U,
  {
    RwLockWriteGuard::map(self.write(), f)
  }

  /// True when both handles point at the same underlying data.
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }

  /// Number of live handles, the registry's included.
  pub fn handle_count(&self) -> usize {
    Arc::strong_count(&self.0)
  }
}

impl<T: Send + Sync + 'static> Clone for ContextData<T> {
  fn clone(&self) -> Self {
    ContextData(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for ContextData<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}
