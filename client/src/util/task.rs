//! Async work bound to a component's lifetime.
//!
//! `spawn_local` futures outlive the component that started them. A
//! [`ScopedTask`] holds the abort handle of at most one such future and aborts
//! it when the owning component is cleaned up, dropping any pending timer with
//! it. On the server nothing is spawned.

#[cfg(feature = "hydrate")]
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[cfg(feature = "hydrate")]
use futures::future::{AbortHandle, Abortable};

#[derive(Clone, Default)]
pub struct ScopedTask {
    #[cfg(feature = "hydrate")]
    slot: Arc<Mutex<Option<AbortHandle>>>,
}

impl ScopedTask {
    /// Create a task slot that is aborted when the current reactive owner is
    /// cleaned up. Call during component setup.
    pub fn new() -> Self {
        let task = Self::default();
        #[cfg(feature = "hydrate")]
        {
            let slot = Arc::clone(&task.slot);
            leptos::prelude::on_cleanup(move || abort_slot(&slot));
        }
        task
    }

    /// Spawn `fut`, aborting whatever this slot was running before.
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let (handle, registration) = AbortHandle::new_pair();
            if let Some(previous) = lock(&self.slot).replace(handle) {
                previous.abort();
            }
            leptos::task::spawn_local(async move {
                let _ = Abortable::new(fut, registration).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        drop(fut);
    }
}

#[cfg(feature = "hydrate")]
fn lock(slot: &Mutex<Option<AbortHandle>>) -> MutexGuard<'_, Option<AbortHandle>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(feature = "hydrate")]
fn abort_slot(slot: &Mutex<Option<AbortHandle>>) {
    if let Some(handle) = lock(slot).take() {
        handle.abort();
    }
}
