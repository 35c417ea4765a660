// src/shared.rs

use crate::store::{SelectionChange, StockStore, SubscriptionId};
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// One store per UI session, handed to every component that needs it.
/// Cloning the handle shares the same state.
///
/// Listeners run while the write lock is held; they must not call back
/// into the handle.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<StockStore>>,
}

impl SharedStore {
    pub fn new(store: StockStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Read access for rendering; hold the guard only for the frame.
    pub fn read(&self) -> RwLockReadGuard<'_, StockStore> {
        self.inner.read()
    }

    pub fn select(&self, symbol: &str) {
        self.inner.write().select(symbol);
    }

    pub fn try_select(&self, symbol: &str) -> crate::errors::Result<()> {
        self.inner.write().try_select(symbol)
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SelectionChange) + Send + Sync + 'static,
    {
        self.inner.write().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.write().unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::thread;

    #[test]
    fn clones_see_the_same_selection() {
        let a = SharedStore::new(StockStore::new());
        let b = a.clone();
        b.select("META");
        assert_eq!(a.read().selected_symbol(), "META");
        assert_eq!(a.read().selected_stock().unwrap().name, "Facebook");
    }

    #[test]
    fn listener_sees_changes_from_other_threads() {
        let shared = SharedStore::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        shared.subscribe(move |c| sink.lock().push(c.current.clone()));

        let worker = shared.clone();
        thread::spawn(move || worker.select("AMZN")).join().unwrap();

        assert_eq!(*seen.lock(), vec!["AMZN".to_string()]);
        assert!(shared.try_select("NOPE").is_err());
        assert_eq!(shared.read().selected_symbol(), "AMZN");
    }
}
