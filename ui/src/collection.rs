//! Generic controller for one backend collection.
//!
//! Every CRUD page holds a `Collection<T>`: the in-memory cache of the
//! server's collection, refetched on mount and reconciled in place after
//! each successful mutation. Mutations return their error to the caller so
//! forms can stay open and surface it; the cached list is only ever touched
//! on success.

use api::{remove_by_id, replace_by_id, Api, ApiError, Resource, ResourceClient};
use dioxus::prelude::*;
use serde::Serialize;

pub struct Collection<T: Resource> {
    client: ResourceClient<T>,
    items: Signal<Vec<T>>,
    loading: Signal<bool>,
}

// Manual impl: signals are Copy, the client clone is cheap.
impl<T: Resource> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            items: self.items,
            loading: self.loading,
        }
    }
}

/// Create a collection bound to `T::ENDPOINT` and load it on mount.
pub fn use_collection<T: Resource>() -> Collection<T> {
    let api = use_context::<Api>();
    let items = use_signal(Vec::new);
    let loading = use_signal(|| true);
    let collection = use_hook(|| Collection {
        client: ResourceClient::new(api),
        items,
        loading,
    });

    let handle = collection.clone();
    use_future(move || {
        let collection = handle.clone();
        async move {
            collection.load().await;
        }
    });

    collection
}

impl<T: Resource> Collection<T> {
    /// Snapshot of the cached items.
    pub fn items(&self) -> Vec<T> {
        (self.items)()
    }

    pub fn loading(&self) -> bool {
        (self.loading)()
    }

    /// Refetch and replace the cache wholesale. A failed load keeps the
    /// previous items and is not fatal to the page; the loading flag clears
    /// either way.
    pub async fn load(&self) {
        let mut items = self.items;
        let mut loading = self.loading;
        loading.set(true);
        match self.client.list().await {
            Ok(fetched) => items.set(fetched),
            Err(err) => tracing::error!("failed to load {}: {err}", T::ENDPOINT),
        }
        loading.set(false);
    }

    /// Submit a new entity; on success the server's copy (with its assigned
    /// id) is appended.
    pub async fn create<F: Serialize>(&self, fields: &F) -> Result<(), ApiError> {
        let created = self
            .client
            .create(fields)
            .await
            .inspect_err(|err| tracing::error!("failed to create in {}: {err}", T::ENDPOINT))?;
        let mut items = self.items;
        items.write().push(created);
        Ok(())
    }

    /// Submit an update; on success the matching cached entity is replaced
    /// by the server's copy, never patched locally.
    pub async fn update<F: Serialize>(&self, id: &str, fields: &F) -> Result<(), ApiError> {
        let updated = self
            .client
            .update(id, fields)
            .await
            .inspect_err(|err| tracing::error!("failed to update in {}: {err}", T::ENDPOINT))?;
        let mut items = self.items;
        replace_by_id(&mut *items.write(), updated);
        Ok(())
    }

    /// Submit a delete; on success the entity leaves the cache. Callers run
    /// their confirm dialog before calling this.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete(id)
            .await
            .inspect_err(|err| tracing::error!("failed to delete from {}: {err}", T::ENDPOINT))?;
        let mut items = self.items;
        remove_by_id(&mut *items.write(), id);
        Ok(())
    }
}
