//! Generic CRUD access to a backend collection.
//!
//! Every domain page repeats the same protocol: fetch the full collection,
//! submit creates/updates/deletes, and fold each server-confirmed result back
//! into the local list. [`ResourceClient`] is that protocol written once,
//! parameterized over the [`Resource`] type; the reconciliation helpers are
//! the pure half, shared with the UI layer.
//!
//! Local state is only ever changed from a successful server response — a
//! failed mutation leaves the collection exactly as it was.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::Api;
use crate::error::ApiError;
use crate::models::commerce::{Expenditure, Sale};
use crate::models::inventory::{Consumable, Tool};
use crate::models::livestock::Livestock;
use crate::models::produce::ProduceRecord;
use crate::models::workforce::{Kibarua, Worker};

/// A backend collection entry: has a REST endpoint and a server-assigned id.
pub trait Resource: DeserializeOwned + Clone + PartialEq + 'static {
    /// Collection path relative to the API base, ending in a slash.
    const ENDPOINT: &'static str;

    fn id(&self) -> &str;
}

macro_rules! resource {
    ($type:ty, $endpoint:literal) => {
        impl Resource for $type {
            const ENDPOINT: &'static str = $endpoint;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

resource!(Livestock, "livestock/");
resource!(ProduceRecord, "produce/records/");
resource!(Tool, "tools/");
resource!(Consumable, "consumables/");
resource!(Worker, "workers/");
resource!(Kibarua, "kibarua/");
resource!(Sale, "sales/");
resource!(Expenditure, "expenditure/");

/// CRUD operations for one resource type. Thin: all session and error
/// concerns live in [`Api`].
#[derive(Clone)]
pub struct ResourceClient<T> {
    api: Api,
    _marker: PhantomData<T>,
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            _marker: PhantomData,
        }
    }

    fn detail_path(id: &str) -> String {
        format!("{}{}/", T::ENDPOINT, id)
    }

    /// Fetch the whole collection.
    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        self.api.get(T::ENDPOINT).await
    }

    /// Submit a new entity; the returned value carries the assigned id.
    pub async fn create<F: Serialize>(&self, fields: &F) -> Result<T, ApiError> {
        self.api.post(T::ENDPOINT, fields).await
    }

    /// Full update. The backend's copy is returned and must replace the
    /// local one (server-computed fields may differ from what was sent).
    pub async fn update<F: Serialize>(&self, id: &str, fields: &F) -> Result<T, ApiError> {
        self.api.put(&Self::detail_path(id), fields).await
    }

    /// Partial update.
    pub async fn patch<F: Serialize>(&self, id: &str, fields: &F) -> Result<T, ApiError> {
        self.api.patch(&Self::detail_path(id), fields).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&Self::detail_path(id)).await
    }
}

/// Swap in the server-confirmed version of an entity. Exactly the entity
/// whose id matches is replaced; order and everything else stay put.
/// Returns false when no entity matched (it was removed meanwhile).
pub fn replace_by_id<T: Resource>(items: &mut [T], item: T) -> bool {
    match items.iter_mut().find(|existing| existing.id() == item.id()) {
        Some(existing) => {
            *existing = item;
            true
        }
        None => false,
    }
}

/// Drop the entity with the given id, if present.
pub fn remove_by_id<T: Resource>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|existing| existing.id() != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::livestock::{LivestockCategory, LivestockStatus, Sex, Species};

    fn animal(id: &str, tag: &str) -> Livestock {
        Livestock {
            id: id.to_string(),
            tag_id: tag.to_string(),
            name: String::new(),
            species: Species::Cattle,
            category: LivestockCategory::Cow,
            breed: String::new(),
            sex: Sex::Female,
            quantity: 1,
            dob: None,
            purchase_date: None,
            purchase_price: None,
            status: LivestockStatus::Active,
            current_weight: None,
            photo: None,
            notes: String::new(),
        }
    }

    #[test]
    fn test_replace_swaps_exactly_one() {
        let mut herd = vec![animal("1", "C001"), animal("2", "C002"), animal("3", "C003")];
        let untouched = (herd[0].clone(), herd[2].clone());

        let mut updated = animal("2", "C002");
        updated.quantity = 5;
        assert!(replace_by_id(&mut herd, updated.clone()));

        assert_eq!(herd.len(), 3);
        assert_eq!(herd[1], updated);
        assert_eq!((herd[0].clone(), herd[2].clone()), untouched);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut herd = vec![animal("1", "C001")];
        let before = herd.clone();
        assert!(!replace_by_id(&mut herd, animal("9", "C009")));
        assert_eq!(herd, before);
    }

    #[test]
    fn test_remove_drops_exactly_one() {
        let mut herd = vec![animal("1", "C001"), animal("2", "C002")];
        assert!(remove_by_id(&mut herd, "1"));
        assert_eq!(herd.len(), 1);
        assert_eq!(herd[0].id, "2");
    }

    #[test]
    fn test_remove_unknown_id_leaves_order_intact() {
        let mut herd = vec![animal("2", "C002"), animal("1", "C001")];
        let before = herd.clone();
        assert!(!remove_by_id(&mut herd, "9"));
        assert_eq!(herd, before);
    }

    #[test]
    fn test_detail_path_has_trailing_slash() {
        assert_eq!(ResourceClient::<Livestock>::detail_path("42"), "livestock/42/");
        assert_eq!(
            ResourceClient::<ProduceRecord>::detail_path("a1"),
            "produce/records/a1/"
        );
    }
}
