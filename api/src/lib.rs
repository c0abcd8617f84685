//! Backend client for the farm-management dashboard.
//!
//! Everything the UI needs to talk to the REST backend lives here:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Base-URL request wrapper that injects the session token and intercepts 401s |
//! | [`session`] | Durable token storage ([`SessionStore`] trait, memory + localStorage impls) |
//! | [`models`] | Serde mirrors of the backend serializers, one module per domain |
//! | [`resource`] | Generic CRUD client over any [`Resource`] plus list reconciliation |
//! | [`stats`] | Pure aggregates and filters computed from fetched collections |

pub mod client;
pub mod error;
pub mod models;
pub mod resource;
pub mod session;
pub mod stats;

pub use client::Api;
pub use error::ApiError;
pub use resource::{remove_by_id, replace_by_id, Resource, ResourceClient};
pub use session::{MemoryStore, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use session::LocalStorageStore;

pub use models::commerce::{Expenditure, ExpenditureFields, ExpenseCategory, PaymentStatus, Product, Sale, SaleFields};
pub use models::inventory::{Condition, Consumable, ConsumableFields, Tool, ToolFields};
pub use models::livestock::{Livestock, LivestockCategory, LivestockFields, LivestockStatus, Sex, Species};
pub use models::produce::{ProduceFields, ProduceRecord, ProduceType};
pub use models::user::{AuthResponse, Credentials, Role, User};
pub use models::workforce::{EmploymentType, Kibarua, KibaruaFields, Worker, WorkerFields};

/// Backend base address, fixed at build time. Always ends with a slash.
pub const BASE_URL: &str = match option_env!("FARM_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api/",
};
