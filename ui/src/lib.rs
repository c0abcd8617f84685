//! Shared UI for the farm dashboard: authentication context, the generic
//! collection controller every CRUD page is built on, and the small set of
//! common components.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_api, use_auth, AuthProvider, AuthSession, AuthState};

mod collection;
pub use collection::{use_collection, Collection};

pub mod csv;
pub mod platform;
