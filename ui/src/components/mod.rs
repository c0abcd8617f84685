//! Common components shared by every page.

mod modal;
pub use modal::Modal;

mod spinner;
pub use spinner::Spinner;
