mod layout;
pub use layout::Layout;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod livestock;
pub use livestock::Livestock;

mod produce;
pub use produce::Produce;

mod inventory;
pub use inventory::Inventory;

mod workforce;
pub use workforce::Workforce;

mod commerce;
pub use commerce::Commerce;

mod settings;
pub use settings::Settings;
