pub mod installation_status;
pub mod schedule_status;
pub mod store_status;

pub use installation_status::InstallationStatus;
pub use schedule_status::ScheduleStatus;
pub use store_status::StoreStatus;
