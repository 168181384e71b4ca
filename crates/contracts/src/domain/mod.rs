pub mod a001_company;
pub mod a002_store;
pub mod a003_filter_installation;
pub mod a004_maintenance_schedule;
pub mod common;
