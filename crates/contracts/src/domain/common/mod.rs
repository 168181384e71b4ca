//! Common types shared by all resources

pub mod select_option;

pub use select_option::SelectOption;
