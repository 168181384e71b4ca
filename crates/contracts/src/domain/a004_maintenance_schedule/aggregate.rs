use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::ScheduleStatus;
use crate::shared::filter_state::{keys, FilterField};

pub const LIST_ROUTE: &str = "/schedules";
pub const API_PATH: &str = "/api/schedules";

pub const FILTERS: &[FilterField] = &[
    FilterField::new(keys::SEARCH),
    FilterField::new(keys::STATUS),
    FilterField::new(keys::STORE_ID),
    FilterField::new(keys::DATE_FROM),
    FilterField::new(keys::DATE_TO),
    FilterField::with_default(keys::SORT_BY, "scheduled_for"),
    FilterField::new(keys::SORT_DIRECTION),
];

pub const SORT_FIELDS: &[&str] = &["scheduled_for", "store_name", "technician", "status"];

/// Плановое обслуживание фильтра
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceScheduleDto {
    pub id: i64,
    pub installation_id: i64,
    pub qr_code: String,
    pub store_id: i64,
    pub store_name: String,
    pub technician: String,
    pub scheduled_for: NaiveDate,
    pub status: ScheduleStatus,
    pub notes: Option<String>,
}
