use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::StoreStatus;
use crate::shared::filter_state::{keys, FilterField};

pub const LIST_ROUTE: &str = "/stores";
pub const API_PATH: &str = "/api/stores";

pub const FILTERS: &[FilterField] = &[
    FilterField::new(keys::SEARCH),
    FilterField::new(keys::STATUS),
    FilterField::new(keys::COMPANY_ID),
    FilterField::new(keys::SORT_BY),
    FilterField::new(keys::SORT_DIRECTION),
];

/// Сортировка сервера, когда `sort_by` не задан
pub const DEFAULT_SORT: &str = "name";

pub const SORT_FIELDS: &[&str] = &["code", "name", "company_name", "created_at"];

/// Торговая точка (магазин), где установлены фильтры
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub company_id: i64,
    pub company_name: String,
    pub address: String,
    pub status: StoreStatus,
    pub created_at: NaiveDate,
}
