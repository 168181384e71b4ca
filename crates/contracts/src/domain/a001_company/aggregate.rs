use serde::{Deserialize, Serialize};

use crate::shared::filter_state::{keys, FilterField};

pub const LIST_ROUTE: &str = "/companies";
pub const API_PATH: &str = "/api/companies";

/// Поля фильтра списка компаний (порядок = порядок в строке запроса)
pub const FILTERS: &[FilterField] = &[
    FilterField::new(keys::SEARCH),
    FilterField::new(keys::SORT_BY),
    FilterField::new(keys::SORT_DIRECTION),
];

/// Сортировка сервера, когда `sort_by` не задан
pub const DEFAULT_SORT: &str = "name";

pub const SORT_FIELDS: &[&str] = &["code", "name", "city", "stores_count"];

/// Компания-клиент, обслуживающая сеть торговых точек
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub city: String,
    pub phone: Option<String>,
    pub stores_count: usize,
}
