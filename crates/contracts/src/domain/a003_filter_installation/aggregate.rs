use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::InstallationStatus;
use crate::shared::filter_state::{keys, FilterField};

pub const LIST_ROUTE: &str = "/installations";
pub const API_PATH: &str = "/api/installations";
/// Карточка установки по QR-коду: `/installations/qr/{code}`
pub const QR_ROUTE_PREFIX: &str = "/installations/qr";

pub const FILTERS: &[FilterField] = &[
    FilterField::new(keys::SEARCH),
    FilterField::new(keys::STATUS),
    FilterField::new(keys::STORE_ID),
    FilterField::new(keys::DATE_FROM),
    FilterField::new(keys::DATE_TO),
    FilterField::with_default(keys::SORT_BY, "next_service_on"),
    FilterField::new(keys::SORT_DIRECTION),
];

pub const SORT_FIELDS: &[&str] = &["qr_code", "store_name", "installed_at", "next_service_on"];

/// Фильтр, установленный в торговой точке и помеченный QR-кодом
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterInstallationDto {
    pub id: i64,
    pub qr_code: String,
    pub store_id: i64,
    pub store_name: String,
    pub filter_model: String,
    pub status: InstallationStatus,
    pub installed_at: NaiveDate,
    pub next_service_on: NaiveDate,
}

impl FilterInstallationDto {
    /// Заглушка для незарегистрированного QR-кода
    pub fn placeholder(qr_code: &str) -> Self {
        Self {
            id: 0,
            qr_code: qr_code.to_string(),
            store_id: 0,
            store_name: String::new(),
            filter_model: String::new(),
            status: InstallationStatus::Removed,
            installed_at: NaiveDate::default(),
            next_service_on: NaiveDate::default(),
        }
    }
}
