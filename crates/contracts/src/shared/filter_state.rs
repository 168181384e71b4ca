//! Состояние фильтров списка (поиск, статусы, диапазоны дат, сортировка).
//!
//! Набор ключей фиксирован для каждой страницы и задаётся статической схемой
//! `&'static [FilterField]`. Пустая строка означает «фильтр не задан»
//! и никогда не попадает в строку запроса.

use std::collections::BTreeMap;

use super::query::QueryRequest;

/// Общие имена полей фильтра
pub mod keys {
    pub const SEARCH: &str = "search";
    pub const STATUS: &str = "status";
    pub const COMPANY_ID: &str = "company_id";
    pub const STORE_ID: &str = "store_id";
    pub const DATE_FROM: &str = "date_from";
    pub const DATE_TO: &str = "date_to";
    pub const SORT_BY: &str = "sort_by";
    pub const SORT_DIRECTION: &str = "sort_direction";
    /// Номер страницы; не входит в схемы фильтров
    pub const PAGE: &str = "page";
    pub const PER_PAGE: &str = "per_page";
}

/// Описание одного поля фильтра
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    pub key: &'static str,
    /// Значение после `reset()`; пусто у всех полей, кроме сортировки по умолчанию
    pub default: &'static str,
}

impl FilterField {
    pub const fn new(key: &'static str) -> Self {
        Self { key, default: "" }
    }

    pub const fn with_default(key: &'static str, default: &'static str) -> Self {
        Self { key, default }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterStateError {
    #[error("unknown filter field `{0}`")]
    UnknownField(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    schema: &'static [FilterField],
    values: BTreeMap<&'static str, String>,
}

impl FilterState {
    /// Все поля в значениях по умолчанию
    pub fn new(schema: &'static [FilterField]) -> Self {
        let values = schema
            .iter()
            .map(|f| (f.key, f.default.to_string()))
            .collect();
        Self { schema, values }
    }

    /// Начальное состояние из значений, с которыми сервер построил текущую страницу.
    /// Отсутствующий ключ получает значение по умолчанию.
    pub fn from_lookup<F>(schema: &'static [FilterField], mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let values = schema
            .iter()
            .map(|f| {
                let value = lookup(f.key).unwrap_or_else(|| f.default.to_string());
                (f.key, value)
            })
            .collect();
        Self { schema, values }
    }

    pub fn from_query(schema: &'static [FilterField], query: &QueryRequest) -> Self {
        Self::from_lookup(schema, |key| query.get(key).map(str::to_string))
    }

    pub fn schema(&self) -> &'static [FilterField] {
        self.schema
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Значение поля; пустая строка для незаданного или неизвестного ключа
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Установить значение. `Ok(true)` - значение изменилось.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<bool, FilterStateError> {
        let slot = self
            .values
            .get_mut(key)
            .ok_or_else(|| FilterStateError::UnknownField(key.to_string()))?;
        let value = value.into();
        if *slot == value {
            return Ok(false);
        }
        *slot = value;
        Ok(true)
    }

    pub fn reset(&mut self) {
        for field in self.schema {
            if let Some(slot) = self.values.get_mut(field.key) {
                *slot = field.default.to_string();
            }
        }
    }

    /// Непустые поля в порядке схемы
    pub fn to_query(&self) -> QueryRequest {
        self.schema
            .iter()
            .map(|f| (f.key, self.value(f.key)))
            .collect()
    }

    /// Количество полей с непустым значением, отличным от значения по умолчанию
    pub fn active_count(&self) -> usize {
        self.schema
            .iter()
            .filter(|f| {
                let v = self.value(f.key);
                !v.is_empty() && v != f.default
            })
            .count()
    }

    pub fn is_default(&self) -> bool {
        self.schema.iter().all(|f| self.value(f.key) == f.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FilterField] = &[
        FilterField::new("search"),
        FilterField::new("status"),
        FilterField::new("store_id"),
        FilterField::with_default("sort_by", "next_service_on"),
        FilterField::new("sort_direction"),
    ];

    #[test]
    fn test_new_uses_defaults() {
        let state = FilterState::new(FIELDS);
        assert_eq!(state.value("search"), "");
        assert_eq!(state.value("sort_by"), "next_service_on");
        assert!(state.is_default());
        assert_eq!(state.to_query().to_query_string(), "sort_by=next_service_on");
    }

    #[test]
    fn test_empty_fields_omitted() {
        let mut state = FilterState::new(FIELDS);
        state.set("search", "").unwrap();
        state.set("status", "active").unwrap();
        let query = state.to_query();
        assert_eq!(query.get("search"), None);
        assert_eq!(query.get("status"), Some("active"));
        // round-trip не возвращает пустой ключ
        let reparsed = QueryRequest::parse(&query.to_query_string());
        assert_eq!(reparsed.get("search"), None);
        assert_eq!(reparsed, query);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let mut a = FilterState::new(FIELDS);
        a.set("store_id", "3").unwrap();
        a.set("status", "active").unwrap();
        let mut b = FilterState::new(FIELDS);
        b.set("status", "active").unwrap();
        b.set("store_id", "3").unwrap();
        assert_eq!(a.to_query(), b.to_query());
        assert_eq!(
            a.to_query().to_query_string(),
            "status=active&store_id=3&sort_by=next_service_on"
        );
    }

    #[test]
    fn test_set_reports_change() {
        let mut state = FilterState::new(FIELDS);
        assert_eq!(state.set("status", "active"), Ok(true));
        assert_eq!(state.set("status", "active"), Ok(false));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut state = FilterState::new(FIELDS);
        assert_eq!(
            state.set("color", "red"),
            Err(FilterStateError::UnknownField("color".into()))
        );
        assert_eq!(state.get("color"), None);
    }

    #[test]
    fn test_from_query_ignores_unknown_keys() {
        let query = QueryRequest::parse("search=foo&page=2&color=red");
        let state = FilterState::from_query(FIELDS, &query);
        assert_eq!(state.value("search"), "foo");
        assert_eq!(state.value("sort_by"), "next_service_on");
        assert_eq!(state.get("page"), None);
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let query = QueryRequest::parse("search=foo&sort_by=installed_at&sort_direction=desc");
        let mut state = FilterState::from_query(FIELDS, &query);
        assert_eq!(state.active_count(), 3);
        state.reset();
        assert!(state.is_default());
        assert_eq!(state.to_query().get("search"), None);
        assert_eq!(state.to_query().len(), 1);
    }
}
