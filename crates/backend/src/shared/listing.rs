//! Разбор параметров списка: фильтры, сортировка, страница.
//!
//! Значения фильтров приходят в строке запроса в том виде, в каком их
//! отправил синхронизатор на клиенте. Пустое значение = фильтр не задан.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use contracts::shared::filter_state::keys;
use contracts::shared::{FilterField, FilterState, Paginated, ValidationErrors};

use crate::shared::config::ListingConfig;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Описание списка одного ресурса
#[derive(Clone, Copy)]
pub struct ListingSchema {
    /// Маршрут страницы UI; из него строятся ссылки пагинации
    pub route: &'static str,
    pub filters: &'static [FilterField],
    pub sort_fields: &'static [&'static str],
    /// Проверка кода статуса, если у ресурса есть фильтр по статусу
    pub is_status: Option<fn(&str) -> bool>,
}

/// Проверенные параметры списка
#[derive(Debug, Clone)]
pub struct ListingRequest {
    pub route: &'static str,
    /// Фильтры как их прислал клиент; по ним строятся ссылки пагинации
    pub filters: FilterState,
    /// Поисковая строка в нижнем регистре
    pub search: Option<String>,
    pub status: Option<String>,
    pub company_id: Option<i64>,
    pub store_id: Option<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sort_field: Option<&'static str>,
    pub descending: bool,
    pub page: usize,
    pub per_page: usize,
    /// `per_page` задан явно и должен сохраняться в ссылках
    explicit_per_page: bool,
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

fn parse_date(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<NaiveDate> {
    let value = non_empty(value)?;
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, "Некорректная дата, ожидается формат ГГГГ-ММ-ДД");
            None
        }
    }
}

fn parse_id(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<i64> {
    let value = non_empty(value)?;
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Некорректный идентификатор");
            None
        }
    }
}

impl ListingRequest {
    /// Разобрать и проверить параметры. Ключи вне схемы ресурса игнорируются.
    pub fn parse(
        schema: &ListingSchema,
        params: &HashMap<String, String>,
        limits: ListingConfig,
    ) -> Result<Self, ValidationErrors> {
        let filters = FilterState::from_lookup(schema.filters, |key| params.get(key).cloned());
        let mut errors = ValidationErrors::new();

        let search = non_empty(filters.value(keys::SEARCH)).map(str::to_lowercase);

        let status = match (non_empty(filters.value(keys::STATUS)), schema.is_status) {
            (Some(code), Some(is_status)) if !is_status(code) => {
                errors.add(keys::STATUS, "Неизвестный статус");
                None
            }
            (code, _) => code.map(str::to_string),
        };

        let company_id = parse_id(&mut errors, keys::COMPANY_ID, filters.value(keys::COMPANY_ID));
        let store_id = parse_id(&mut errors, keys::STORE_ID, filters.value(keys::STORE_ID));

        let date_from = parse_date(&mut errors, keys::DATE_FROM, filters.value(keys::DATE_FROM));
        let date_to = parse_date(&mut errors, keys::DATE_TO, filters.value(keys::DATE_TO));
        if let (Some(from), Some(to)) = (date_from, date_to) {
            if from > to {
                errors.add(keys::DATE_TO, "Дата окончания раньше даты начала");
            }
        }

        let sort_field = match non_empty(filters.value(keys::SORT_BY)) {
            None => None,
            Some(field) => match schema.sort_fields.iter().find(|f| **f == field) {
                Some(known) => Some(*known),
                None => {
                    errors.add(keys::SORT_BY, "Недопустимое поле сортировки");
                    None
                }
            },
        };

        let descending = match non_empty(filters.value(keys::SORT_DIRECTION)) {
            None | Some("asc") => false,
            Some("desc") => true,
            Some(_) => {
                errors.add(keys::SORT_DIRECTION, "Направление сортировки: asc или desc");
                false
            }
        };

        // номер страницы не валидируется: мусор означает первую страницу
        let page = params
            .get(keys::PAGE)
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1);

        let requested_per_page = params
            .get(keys::PER_PAGE)
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p > 0);
        let per_page = requested_per_page
            .unwrap_or(limits.per_page)
            .min(limits.max_per_page);

        errors.into_result()?;

        Ok(Self {
            route: schema.route,
            search,
            status,
            company_id,
            store_id,
            date_from,
            date_to,
            sort_field,
            descending,
            page,
            per_page,
            explicit_per_page: requested_per_page.is_some(),
            filters,
        })
    }

    /// Регистронезависимый поиск подстроки хотя бы в одном из полей
    pub fn matches_search(&self, fields: &[&str]) -> bool {
        match &self.search {
            None => true,
            Some(needle) => fields.iter().any(|f| f.to_lowercase().contains(needle)),
        }
    }

    pub fn matches_status(&self, code: &str) -> bool {
        self.status.as_deref().map_or(true, |s| s == code)
    }

    pub fn matches_company(&self, company_id: i64) -> bool {
        self.company_id.map_or(true, |id| id == company_id)
    }

    pub fn matches_store(&self, store_id: i64) -> bool {
        self.store_id.map_or(true, |id| id == store_id)
    }

    /// Диапазон дат включает обе границы
    pub fn in_period(&self, date: NaiveDate) -> bool {
        self.date_from.map_or(true, |from| date >= from)
            && self.date_to.map_or(true, |to| date <= to)
    }

    /// Отсортировать и вырезать текущую страницу.
    ///
    /// `compare` сравнивает по имени поля; без сортировки используется `fallback`.
    /// Сортировка устойчивая, поэтому порядок равных записей не скачет между страницами.
    pub fn paginate<T, F>(&self, mut rows: Vec<T>, fallback: &str, compare: F) -> Paginated<T>
    where
        F: Fn(&T, &T, &str) -> Ordering,
    {
        let field = self.sort_field.unwrap_or(fallback);
        rows.sort_by(|a, b| {
            let ordering = compare(a, b, field);
            if self.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });

        let total = rows.len();
        let last_page = total.div_ceil(self.per_page).max(1);
        let page = self.page.min(last_page);
        let data: Vec<T> = rows
            .into_iter()
            .skip((page - 1) * self.per_page)
            .take(self.per_page)
            .collect();

        let mut query = self.filters.to_query();
        if self.explicit_per_page {
            query.push(keys::PER_PAGE, self.per_page.to_string());
        }
        Paginated::new(data, total, page, self.per_page, self.route, &query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILTERS: &[FilterField] = &[
        FilterField::new(keys::SEARCH),
        FilterField::new(keys::STATUS),
        FilterField::new(keys::STORE_ID),
        FilterField::new(keys::DATE_FROM),
        FilterField::new(keys::DATE_TO),
        FilterField::with_default(keys::SORT_BY, "scheduled_for"),
        FilterField::new(keys::SORT_DIRECTION),
    ];

    fn is_status(code: &str) -> bool {
        matches!(code, "planned" | "done")
    }

    const SCHEMA: ListingSchema = ListingSchema {
        route: "/schedules",
        filters: FILTERS,
        sort_fields: &["scheduled_for", "technician"],
        is_status: Some(is_status),
    };

    const LIMITS: ListingConfig = ListingConfig {
        per_page: 2,
        max_per_page: 5,
    };

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn parse(pairs: &[(&str, &str)]) -> Result<ListingRequest, ValidationErrors> {
        ListingRequest::parse(&SCHEMA, &params(pairs), LIMITS)
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        let req = parse(&[]).unwrap();
        assert_eq!(req.search, None);
        assert_eq!(req.sort_field, Some("scheduled_for"));
        assert!(!req.descending);
        assert_eq!((req.page, req.per_page), (1, 2));
    }

    #[test]
    fn test_reversed_period_rejected_on_date_to() {
        let errors = parse(&[("date_from", "2024-03-01"), ("date_to", "2024-02-01")]).unwrap_err();
        assert!(errors.first("date_to").is_some());
        assert!(errors.first("date_from").is_none());
    }

    #[test]
    fn test_each_bad_field_reported() {
        let errors = parse(&[
            ("date_from", "01.02.2024"),
            ("sort_by", "password"),
            ("sort_direction", "up"),
            ("status", "all"),
            ("store_id", "abc"),
        ])
        .unwrap_err();
        for field in ["date_from", "sort_by", "sort_direction", "status", "store_id"] {
            assert!(errors.first(field).is_some(), "{field} not reported");
        }
        assert!(!errors.message.is_empty());
    }

    #[test]
    fn test_per_page_clamped_and_bad_page_ignored() {
        let req = parse(&[("per_page", "50"), ("page", "x")]).unwrap();
        assert_eq!(req.per_page, 5);
        assert_eq!(req.page, 1);
    }

    #[test]
    fn test_search_case_insensitive() {
        let req = parse(&[("search", "Toko A")]).unwrap();
        assert!(req.matches_search(&["TOKO ABADI"]));
        assert!(!req.matches_search(&["Warung"]));
    }

    #[test]
    fn test_period_inclusive() {
        let req = parse(&[("date_from", "2024-03-01"), ("date_to", "2024-03-31")]).unwrap();
        let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
        assert!(req.in_period(d(3, 1)));
        assert!(req.in_period(d(3, 31)));
        assert!(!req.in_period(d(4, 1)));
    }

    #[test]
    fn test_paginate_links_carry_filters() {
        let req = parse(&[
            ("search", "toko a"),
            ("sort_direction", "desc"),
            ("page", "2"),
        ])
        .unwrap();
        let page = req.paginate(vec![1, 2, 3, 4, 5], "id", |a, b, _| a.cmp(b));
        assert_eq!(page.data, vec![3, 2]);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.last_page, 3);
        assert_eq!(
            page.links[1].url.as_deref(),
            Some("/schedules?search=toko+a&sort_by=scheduled_for&sort_direction=desc")
        );
        assert_eq!(
            page.links.last().and_then(|l| l.url.clone()).as_deref(),
            Some("/schedules?search=toko+a&sort_by=scheduled_for&sort_direction=desc&page=3")
        );
    }

    #[test]
    fn test_page_past_end_clamped() {
        let req = parse(&[("page", "40")]).unwrap();
        let page = req.paginate(vec![1, 2, 3], "id", |a, b, _| a.cmp(b));
        assert_eq!(page.current_page, 2);
        assert_eq!(page.data, vec![3]);
    }
}
