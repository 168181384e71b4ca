use contracts::shared::filter_state::keys;
use contracts::shared::{FilterField, FilterState, Paginated, QueryRequest, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{api_url, fetch_json, FetchError};

/// Состояние страницы списка между запросами к API.
///
/// Каждый запрос получает номер; ответ принимается, только если его номер
/// последний. Ответ на более ранний запрос, пришедший позже, отбрасывается.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState<T> {
    page: Option<Paginated<T>>,
    loading: bool,
    error: Option<String>,
    validation: ValidationErrors,
    latest: u64,
}

impl<T> Default for ListingState<T> {
    fn default() -> Self {
        Self {
            page: None,
            loading: false,
            error: None,
            validation: ValidationErrors::default(),
            latest: 0,
        }
    }
}

impl<T> ListingState<T> {
    /// Начать новый запрос; возвращает его номер
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.loading = true;
        self.latest
    }

    /// Применить ответ на запрос `request`. `false` - ответ устарел.
    pub fn settle(&mut self, request: u64, result: Result<Paginated<T>, FetchError>) -> bool {
        if request != self.latest {
            return false;
        }
        match result {
            Ok(page) => {
                self.page = Some(page);
                self.error = None;
                self.validation = ValidationErrors::default();
            }
            Err(FetchError::Validation(errors)) => {
                self.error = None;
                self.validation = errors;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.validation = ValidationErrors::default();
            }
        }
        self.loading = false;
        true
    }

    /// Ошибка действия на странице (например, удаления)
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn page(&self) -> Option<&Paginated<T>> {
        self.page.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn validation(&self) -> &ValidationErrors {
        &self.validation
    }
}

/// Данные страницы списка, перезагружаемые при каждом изменении строки запроса
pub struct ListingHandle<T: Send + Sync + 'static> {
    state: RwSignal<ListingState<T>>,
    reload: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Clone for ListingHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListingHandle<T> {}

impl<T: Clone + Send + Sync + 'static> ListingHandle<T> {
    /// Повторить запрос текущей страницы (после удаления записи и т.п.)
    pub fn refresh(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }

    pub fn page(&self) -> Signal<Option<Paginated<T>>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.page().cloned()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(ListingState::loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    pub fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        self.state.update(|s| s.fail(message));
    }

    /// Первая ошибка валидации сервера по полю фильтра
    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| s.validation().first(field).map(str::to_string))
        })
    }

    pub fn total(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.page().map(|p| p.total).unwrap_or(0)))
    }
}

/// Параметры запроса к API: фильтры в порядке схемы плюс номер страницы
pub fn listing_query<F>(schema: &'static [FilterField], mut lookup: F) -> QueryRequest
where
    F: FnMut(&str) -> Option<String>,
{
    let mut query = FilterState::from_lookup(schema, &mut lookup).to_query();
    if let Some(page) = lookup(keys::PAGE) {
        query.push(keys::PAGE, page);
    }
    query
}

/// Загрузка страницы списка по текущему URL.
///
/// Ответы на устаревшие запросы отбрасываются: побеждает последний.
pub fn use_paginated_listing<T>(
    api_path: &'static str,
    schema: &'static [FilterField],
) -> ListingHandle<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let handle = ListingHandle {
        state: RwSignal::new(ListingState::default()),
        reload: RwSignal::new(0),
    };
    let query_map = use_query_map();

    Effect::new(move |_| {
        handle.reload.track();
        let query = query_map.with(|q| {
            listing_query(schema, |key| q.get(key).map(|v| v.to_string()))
        });
        let url = query.url_for(&api_url(api_path));
        let Some(request) = handle.state.try_update(ListingState::begin) else {
            return;
        };

        spawn_local(async move {
            let result = fetch_json::<Paginated<T>>(&url).await;
            if let Err(e) = &result {
                if !matches!(e, FetchError::Validation(_)) {
                    log::error!("listing {}: {}", url, e);
                }
            }
            let accepted = handle
                .state
                .try_update(|s| s.settle(request, result))
                .unwrap_or(false);
            if !accepted {
                log::debug!("listing {}: response superseded", url);
            }
        });
    });

    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const FIELDS: &[FilterField] = &[
        FilterField::new(keys::SEARCH),
        FilterField::new(keys::STATUS),
        FilterField::with_default(keys::SORT_BY, "scheduled_for"),
    ];

    #[test]
    fn test_listing_query_keeps_schema_order_and_page() {
        let url: HashMap<&str, &str> =
            [("page", "2"), ("status", "done"), ("search", "toko a"), ("utm", "x")].into();
        let query = listing_query(FIELDS, |k| url.get(k).map(|v| v.to_string()));
        assert_eq!(
            query.to_query_string(),
            "search=toko+a&status=done&sort_by=scheduled_for&page=2"
        );
    }

    fn page_of(ids: Vec<u32>) -> Paginated<u32> {
        let total = ids.len();
        Paginated::new(ids, total, 1, 15, "/stores", &QueryRequest::new())
    }

    fn invalid_status() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add(keys::STATUS, "Неизвестный статус");
        errors
    }

    #[test]
    fn test_earlier_response_arriving_late_is_dropped() {
        let mut state = ListingState::default();
        let first = state.begin();
        let second = state.begin();

        assert!(state.settle(second, Ok(page_of(vec![2]))));
        assert!(!state.settle(first, Ok(page_of(vec![1]))));
        assert_eq!(state.page().map(|p| p.data.clone()), Some(vec![2]));
        assert!(!state.loading());
    }

    #[test]
    fn test_superseded_response_keeps_loading() {
        let mut state = ListingState::<u32>::default();
        let first = state.begin();
        state.begin();
        assert!(!state.settle(first, Err(FetchError::Status(500))));
        assert!(state.loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_validation_clears_banner_and_failure_clears_field_errors() {
        let mut state = ListingState::<u32>::default();
        let request = state.begin();
        state.settle(request, Err(FetchError::Network("offline".into())));
        assert!(state.error().is_some());

        let request = state.begin();
        state.settle(request, Err(FetchError::Validation(invalid_status())));
        assert_eq!(state.error(), None);
        assert!(state.validation().first(keys::STATUS).is_some());

        let request = state.begin();
        state.settle(request, Err(FetchError::Status(502)));
        assert!(state.error().is_some());
        assert!(state.validation().is_empty());

        let request = state.begin();
        state.settle(request, Ok(page_of(vec![7])));
        assert_eq!(state.error(), None);
        assert!(state.validation().is_empty());
        assert_eq!(state.page().map(|p| p.total), Some(1));
    }

    #[test]
    fn test_listing_query_skips_empty_page() {
        let query = listing_query(FIELDS, |k| (k == keys::PAGE).then(String::new));
        assert_eq!(query.to_query_string(), "sort_by=scheduled_for");
    }
}
