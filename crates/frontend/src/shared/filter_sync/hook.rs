use std::time::Duration;

use contracts::shared::{FilterField, FilterState};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

use super::browser::{GlooDebounceTimer, RouterNavigator};
use super::machine::{FilterSync, SyncTicket};

type BrowserFilterSync = FilterSync<GlooDebounceTimer, RouterNavigator>;

/// Доступ страницы к синхронизатору фильтров
#[derive(Clone, Copy)]
pub struct FilterSyncHandle {
    state: RwSignal<FilterState>,
    machine: StoredValue<Option<BrowserFilterSync>, LocalStorage>,
}

impl FilterSyncHandle {
    pub fn state(&self) -> Signal<FilterState> {
        self.state.into()
    }

    /// Текущее значение поля
    pub fn value(&self, key: &'static str) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.value(key).to_string()))
    }

    /// Количество активных фильтров (для бейджа)
    pub fn active_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(FilterState::active_count))
    }

    pub fn set_field(&self, key: &str, value: impl Into<String>) {
        let value = value.into();
        self.with_machine(|sync| sync.set_field(key, value));
    }

    /// Несколько полей в одном такте - один запрос
    pub fn set_fields(&self, pairs: impl IntoIterator<Item = (&'static str, String)>) {
        let pairs: Vec<_> = pairs.into_iter().collect();
        self.with_machine(|sync| sync.set_fields(pairs));
    }

    pub fn reset(&self) {
        self.with_machine(|sync| sync.reset());
    }

    pub fn flush(&self) {
        self.with_machine(|sync| sync.flush());
    }

    /// Фильтры из URL, изменённого не синхронизатором
    fn adopt(&self, state: FilterState) {
        self.with_machine(|sync| {
            sync.adopt(state);
        });
    }

    fn on_timer_elapsed(&self, ticket: SyncTicket) {
        self.with_machine(|sync| {
            sync.on_timer_elapsed(ticket);
        });
    }

    fn with_machine(&self, f: impl FnOnce(&mut BrowserFilterSync)) {
        let state = self.state;
        self.machine.update_value(|slot| {
            if let Some(sync) = slot.as_mut() {
                f(sync);
                state.set(sync.state().clone());
            }
        });
    }
}

/// Синхронизатор фильтров страницы списка.
///
/// Начальные значения берутся из строки запроса текущего URL,
/// то есть совпадают с теми, по которым сервер построил страницу.
/// Дальше состояние следует за URL: Назад/Вперёд и ссылки на тот же
/// маршрут заменяют фильтры без нового запроса.
pub fn use_filter_sync(
    route: &'static str,
    schema: &'static [FilterField],
    delay: Duration,
) -> FilterSyncHandle {
    let query = use_query_map();
    let location = use_location();
    let url_state = move || {
        query.with(|q| FilterState::from_lookup(schema, |key| q.get(key).map(|v| v.to_string())))
    };
    let initial = untrack(url_state);

    let handle = FilterSyncHandle {
        state: RwSignal::new(initial.clone()),
        machine: StoredValue::new_local(None),
    };

    let timer = GlooDebounceTimer::new(move |ticket| handle.on_timer_elapsed(ticket));
    let navigator = RouterNavigator::new(use_navigate());
    handle
        .machine
        .set_value(Some(FilterSync::new(route, initial, delay, timer, navigator)));

    Effect::new(move |_| {
        let from_url = url_state();
        if location.pathname.with_untracked(|path| path == route) {
            handle.adopt(from_url);
        }
    });

    handle
}
