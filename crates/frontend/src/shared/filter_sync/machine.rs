//! Синхронизатор фильтров со строкой запроса.
//!
//! Два состояния: `Idle` и `PendingSync` (взведён таймер debounce).
//! Каждое изменение поля перевзводит единственный таймер; запрос уходит только
//! когда таймер отработал без новых правок. `reset()` отправляет запрос сразу.
//!
//! Таймер и навигация вынесены в трейты, поэтому машина тестируется без
//! реального времени и без браузера.

use std::time::Duration;

use contracts::shared::{FilterState, QueryRequest};

/// Задержка debounce по умолчанию
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Идентификатор взведённого таймера. Сработавший «чужой» билет игнорируется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyncTicket(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    PendingSync(SyncTicket),
}

/// Владелец единственного таймера debounce
pub trait DebounceTimer {
    /// Взвести таймер; по истечении `delay` вызывающая сторона
    /// должна передать `ticket` в `FilterSync::on_timer_elapsed`
    fn arm(&mut self, ticket: SyncTicket, delay: Duration);
    /// Снять взведённый таймер, если он есть
    fn disarm(&mut self);
}

/// Внешний маршрутизатор страниц
pub trait Navigator {
    fn visit(&mut self, request: &VisitRequest);
}

/// Флаги навигации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitOptions {
    /// Не сбрасывать состояние компонентов страницы
    pub preserve_state: bool,
    /// Не прокручивать страницу к началу
    pub preserve_scroll: bool,
    /// Заменить текущую запись истории вместо добавления новой
    pub replace: bool,
}

impl VisitOptions {
    /// Флаги для запросов, вызванных изменением фильтров
    pub const FILTERING: VisitOptions = VisitOptions {
        preserve_state: true,
        preserve_scroll: true,
        replace: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRequest {
    pub route: String,
    pub query: QueryRequest,
    pub options: VisitOptions,
}

impl VisitRequest {
    pub fn url(&self) -> String {
        self.query.url_for(&self.route)
    }
}

pub struct FilterSync<T, N> {
    route: String,
    state: FilterState,
    phase: SyncPhase,
    delay: Duration,
    next_ticket: u64,
    timer: T,
    navigator: N,
    last_request: Option<VisitRequest>,
}

impl<T: DebounceTimer, N: Navigator> FilterSync<T, N> {
    pub fn new(
        route: impl Into<String>,
        state: FilterState,
        delay: Duration,
        timer: T,
        navigator: N,
    ) -> Self {
        Self {
            route: route.into(),
            state,
            phase: SyncPhase::Idle,
            delay,
            next_ticket: 0,
            timer,
            navigator,
            last_request: None,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// Последний отправленный запрос; считается источником истины для URL
    pub fn last_request(&self) -> Option<&VisitRequest> {
        self.last_request.as_ref()
    }

    /// Изменить поле и перевзвести таймер.
    /// Неизвестный ключ пишется в лог и игнорируется.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) {
        if let Err(e) = self.state.set(key, value) {
            log::warn!("filter sync {}: {}", self.route, e);
            return;
        }
        self.schedule();
    }

    /// Изменить несколько полей в одном такте; таймер взводится один раз
    pub fn set_fields<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut touched = false;
        for (key, value) in pairs {
            match self.state.set(key, value) {
                Ok(_) => touched = true,
                Err(e) => log::warn!("filter sync {}: {}", self.route, e),
            }
        }
        if touched {
            self.schedule();
        }
    }

    /// Сбросить все поля и сразу отправить запрос
    pub fn reset(&mut self) {
        if let SyncPhase::PendingSync(_) = self.phase {
            self.timer.disarm();
        }
        self.state.reset();
        self.phase = SyncPhase::Idle;
        self.issue();
    }

    /// Отправить отложенный запрос немедленно (например, по Enter)
    pub fn flush(&mut self) {
        if let SyncPhase::PendingSync(_) = self.phase {
            self.timer.disarm();
            self.phase = SyncPhase::Idle;
            self.issue();
        }
    }

    /// Принять фильтры из URL, изменённого извне (Назад/Вперёд, ссылка).
    ///
    /// Взведённый таймер снимается, запрос не отправляется: сервер уже
    /// строит страницу по этому URL. Отклик на собственный визит, пришедший
    /// при новых несохранённых правках, игнорируется. Возвращает `true`,
    /// если состояние заменено.
    pub fn adopt(&mut self, state: FilterState) -> bool {
        if let SyncPhase::PendingSync(_) = self.phase {
            let own_echo = self
                .last_request
                .as_ref()
                .is_some_and(|r| r.query == state.to_query());
            if own_echo {
                return false;
            }
            self.timer.disarm();
            self.phase = SyncPhase::Idle;
        } else if self.state == state {
            return false;
        }
        log::debug!(
            "filter sync {}: adopt {}",
            self.route,
            state.to_query().to_query_string()
        );
        self.state = state;
        true
    }

    /// Таймер отработал. Возвращает `true`, если был отправлен запрос.
    pub fn on_timer_elapsed(&mut self, ticket: SyncTicket) -> bool {
        match self.phase {
            SyncPhase::PendingSync(current) if current == ticket => {
                self.phase = SyncPhase::Idle;
                self.issue();
                true
            }
            _ => {
                log::debug!("filter sync {}: stale ticket {:?}", self.route, ticket);
                false
            }
        }
    }

    fn schedule(&mut self) {
        if let SyncPhase::PendingSync(_) = self.phase {
            self.timer.disarm();
        }
        self.next_ticket += 1;
        let ticket = SyncTicket(self.next_ticket);
        self.timer.arm(ticket, self.delay);
        self.phase = SyncPhase::PendingSync(ticket);
    }

    fn issue(&mut self) {
        let request = VisitRequest {
            route: self.route.clone(),
            query: self.state.to_query(),
            options: VisitOptions::FILTERING,
        };
        log::debug!("filter sync: visit {}", request.url());
        self.navigator.visit(&request);
        self.last_request = Some(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::FilterField;
    use std::cell::RefCell;
    use std::rc::Rc;

    const FIELDS: &[FilterField] = &[
        FilterField::new("search"),
        FilterField::new("status"),
        FilterField::new("store_id"),
        FilterField::new("date_from"),
        FilterField::new("date_to"),
        FilterField::new("sort_by"),
        FilterField::new("sort_direction"),
    ];

    const SORTED_FIELDS: &[FilterField] = &[
        FilterField::new("search"),
        FilterField::new("status"),
        FilterField::with_default("sort_by", "scheduled_for"),
    ];

    /// Виртуальные часы с одним слотом таймера
    #[derive(Default)]
    struct Clock {
        now: Duration,
        armed: Option<(SyncTicket, Duration)>,
        arm_count: usize,
    }

    #[derive(Clone, Default)]
    struct FakeTimer(Rc<RefCell<Clock>>);

    impl DebounceTimer for FakeTimer {
        fn arm(&mut self, ticket: SyncTicket, delay: Duration) {
            let mut clock = self.0.borrow_mut();
            assert!(clock.armed.is_none(), "second timer armed without disarm");
            let deadline = clock.now + delay;
            clock.armed = Some((ticket, deadline));
            clock.arm_count += 1;
        }

        fn disarm(&mut self) {
            self.0.borrow_mut().armed = None;
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator(Rc<RefCell<Vec<VisitRequest>>>);

    impl Navigator for RecordingNavigator {
        fn visit(&mut self, request: &VisitRequest) {
            self.0.borrow_mut().push(request.clone());
        }
    }

    struct Harness {
        clock: FakeTimer,
        visits: RecordingNavigator,
        sync: FilterSync<FakeTimer, RecordingNavigator>,
    }

    impl Harness {
        fn new(state: FilterState) -> Self {
            let clock = FakeTimer::default();
            let visits = RecordingNavigator::default();
            let sync = FilterSync::new(
                "/stores",
                state,
                DEFAULT_DEBOUNCE,
                clock.clone(),
                visits.clone(),
            );
            Self { clock, visits, sync }
        }

        /// Сдвинуть время, отработав созревший таймер
        fn advance(&mut self, ms: u64) {
            let due = {
                let mut clock = self.clock.0.borrow_mut();
                clock.now += Duration::from_millis(ms);
                match clock.armed {
                    Some((ticket, deadline)) if deadline <= clock.now => {
                        clock.armed = None;
                        Some(ticket)
                    }
                    _ => None,
                }
            };
            if let Some(ticket) = due {
                self.sync.on_timer_elapsed(ticket);
            }
        }

        fn requests(&self) -> Vec<VisitRequest> {
            self.visits.0.borrow().clone()
        }
    }

    #[test]
    fn test_typing_burst_coalesces_into_single_request() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        let text = "toko a";
        for i in 1..=text.len() {
            h.advance(30);
            h.sync.set_field("search", &text[..i]);
        }
        assert!(h.requests().is_empty());
        h.advance(299);
        assert!(h.requests().is_empty());
        h.advance(1);

        let requests = h.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query.to_query_string(), "search=toko+a");
        assert_eq!(requests[0].url(), "/stores?search=toko+a");
        assert_eq!(h.sync.phase(), SyncPhase::Idle);
    }

    #[test]
    fn test_last_value_wins_within_window() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        h.sync.set_field("status", "active");
        h.advance(50);
        h.sync.set_field("status", "inactive");
        h.advance(1_000);

        let requests = h.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query.to_query_string(), "status=inactive");
    }

    #[test]
    fn test_fields_set_in_same_tick_share_request() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        h.sync.set_field("store_id", "3");
        h.sync.set_field("status", "active");
        h.advance(300);

        let requests = h.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query.get("store_id"), Some("3"));
        assert_eq!(requests[0].query.get("status"), Some("active"));
        assert_eq!(requests[0].query.len(), 2);
    }

    #[test]
    fn test_set_fields_arms_once() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        h.sync.set_fields([
            ("date_from", "2024-01-01".to_string()),
            ("date_to", "2024-01-31".to_string()),
        ]);
        assert_eq!(h.clock.0.borrow().arm_count, 1);
        h.advance(300);
        assert_eq!(
            h.requests()[0].query.to_query_string(),
            "date_from=2024-01-01&date_to=2024-01-31"
        );
    }

    #[test]
    fn test_reset_is_immediate_and_clears_fields() {
        let initial = FilterState::from_query(FIELDS, &QueryRequest::parse("search=foo"));
        let mut h = Harness::new(initial);
        h.sync.reset();

        let requests = h.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query.get("search"), None);
        assert!(requests[0].query.is_empty());
        assert_eq!(requests[0].url(), "/stores");
    }

    #[test]
    fn test_reset_cancels_pending_sync() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        h.sync.set_field("search", "filter");
        h.sync.reset();
        assert!(h.clock.0.borrow().armed.is_none());
        assert_eq!(h.sync.phase(), SyncPhase::Idle);
        h.advance(1_000);

        let requests = h.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].query.is_empty());
    }

    #[test]
    fn test_reset_keeps_default_sort() {
        let initial = FilterState::from_query(
            SORTED_FIELDS,
            &QueryRequest::parse("search=foo&status=done&sort_by=technician"),
        );
        let mut h = Harness::new(initial);
        h.sync.reset();
        assert_eq!(
            h.requests()[0].query.to_query_string(),
            "sort_by=scheduled_for"
        );
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        h.sync.set_field("search", "a");
        let SyncPhase::PendingSync(first) = h.sync.phase() else {
            panic!("expected pending sync");
        };
        h.sync.set_field("search", "ab");
        assert!(!h.sync.on_timer_elapsed(first));
        assert!(h.requests().is_empty());
        assert!(matches!(h.sync.phase(), SyncPhase::PendingSync(t) if t != first));
    }

    #[test]
    fn test_timer_in_idle_does_nothing() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        assert!(!h.sync.on_timer_elapsed(SyncTicket(42)));
        assert!(h.requests().is_empty());
    }

    #[test]
    fn test_flush_sends_pending_now() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        h.sync.flush();
        assert!(h.requests().is_empty());

        h.sync.set_field("search", "jakarta");
        h.sync.flush();
        assert_eq!(h.requests().len(), 1);
        assert_eq!(h.sync.phase(), SyncPhase::Idle);
        h.advance(1_000);
        assert_eq!(h.requests().len(), 1);
    }

    #[test]
    fn test_unknown_field_does_not_schedule() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        h.sync.set_field("color", "red");
        assert_eq!(h.sync.phase(), SyncPhase::Idle);
        assert_eq!(h.clock.0.borrow().arm_count, 0);
    }

    #[test]
    fn test_clearing_field_omits_key() {
        let initial =
            FilterState::from_query(FIELDS, &QueryRequest::parse("search=foo&status=active"));
        let mut h = Harness::new(initial);
        h.sync.set_field("search", "");
        h.advance(300);
        assert_eq!(h.requests()[0].query.to_query_string(), "status=active");
    }

    #[test]
    fn test_separate_bursts_produce_separate_requests() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        h.sync.set_field("status", "active");
        h.advance(300);
        h.sync.set_field("status", "inactive");
        h.advance(300);
        let urls: Vec<_> = h.requests().iter().map(VisitRequest::url).collect();
        assert_eq!(urls, vec!["/stores?status=active", "/stores?status=inactive"]);
        assert_eq!(h.sync.last_request().map(|r| r.url()), Some(urls[1].clone()));
    }

    #[test]
    fn test_filter_visits_preserve_state_and_replace_history() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        h.sync.set_field("search", "x");
        h.advance(300);
        let options = h.requests()[0].options;
        assert!(options.preserve_state);
        assert!(options.preserve_scroll);
        assert!(options.replace);
    }

    fn url_state(query: &str) -> FilterState {
        FilterState::from_query(FIELDS, &QueryRequest::parse(query))
    }

    #[test]
    fn test_back_navigation_state_is_built_upon() {
        let mut h = Harness::new(url_state("search=a"));
        h.sync.set_field("search", "b");
        h.sync.flush();

        // Назад: URL снова ?search=a
        assert!(h.sync.adopt(url_state("search=a")));
        assert_eq!(h.sync.state().value("search"), "a");
        assert_eq!(h.requests().len(), 1);

        h.sync.set_field("status", "active");
        h.sync.flush();
        let urls: Vec<_> = h.requests().iter().map(VisitRequest::url).collect();
        assert_eq!(urls, vec!["/stores?search=b", "/stores?search=a&status=active"]);
    }

    #[test]
    fn test_adopt_cancels_pending_sync() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        h.sync.set_field("search", "draft");
        assert!(h.sync.adopt(url_state("store_id=4")));
        assert_eq!(h.sync.phase(), SyncPhase::Idle);
        assert!(h.clock.0.borrow().armed.is_none());
        h.advance(1_000);
        assert!(h.requests().is_empty());
        assert_eq!(h.sync.state().value("search"), "");
        assert_eq!(h.sync.state().value("store_id"), "4");
    }

    #[test]
    fn test_adopt_same_url_is_noop() {
        let mut h = Harness::new(url_state("status=active"));
        assert!(!h.sync.adopt(url_state("status=active")));
        assert_eq!(h.sync.phase(), SyncPhase::Idle);
        assert!(h.requests().is_empty());
    }

    #[test]
    fn test_own_visit_echo_keeps_newer_edits() {
        let mut h = Harness::new(FilterState::new(FIELDS));
        h.sync.set_field("search", "ab");
        h.advance(300);
        h.sync.set_field("search", "abc");

        // URL догнал первый визит, пока вторая правка ещё ждёт таймера
        assert!(!h.sync.adopt(url_state("search=ab")));
        assert_eq!(h.sync.state().value("search"), "abc");
        h.advance(300);
        let last = h.requests().last().map(VisitRequest::url);
        assert_eq!(last.as_deref(), Some("/stores?search=abc"));
    }
}
