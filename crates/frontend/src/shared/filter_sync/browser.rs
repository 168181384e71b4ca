//! Браузерные реализации таймера debounce и навигации.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos_router::NavigateOptions;

use super::machine::{DebounceTimer, Navigator, SyncTicket, VisitRequest};

/// Таймер на `setTimeout`. Держит не больше одного `Timeout`;
/// замена или сброс слота отменяет предыдущий.
pub struct GlooDebounceTimer {
    slot: Option<Timeout>,
    on_elapsed: Rc<dyn Fn(SyncTicket)>,
}

impl GlooDebounceTimer {
    pub fn new(on_elapsed: impl Fn(SyncTicket) + 'static) -> Self {
        Self {
            slot: None,
            on_elapsed: Rc::new(on_elapsed),
        }
    }
}

impl DebounceTimer for GlooDebounceTimer {
    fn arm(&mut self, ticket: SyncTicket, delay: Duration) {
        let on_elapsed = Rc::clone(&self.on_elapsed);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        self.slot = Some(Timeout::new(millis, move || on_elapsed(ticket)));
    }

    fn disarm(&mut self) {
        if let Some(timeout) = self.slot.take() {
            timeout.cancel();
        }
    }
}

/// Навигация через `leptos_router`.
///
/// Переход на тот же маршрут с другими параметрами не пересоздаёт
/// компонент страницы, поэтому её локальное состояние сохраняется.
pub struct RouterNavigator {
    navigate: Box<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        Self {
            navigate: Box::new(navigate),
        }
    }
}

impl Navigator for RouterNavigator {
    fn visit(&mut self, request: &VisitRequest) {
        let options = NavigateOptions {
            replace: request.options.replace,
            scroll: !request.options.preserve_scroll,
            ..Default::default()
        };
        (self.navigate)(&request.url(), options);
    }
}
