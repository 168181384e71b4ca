use chrono::Utc;
use contracts::domain::a003_filter_installation::aggregate::{
    FilterInstallationDto, API_PATH, LIST_ROUTE,
};
use contracts::domain::a004_maintenance_schedule::aggregate::LIST_ROUTE as SCHEDULES_ROUTE;
use contracts::shared::filter_state::keys;
use contracts::shared::{Loadable, QueryRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::shared::api_utils::{api_url, fetch_json};
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::{format_date, service_due_label};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Адрес API карточки по QR-коду
pub fn qr_api_url(qr_code: &str) -> String {
    api_url(&format!("{}/qr/{}", API_PATH, urlencoding::encode(qr_code)))
}

/// Сегмент пути с QR-кодом; некорректная кодировка оставляется как есть
fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Ссылка на график обслуживания, отфильтрованный по точке установки
fn schedules_url(record: &FilterInstallationDto) -> String {
    QueryRequest::new()
        .with(keys::STORE_ID, record.store_id.to_string())
        .with(keys::SEARCH, record.qr_code.clone())
        .url_for(SCHEDULES_ROUTE)
}

/// Карточка установки, открываемая сканированием QR-кода.
///
/// Сервер всегда отвечает `Loadable`: либо найденная запись, либо заглушка
/// с тем же кодом. Вариант выбирается здесь только для отображения.
#[component]
pub fn InstallationQrCard() -> impl IntoView {
    let params = use_params_map();
    let code = Signal::derive(move || {
        params.with(|p| p.get("code").map(|c| decode_segment(&c)).unwrap_or_default())
    });

    let card = RwSignal::new(None::<Loadable<FilterInstallationDto>>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let qr = code.get();
        card.set(None);
        error.set(None);
        spawn_local(async move {
            match fetch_json::<Loadable<FilterInstallationDto>>(&qr_api_url(&qr)).await {
                Ok(loaded) => card.set(Some(loaded)),
                Err(e) => {
                    log::error!("qr card {}: {}", qr, e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <PageFrame page_id="a003_filter_installation--qr" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("qr")}
                    <h1 class="page__title">"Фильтр " {move || code.get()}</h1>
                </div>
                <div class="page__header-right">
                    <A href=LIST_ROUTE>"← К списку установок"</A>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}
                {move || match card.get() {
                    None => view! { <div class="page__placeholder">"Загрузка..."</div> }.into_any(),
                    Some(Loadable::Loaded(record)) => view! { <QrCardBody record=record /> }.into_any(),
                    Some(Loadable::Unloaded(placeholder)) => view! {
                        <div class="alert alert--warning">
                            "Фильтр с QR-кодом «" {placeholder.qr_code} "» не зарегистрирован."
                        </div>
                    }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn QrCardBody(record: FilterInstallationDto) -> impl IntoView {
    let today = Utc::now().date_naive();
    let schedules = schedules_url(&record);

    view! {
        <dl class="details-grid">
            <dt>"Торговая точка"</dt>
            <dd>{record.store_name.clone()}</dd>
            <dt>"Модель фильтра"</dt>
            <dd>{record.filter_model.clone()}</dd>
            <dt>"Статус"</dt>
            <dd><StatusBadge status=record.status /></dd>
            <dt>"Дата установки"</dt>
            <dd>{format_date(record.installed_at)}</dd>
            <dt>"Следующее обслуживание"</dt>
            <dd>
                {format!(
                    "{} ({})",
                    format_date(record.next_service_on),
                    service_due_label(record.next_service_on, today),
                )}
            </dd>
        </dl>
        <A href=schedules>"График обслуживания"</A>
    }
}
