use crate::shared::filter_sync::FilterSyncHandle;
use leptos::prelude::*;
use thaw::*;

/// Значение пункта «Все»: пустая строка, то есть «фильтр не задан»
pub const ALL_OPTION_VALUE: &str = "";

/// Выпадающий список, привязанный к полю фильтра.
/// Первый пункт «Все» всегда очищает поле.
#[component]
pub fn SelectFilter(
    filters: FilterSyncHandle,
    field: &'static str,
    #[prop(into)] label: String,
    /// (значение, подпись)
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Ошибка валидации поля от сервера
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let value = filters.value(field);

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Label>{label}</Label>
            <select
                class="select"
                prop:value=move || value.get()
                on:change=move |ev| filters.set_field(field, event_target_value(&ev))
            >
                <option value=ALL_OPTION_VALUE selected=move || value.get().is_empty()>"Все"</option>
                {move || options.get().into_iter().map(|(code, name)| {
                    let selected_code = code.clone();
                    view! {
                        <option value=code selected=move || value.get() == selected_code>{name}</option>
                    }
                }).collect_view()}
            </select>
            {error.map(|e| view! { <FieldError error=e /> })}
        </Flex>
    }
}

/// Сообщение об ошибке рядом с полем
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <div class="field-error">{message}</div> })
    }
}

/// Варианты для выпадающего списка, загружаемые с сервера один раз
pub fn use_remote_options(api_path: &'static str) -> RwSignal<Vec<(String, String)>> {
    use crate::shared::api_utils::{api_url, fetch_json};
    use contracts::domain::common::SelectOption;
    use leptos::task::spawn_local;

    let options = RwSignal::new(Vec::new());
    spawn_local(async move {
        match fetch_json::<Vec<SelectOption>>(&api_url(api_path)).await {
            Ok(items) => options.set(
                items
                    .into_iter()
                    .map(|o| (o.id.to_string(), o.name))
                    .collect(),
            ),
            Err(e) => log::error!("options {}: {}", api_path, e),
        }
    });
    options
}
