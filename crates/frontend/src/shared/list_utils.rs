/// Утилиты для страниц списков: поиск, сортировка
use contracts::shared::filter_state::keys;
use leptos::prelude::*;

use crate::shared::filter_sync::FilterSyncHandle;

pub const SORT_ASC: &str = "asc";
pub const SORT_DESC: &str = "desc";

/// Новая пара (sort_by, sort_direction) после клика по заголовку колонки.
///
/// Повторный клик по той же колонке меняет направление, клик по другой
/// колонке сортирует её по возрастанию. Пустое направление считается `asc`.
pub fn next_sort(current_field: &str, current_direction: &str, field: &str) -> (String, String) {
    if current_field == field {
        let direction = if current_direction == SORT_DESC {
            SORT_ASC
        } else {
            SORT_DESC
        };
        (field.to_string(), direction.to_string())
    } else {
        (field.to_string(), SORT_ASC.to_string())
    }
}

/// Поле, по которому сервер фактически отсортировал строки
pub fn effective_sort<'a>(sort_by: &'a str, fallback: Option<&'a str>) -> &'a str {
    match (sort_by, fallback) {
        ("", Some(fallback)) => fallback,
        (sort_by, _) => sort_by,
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, direction: &str) -> &'static str {
    if current_field == field {
        if direction == SORT_DESC {
            " ▼"
        } else {
            " ▲"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Пока идёт загрузка, таблица остаётся на экране полупрозрачной
pub fn table_wrapper_class(loading: bool) -> &'static str {
    if loading {
        "table-wrapper table-wrapper--loading"
    } else {
        "table-wrapper"
    }
}

/// Заголовок колонки с переключением сортировки через синхронизатор
#[component]
pub fn SortableHeader(
    filters: FilterSyncHandle,
    field: &'static str,
    #[prop(into)] label: String,
    /// Сортировка сервера при пустом `sort_by`
    #[prop(optional)]
    fallback: Option<&'static str>,
) -> impl IntoView {
    let value = filters.value(keys::SORT_BY);
    let sort_by = Signal::derive(move || effective_sort(&value.get(), fallback).to_string());
    let direction = filters.value(keys::SORT_DIRECTION);

    let toggle = move |_| {
        let (by, dir) = next_sort(&sort_by.get_untracked(), &direction.get_untracked(), field);
        filters.set_fields([(keys::SORT_BY, by), (keys::SORT_DIRECTION, dir)]);
        // клик по заголовку - осознанное действие, без ожидания debounce
        filters.flush();
    };

    view! {
        <div class="table__sortable-header" style="cursor: pointer;" on:click=toggle>
            {label}
            <span class=move || get_sort_class(&sort_by.get(), field)>
                {move || get_sort_indicator(&sort_by.get(), field, &direction.get())}
            </span>
        </div>
    }
}

/// Поле поиска, привязанное к полю фильтра.
///
/// Каждое нажатие клавиши уходит в синхронизатор, который сам откладывает
/// запрос; Enter отправляет его сразу.
#[component]
pub fn SearchInput(
    filters: FilterSyncHandle,
    /// Ключ поля фильтра
    #[prop(optional)]
    field: Option<&'static str>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let field = field.unwrap_or(keys::SEARCH);
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };
    let value = filters.value(field);

    let clear_filter = move |_| {
        filters.set_field(field, "");
        filters.flush();
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                class=move || if value.get().is_empty() { "input" } else { "input input--active" }
                placeholder=placeholder
                style="width: 250px; padding: 6px 32px 6px 10px;"
                prop:value=move || value.get()
                on:input=move |ev| filters.set_field(field, event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        filters.flush();
                    }
                }
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; line-height: 1;"
                        on:click=clear_filter
                        title="Очистить"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_sort_toggles_direction() {
        assert_eq!(
            next_sort("name", "", "name"),
            ("name".to_string(), "desc".to_string())
        );
        assert_eq!(
            next_sort("name", "desc", "name"),
            ("name".to_string(), "asc".to_string())
        );
    }

    #[test]
    fn test_next_sort_new_column_ascending() {
        assert_eq!(
            next_sort("name", "desc", "code"),
            ("code".to_string(), "asc".to_string())
        );
    }

    #[test]
    fn test_empty_sort_uses_fallback() {
        assert_eq!(effective_sort("", Some("name")), "name");
        assert_eq!(effective_sort("city", Some("name")), "city");
        assert_eq!(effective_sort("", None), "");

        let current = effective_sort("", Some("name"));
        assert_eq!(get_sort_indicator(current, "name", ""), " ▲");
        assert_eq!(
            next_sort(current, "", "name"),
            ("name".to_string(), "desc".to_string())
        );
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", ""), " ▲");
        assert_eq!(get_sort_indicator("name", "name", "desc"), " ▼");
        assert_eq!(get_sort_indicator("name", "code", "desc"), " ⇅");
    }
}
