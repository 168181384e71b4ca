use crate::shared::filter_sync::FilterSyncHandle;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Панель фильтров: заголовок с бейджем активных фильтров, пагинацией и
/// кнопкой сброса; содержимое сворачивается.
#[component]
pub fn FilterPanel(
    filters: FilterSyncHandle,

    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Pagination controls (slot)
    #[prop(into)]
    pagination_controls: ViewFn,

    /// Filter content (form fields)
    #[prop(into)]
    filter_content: ViewFn,

    /// Filter tags (active filter chips) - optional
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,
) -> impl IntoView {
    let active_filters_count = filters.active_count();

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Фильтры"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! { <span class="badge badge--primary">{count}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
                <div class="filter-panel-header__right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| filters.reset()
                        disabled=Signal::derive(move || active_filters_count.get() == 0)
                    >
                        {icon("refresh")}
                        " Сбросить"
                    </Button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                    {filter_tags.map(|tags| view! {
                        <div class="filter-panel__tags">{tags.run()}</div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Чип активного фильтра; крестик очищает поле
#[component]
pub fn FilterTag(
    filters: FilterSyncHandle,
    field: &'static str,
    /// Подпись поля, например "Статус"
    #[prop(into)]
    label: String,
    /// Отображаемое значение (по умолчанию - значение поля как есть)
    #[prop(optional, into)]
    display: Option<Signal<String>>,
    /// Второе поле, очищаемое вместе с основным (граница периода)
    #[prop(optional)]
    paired: Option<&'static str>,
) -> impl IntoView {
    let value = filters.value(field);
    let paired_value = paired.map(|key| filters.value(key));
    let display = display.unwrap_or(value);
    let is_active = move || {
        !value.get().is_empty() || paired_value.is_some_and(|v| !v.get().is_empty())
    };

    view! {
        <Show when=is_active>
            <div class="filter-tag">
                <span>{label.clone()}": "{move || display.get()}</span>
                <span
                    class="filter-tag__remove"
                    on:click=move |e| {
                        e.stop_propagation();
                        let mut cleared = vec![(field, String::new())];
                        cleared.extend(paired.map(|key| (key, String::new())));
                        filters.set_fields(cleared);
                        filters.flush();
                    }
                >
                    {icon("x")}
                </span>
            </div>
        </Show>
    }
}
