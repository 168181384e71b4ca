use contracts::shared::{Paginated, PaginationLink};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Строка "с–по из всего"
pub fn summary_text(from: Option<usize>, to: Option<usize>, total: usize) -> String {
    match (from, to) {
        (Some(from), Some(to)) => format!("{}–{} из {}", from, to, total),
        _ => "Нет записей".to_string(),
    }
}

/// Навигация по ссылкам страниц, пришедшим с сервером.
///
/// Переход по ссылке - обычный визит: новая запись в истории,
/// позиция прокрутки сохраняется.
#[component]
pub fn PaginationControls<T>(
    #[prop(into)]
    page: Signal<Option<Paginated<T>>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let navigate = StoredValue::new_local(use_navigate());

    let links = Signal::derive(move || {
        page.with(|p| p.as_ref().map(|p| p.links.clone()).unwrap_or_default())
    });
    let summary = Signal::derive(move || {
        page.with(|p| match p {
            Some(p) => summary_text(p.from, p.to, p.total),
            None => String::new(),
        })
    });

    let render_link = move |link: PaginationLink| {
        let class = if link.active {
            "pagination-btn pagination-btn--active"
        } else {
            "pagination-btn"
        };
        let url = link.url.clone();
        let disabled = url.is_none() || link.active;
        view! {
            <button
                class=class
                disabled=disabled
                on:click=move |_| {
                    if let Some(url) = url.as_deref() {
                        navigate.with_value(|nav| {
                            nav(url, NavigateOptions { scroll: false, ..Default::default() })
                        });
                    }
                }
            >
                {link.label}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {move || links.get().into_iter().map(render_link).collect_view()}
            <span class="pagination-info">{move || summary.get()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_text() {
        assert_eq!(summary_text(Some(16), Some(30), 42), "16–30 из 42");
        assert_eq!(summary_text(None, None, 0), "Нет записей");
    }
}
