pub mod left;

use leptos::prelude::*;

use crate::shared::theme::{use_appearance, AppearanceToggle};

/// Каркас приложения: боковое меню слева, страница справа.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |          Content             |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let appearance = use_appearance();

    view! {
        <div class="app-layout" data-appearance=move || appearance.get().as_str()>
            <div class="app-body">
                <aside class="app-sidebar">
                    <div class="app-sidebar__brand">
                        <span class="app-sidebar__title">"Сервис фильтров"</span>
                        <AppearanceToggle />
                    </div>
                    <left::Sidebar />
                </aside>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
